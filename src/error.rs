use thiserror::Error;

/// Errors raised while validating or correcting p-values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatError {
    #[error("list of p-values must not be empty")]
    EmptyData,

    #[error("invalid p-value at index {index}: {value} is not in [0, 1]")]
    InvalidPValue { index: usize, value: f64 },

    #[error("unknown correction method '{0}', expected 'bonferroni' or 'fisher'")]
    InvalidMethod(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("numerical domain error: {0}")]
    NumericalDomain(String),
}

pub type Result<T> = std::result::Result<T, StatError>;
