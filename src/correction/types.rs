use std::fmt;
use std::str::FromStr;

use crate::error::StatError;

/// Method used to combine p-values into partial conjunction p-values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CorrectionMethod {
    /// Scales the u-th smallest p-value by the number of remaining hypotheses.
    /// Valid under arbitrary dependence between the underlying tests.
    #[default]
    Bonferroni,
    /// Chi-squared combination of log p-values.
    /// Assumes the underlying tests are independent, more powerful when they are.
    Fisher,
}

impl CorrectionMethod {
    /// Lowercase name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            CorrectionMethod::Bonferroni => "bonferroni",
            CorrectionMethod::Fisher => "fisher",
        }
    }
}

impl fmt::Display for CorrectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CorrectionMethod {
    type Err = StatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bonferroni" => Ok(CorrectionMethod::Bonferroni),
            "fisher" => Ok(CorrectionMethod::Fisher),
            _ => Err(StatError::InvalidMethod(s.to_string())),
        }
    }
}
