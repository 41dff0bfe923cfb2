use crate::error::{Result, StatError};

/// Validate that a collection of p-values is non-empty and within [0, 1].
///
/// Reports the first offending index. NaN is never a valid p-value.
pub(crate) fn validate_p_values(p_values: &[f64]) -> Result<()> {
    if p_values.is_empty() {
        return Err(StatError::EmptyData);
    }

    for (index, &value) in p_values.iter().enumerate() {
        if !(0.0..=1.0).contains(&value) {
            return Err(StatError::InvalidPValue { index, value });
        }
    }
    Ok(())
}

/// Validate the inputs of a single partial conjunction computation.
pub(super) fn validate_partial_conjunction(sorted_p_values: &[f64], u: usize) -> Result<()> {
    validate_p_values(sorted_p_values)?;

    let n = sorted_p_values.len();
    if u == 0 || u > n {
        return Err(StatError::InvalidParameter(format!(
            "rank u must be in [1, {}], got {}",
            n, u
        )));
    }
    if let Some(i) = sorted_p_values.windows(2).position(|w| w[0] > w[1]) {
        return Err(StatError::InvalidParameter(format!(
            "p-values must be sorted ascending, but {} at index {} exceeds {}",
            sorted_p_values[i],
            i,
            sorted_p_values[i + 1]
        )));
    }
    Ok(())
}
