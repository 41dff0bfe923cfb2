//! Correction of p-values for multiple comparisons.
//!
//! Each rank `u` of the ascending p-values gets the p-value of the partial
//! conjunction hypothesis "at least u out of N null hypotheses are false",
//! combined with Bonferroni's or Fisher's method.

mod combination;
mod ordering;
mod types;
mod validation;

pub use ordering::SortPermutation;
pub use types::CorrectionMethod;

use combination::{bonferroni_partial, fisher_partial, log_prefix_sums, selection_size};
use validation::{validate_p_values, validate_partial_conjunction};

use crate::error::Result;
use log::{debug, trace};

/// Correct p-values for multiple comparisons.
///
/// Bonferroni's method is appropriate when the data sets the p-values came
/// from are dependent, Fisher's when they are independent.
///
/// # Arguments
/// * `p_values` - Raw p-values, one per comparison, each in [0, 1]
/// * `method` - How to combine p-values into partial conjunction p-values
///
/// # Returns
/// * Corrected p-values in the same order as `p_values`, each at most 1
///
/// # Errors
/// * `StatError::EmptyData` if `p_values` is empty
/// * `StatError::InvalidPValue` if any value is outside [0, 1] or NaN
pub fn correct_p_values(p_values: &[f64], method: CorrectionMethod) -> Result<Vec<f64>> {
    validate_p_values(p_values)?;

    let n = p_values.len();
    debug!("correcting {} p-values with {} method", n, method);

    // Nothing to correct for
    if n == 1 {
        return Ok(p_values.to_vec());
    }

    let permutation = SortPermutation::new(p_values);
    let corrected: Vec<f64> = combine_sorted(permutation.sorted_values(), method)?
        .into_iter()
        .map(|p| p.min(1.0))
        .collect();

    Ok(permutation.scatter(&corrected))
}

/// Calculate the partial conjunction p-value for `u` out of N.
///
/// Uses the `N - u + 1` smallest p-values. The result is not clamped, so
/// Bonferroni can return values above 1.
///
/// # Arguments
/// * `sorted_p_values` - p-values in ascending order
/// * `u` - Number of null hypotheses claimed false, in [1, N]
/// * `method` - Combination method
pub fn partial_conjunction(
    sorted_p_values: &[f64],
    u: usize,
    method: CorrectionMethod,
) -> Result<f64> {
    validate_partial_conjunction(sorted_p_values, u)?;

    match method {
        CorrectionMethod::Bonferroni => Ok(bonferroni_partial(sorted_p_values, u)),
        CorrectionMethod::Fisher => {
            let k = selection_size(sorted_p_values.len(), u);
            let log_sum: f64 = sorted_p_values[..k].iter().map(|p| p.ln()).sum();
            fisher_partial(log_sum, k)
        }
    }
}

/// Partial conjunction p-values for every rank of already sorted, valid p-values.
fn combine_sorted(sorted_p_values: &[f64], method: CorrectionMethod) -> Result<Vec<f64>> {
    let n = sorted_p_values.len();

    let combined: Vec<f64> = match method {
        CorrectionMethod::Bonferroni => (1..=n)
            .map(|u| bonferroni_partial(sorted_p_values, u))
            .collect(),
        CorrectionMethod::Fisher => {
            if sorted_p_values[0] == 0.0 {
                debug!("zero p-value present, every Fisher partial conjunction is 0");
            }
            let log_sums = log_prefix_sums(sorted_p_values);
            (1..=n)
                .map(|u| {
                    let k = selection_size(n, u);
                    fisher_partial(log_sums[k], k)
                })
                .collect::<Result<Vec<f64>>>()?
        }
    };

    for (u, p) in combined.iter().enumerate() {
        trace!("partial conjunction u={} of {}: {}", u + 1, n, p);
    }
    Ok(combined)
}
