use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::error::{Result, StatError};

/// Number of hypotheses kept in the selection for rank `u` out of `n`.
#[inline]
pub(super) fn selection_size(n: usize, u: usize) -> usize {
    n - u + 1
}

/// Bonferroni partial conjunction p-value: `k * p_(u)`.
///
/// `sorted_p_values` must be ascending and `u` in `[1, n]`. Not clamped.
pub(super) fn bonferroni_partial(sorted_p_values: &[f64], u: usize) -> f64 {
    let k = selection_size(sorted_p_values.len(), u);
    k as f64 * sorted_p_values[u - 1]
}

/// Prefix sums of `ln p` over the ascending p-values.
///
/// `sums[k]` is the log-sum of the `k` smallest p-values, so the vector has
/// one more entry than the input. A zero p-value turns its prefix and every
/// longer one into negative infinity.
pub(super) fn log_prefix_sums(sorted_p_values: &[f64]) -> Vec<f64> {
    let mut sums = Vec::with_capacity(sorted_p_values.len() + 1);
    let mut acc = 0.0;
    sums.push(acc);
    for &p in sorted_p_values {
        acc += p.ln();
        sums.push(acc);
    }
    sums
}

/// Fisher partial conjunction p-value from the log-sum of the `k` selected p-values.
///
/// Computes `1 - F(-2 * log_sum)` for a chi-squared distribution with `2k`
/// degrees of freedom through the survival function. A log-sum of negative
/// infinity means a selected p-value was zero, which combines to zero.
pub(super) fn fisher_partial(log_sum: f64, k: usize) -> Result<f64> {
    if log_sum == f64::NEG_INFINITY {
        return Ok(0.0);
    }

    let statistic = -2.0 * log_sum;
    let df = 2.0 * k as f64;
    let chi_sq = ChiSquared::new(df).map_err(|e| {
        StatError::NumericalDomain(format!(
            "cannot build chi-squared distribution with {} degrees of freedom: {}",
            df, e
        ))
    })?;
    let p = chi_sq.sf(statistic);

    if !p.is_finite() {
        return Err(StatError::NumericalDomain(format!(
            "Fisher combination of {} p-values produced {}",
            k, p
        )));
    }
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn test_selection_size() {
        assert_eq!(selection_size(5, 1), 5);
        assert_eq!(selection_size(5, 5), 1);
    }

    #[test]
    fn test_bonferroni_partial() {
        let p = [0.01, 0.02, 0.5];
        assert!((bonferroni_partial(&p, 1) - 0.03).abs() < TOL);
        assert!((bonferroni_partial(&p, 2) - 0.04).abs() < TOL);
        assert!((bonferroni_partial(&p, 3) - 0.5).abs() < TOL);
    }

    #[test]
    fn test_bonferroni_partial_can_exceed_one() {
        assert!((bonferroni_partial(&[0.9, 0.9], 1) - 1.8).abs() < TOL);
    }

    #[test]
    fn test_log_prefix_sums() {
        let p = [0.1, 0.5, 1.0];
        let sums = log_prefix_sums(&p);
        assert_eq!(sums.len(), 4);
        assert_eq!(sums[0], 0.0);
        assert!((sums[1] - 0.1_f64.ln()).abs() < TOL);
        assert!((sums[2] - (0.1_f64.ln() + 0.5_f64.ln())).abs() < TOL);
        assert!((sums[3] - sums[2]).abs() < TOL);
    }

    #[test]
    fn test_log_prefix_sums_zero() {
        let sums = log_prefix_sums(&[0.0, 0.3]);
        assert_eq!(sums[1], f64::NEG_INFINITY);
        assert_eq!(sums[2], f64::NEG_INFINITY);
    }

    #[test]
    fn test_fisher_single_value_is_identity() {
        // With k = 1, -2 ln p ~ chi2(2) has survival exp(ln p) = p
        for p in [0.001_f64, 0.04, 0.3, 0.9] {
            let combined = fisher_partial(p.ln(), 1).unwrap();
            assert!((combined - p).abs() < 1e-9, "{} vs {}", combined, p);
        }
    }

    #[test]
    fn test_fisher_two_values_closed_form() {
        // For df = 4 the survival function is exp(-x/2) * (1 + x/2)
        let log_sum = 0.01_f64.ln() + 0.02_f64.ln();
        let x = -2.0 * log_sum;
        let expected = (-x / 2.0).exp() * (1.0 + x / 2.0);
        let combined = fisher_partial(log_sum, 2).unwrap();
        assert!((combined - expected).abs() < 1e-9);
    }

    #[test]
    fn test_fisher_all_ones() {
        let combined = fisher_partial(0.0, 3).unwrap();
        assert!((combined - 1.0).abs() < TOL);
    }

    #[test]
    fn test_fisher_zero_p_value() {
        assert_eq!(fisher_partial(f64::NEG_INFINITY, 4).unwrap(), 0.0);
    }
}
