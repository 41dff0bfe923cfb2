//! Significance testing helpers for comparing machine learning models.
//!
//! Comparing several models usually means running one test per pair of models.
//! The raw p-values from those tests have to be corrected for the number of
//! comparisons before any null hypothesis is rejected. [`correct_p_values`]
//! does this with partial conjunction hypotheses, combining the p-values with
//! either Bonferroni's method (arbitrary dependence between the data sets) or
//! Fisher's method (independent data sets).
//!
//! ```
//! use deep_significance::{correct_p_values, CorrectionMethod};
//!
//! let corrected = correct_p_values(&[0.02, 0.5, 0.01], CorrectionMethod::Bonferroni)?;
//! assert_eq!(corrected.len(), 3);
//! assert!((corrected[2] - 0.03).abs() < 1e-12);
//! # Ok::<(), deep_significance::StatError>(())
//! ```
//!
//! # References
//! * Dror, R., Baumer, G., Bogomolov, M., and Reichart, R. (2017) "Replicability
//!   Analysis for Natural Language Processing: Testing Significance with Multiple
//!   Datasets"
//! * Benjamini, Y. and Heller, R. (2008) "Screening for Partial Conjunction Hypotheses"

pub mod correction;
pub mod error;

pub use correction::{correct_p_values, partial_conjunction, CorrectionMethod, SortPermutation};
pub use error::{Result, StatError};
