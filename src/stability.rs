//! Condition-number estimation and singularity thresholds
//!
//! Two independent thresholds with deliberately different roles:
//!
//! - the hard-failure threshold `1 / epsilon` classifies a matrix as
//!   singular for `inverse` and `solve_linear_system`, which cannot return a
//!   meaningful result for such input;
//! - the advisory threshold `1e10` only flags a large determinant
//!   computation as numerically suspect; the value is still returned.
//!
//! The gap between the two is intentional and must not be unified: a
//! determinant is always computable (just possibly inaccurate), while a
//! near-singular system has no trustworthy solution.

use std::fmt;

use crate::error::{LinAlgError, Result};
use crate::kernel::{DenseKernel, NalgebraKernel};
use crate::Matrix;

/// Condition numbers above this value classify a matrix as singular for
/// operations that require invertibility. Equals `1 / f64::EPSILON`,
/// roughly 4.5e15.
pub const SINGULAR_THRESHOLD: f64 = 1.0 / f64::EPSILON;

/// Condition numbers above this value trigger a non-fatal advisory on
/// determinant computations.
pub const ADVISORY_THRESHOLD: f64 = 1e10;

/// The advisory conditioning check only applies to matrices strictly larger
/// than this order.
pub const ADVISORY_MIN_DIM: usize = 10;

/// A non-fatal diagnostic accompanying a still-valid result.
#[derive(Debug, Clone, PartialEq)]
pub enum Advisory {
    /// The input is ill-conditioned; the result was computed but may be
    /// numerically unreliable.
    IllConditioned {
        condition_number: f64,
        threshold: f64,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllConditioned {
                condition_number,
                threshold,
            } => write!(
                f,
                "matrix has high condition number ({condition_number:.2e}, threshold {threshold:.2e}); \
                 result may be numerically unreliable"
            ),
        }
    }
}

/// Condition number under the 2-norm: the ratio of the largest to smallest
/// singular value. Returns `f64::INFINITY` for an exactly singular matrix.
pub fn condition_number(a: &Matrix) -> Result<f64> {
    condition_number_with(&NalgebraKernel, a)
}

/// As [`condition_number`], against an explicit kernel.
pub fn condition_number_with<K: DenseKernel>(kernel: &K, a: &Matrix) -> Result<f64> {
    let (rows, cols) = *a.shape();
    if rows == 0 || cols == 0 {
        return Err(LinAlgError::EmptyMatrix);
    }
    let sv = kernel.singular_values(a);
    let smax = sv.iter().fold(0.0_f64, |acc, &s| acc.max(s));
    let smin = sv.iter().fold(f64::INFINITY, |acc, &s| acc.min(s));
    if smin == 0.0 {
        return Ok(f64::INFINITY);
    }
    Ok(smax / smin)
}

/// Whether a condition number exceeds the hard-failure threshold.
pub fn exceeds_singular_threshold(condition_number: f64) -> bool {
    condition_number > SINGULAR_THRESHOLD
}

/// Whether a condition number exceeds the advisory threshold.
pub fn exceeds_advisory_threshold(condition_number: f64) -> bool {
    condition_number > ADVISORY_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construct::{identity, matrix_from_rows};
    use approx::assert_abs_diff_eq;

    #[test]
    fn identity_is_perfectly_conditioned() {
        let cond = condition_number(&identity(4)).unwrap();
        assert_abs_diff_eq!(cond, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn singular_matrix_has_infinite_condition_number() {
        let a = matrix_from_rows(&[vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
        let cond = condition_number(&a).unwrap();
        assert!(cond.is_infinite());
    }

    #[test]
    fn diagonal_condition_number_is_entry_ratio() {
        let a = matrix_from_rows(&[vec![100.0, 0.0], vec![0.0, 1.0]]).unwrap();
        let cond = condition_number(&a).unwrap();
        assert_abs_diff_eq!(cond, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn empty_matrix_is_rejected() {
        let a = matrix_from_rows::<f64>(&[]).unwrap();
        assert!(matches!(
            condition_number(&a),
            Err(LinAlgError::EmptyMatrix)
        ));
    }

    #[test]
    fn thresholds_are_decoupled() {
        // The advisory threshold fires long before the hard threshold does.
        assert!(exceeds_advisory_threshold(1e12));
        assert!(!exceeds_singular_threshold(1e12));
        assert!(exceeds_singular_threshold(1e16));
    }

    #[test]
    fn advisory_display_mentions_the_condition_number() {
        let adv = Advisory::IllConditioned {
            condition_number: 3.0e12,
            threshold: ADVISORY_THRESHOLD,
        };
        assert!(adv.to_string().contains("3.00e12"));
    }
}
