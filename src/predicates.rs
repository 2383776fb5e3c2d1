//! Matrix property predicates
//!
//! Both predicates reduce to core machinery: symmetry is an entrywise
//! tolerance comparison against the transpose, positive-definiteness is a
//! Cholesky probe. A non-positive-definite input is an answer (`false`),
//! never an error; only a malformed (non-square) input fails the probe.

use crate::kernel::{DenseKernel, NalgebraKernel};
use crate::validate;
use crate::{error::Result, Matrix};

/// Default relative tolerance for the symmetry comparison.
pub const DEFAULT_SYMMETRY_RTOL: f64 = 1e-10;

/// Whether `A[i,j]` and `A[j,i]` agree within the default relative
/// tolerance. A non-square matrix is never symmetric.
pub fn is_symmetric(a: &Matrix) -> bool {
    is_symmetric_with_tolerance(a, DEFAULT_SYMMETRY_RTOL)
}

/// As [`is_symmetric`] with an explicit relative tolerance.
///
/// Entries are compared purely relatively, `|a_ij - a_ji| <= rtol *
/// max(|a_ij|, |a_ji|)`, so a tighter caller-supplied tolerance is always
/// honored and exactly equal entries (including zeros) always agree.
pub fn is_symmetric_with_tolerance(a: &Matrix, rtol: f64) -> bool {
    let (rows, cols) = *a.shape();
    if rows != cols {
        return false;
    }
    for i in 0..rows {
        for j in (i + 1)..cols {
            if !entries_agree(a[[i, j]], a[[j, i]], rtol) {
                return false;
            }
        }
    }
    true
}

/// Entrywise agreement test, shared with the kernel's symmetry probe so the
/// two cannot drift apart.
pub(crate) fn entries_agree(x: f64, y: f64, rtol: f64) -> bool {
    (x - y).abs() <= rtol * x.abs().max(y.abs())
}

/// Whether a Cholesky factorization of `A` completes without a non-positive
/// pivot. Requires square input; a non-positive-definite matrix yields
/// `Ok(false)`.
pub fn is_positive_definite(a: &Matrix) -> Result<bool> {
    is_positive_definite_with(&NalgebraKernel, a)
}

/// As [`is_positive_definite`], against an explicit kernel.
pub fn is_positive_definite_with<K: DenseKernel>(kernel: &K, a: &Matrix) -> Result<bool> {
    validate::require_square(a)?;
    Ok(kernel.cholesky_succeeds(a))
}
