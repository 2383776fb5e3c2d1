//! Core matrix and vector operations
//!
//! Every operation is a single-pass pipeline with no retained state:
//! validate, optionally stability-check, delegate to a [`DenseKernel`], then
//! either return the result or a typed error. Kernel-internal failures
//! (a zero pivot discovered mid-decomposition) are translated here and never
//! leak as raw backend errors.
//!
//! Each checked operation has a convenience form bound to the default
//! nalgebra kernel and a `*_with` form taking an explicit kernel plus an
//! options struct, so alternative backends can be substituted without
//! touching validation or error mapping.

use mdarray::Tensor;

use crate::error::{LinAlgError, Result};
use crate::kernel::{DenseKernel, EigenResult, NalgebraKernel};
use crate::stability::{
    self, Advisory, ADVISORY_MIN_DIM, ADVISORY_THRESHOLD,
};
use crate::validate;
use crate::{Matrix, Vector};

/// Options for [`determinant_with`].
#[derive(Debug, Clone, Copy)]
pub struct DetOptions {
    /// Run the advisory conditioning check on matrices larger than 10x10.
    pub check_numerical: bool,
}

impl Default for DetOptions {
    fn default() -> Self {
        Self {
            check_numerical: true,
        }
    }
}

/// A determinant together with any advisories raised while computing it.
///
/// Advisories are the non-fatal channel: the value is always present, the
/// advisories say whether it should be trusted.
#[derive(Debug, Clone, PartialEq)]
pub struct DetResult {
    pub value: f64,
    pub advisories: Vec<Advisory>,
}

/// Options for [`inverse_with`].
#[derive(Debug, Clone, Copy)]
pub struct InverseOptions {
    /// Check the condition number against the hard singularity threshold
    /// before attempting the inversion.
    pub check_singular: bool,
}

impl Default for InverseOptions {
    fn default() -> Self {
        Self {
            check_singular: true,
        }
    }
}

/// Determinant of a square matrix via pivoted LU.
///
/// Advisories raised by the conditioning check are mirrored to `log::warn!`;
/// use [`determinant_with`] to receive them in-band.
///
/// # Example
/// ```
/// use robust_linalg::{determinant, matrix_from_rows};
///
/// let a = matrix_from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert!((determinant(&a).unwrap() + 2.0).abs() < 1e-12);
/// ```
pub fn determinant(a: &Matrix) -> Result<f64> {
    let out = determinant_with(&NalgebraKernel, a, DetOptions::default())?;
    for advisory in &out.advisories {
        log::warn!("determinant: {advisory}");
    }
    Ok(out.value)
}

/// As [`determinant`], against an explicit kernel, returning advisories
/// alongside the value.
pub fn determinant_with<K: DenseKernel>(
    kernel: &K,
    a: &Matrix,
    options: DetOptions,
) -> Result<DetResult> {
    let n = validate::require_square(a)?;
    let value = kernel.lu_determinant(a);

    let mut advisories = Vec::new();
    if options.check_numerical && n > ADVISORY_MIN_DIM {
        let cond = stability::condition_number_with(kernel, a)?;
        if stability::exceeds_advisory_threshold(cond) {
            advisories.push(Advisory::IllConditioned {
                condition_number: cond,
                threshold: ADVISORY_THRESHOLD,
            });
        }
    }
    Ok(DetResult { value, advisories })
}

/// Inverse of a square matrix.
///
/// With the default options the condition number is checked first and a
/// matrix beyond the hard singularity threshold is rejected before any
/// inversion work. A zero pivot discovered during the decomposition itself
/// is reported the same way, without a condition number.
pub fn inverse(a: &Matrix) -> Result<Matrix> {
    inverse_with(&NalgebraKernel, a, InverseOptions::default())
}

/// As [`inverse`], against an explicit kernel.
pub fn inverse_with<K: DenseKernel>(
    kernel: &K,
    a: &Matrix,
    options: InverseOptions,
) -> Result<Matrix> {
    let n = validate::require_square(a)?;
    if n == 0 {
        return Ok(Tensor::from_elem((0, 0), 0.0));
    }
    if options.check_singular {
        let cond = stability::condition_number_with(kernel, a)?;
        if stability::exceeds_singular_threshold(cond) {
            return Err(LinAlgError::SingularMatrix {
                condition_number: Some(cond),
            });
        }
    }
    kernel.lu_inverse(a).ok_or(LinAlgError::SingularMatrix {
        condition_number: None,
    })
}

/// Solve the linear system `A x = b` for square `A`.
pub fn solve_linear_system(a: &Matrix, b: &Vector) -> Result<Vector> {
    solve_linear_system_with(&NalgebraKernel, a, b)
}

/// As [`solve_linear_system`], against an explicit kernel.
pub fn solve_linear_system_with<K: DenseKernel>(
    kernel: &K,
    a: &Matrix,
    b: &Vector,
) -> Result<Vector> {
    let n = validate::require_square(a)?;
    validate::require_vector_length(b, n)?;
    if n == 0 {
        return Ok(Tensor::from_elem((0,), 0.0));
    }
    let cond = stability::condition_number_with(kernel, a)?;
    if stability::exceeds_singular_threshold(cond) {
        return Err(LinAlgError::SingularMatrix {
            condition_number: Some(cond),
        });
    }
    kernel.lu_solve(a, b).ok_or(LinAlgError::SingularMatrix {
        condition_number: None,
    })
}

/// Eigenvalues and eigenvectors of a square matrix.
///
/// Complex eigenvalues of non-symmetric input are preserved. Column `i` of
/// the returned eigenvector matrix pairs with `values[i]`.
pub fn eigenvalues(a: &Matrix) -> Result<EigenResult> {
    eigenvalues_with(&NalgebraKernel, a)
}

/// As [`eigenvalues`], against an explicit kernel.
pub fn eigenvalues_with<K: DenseKernel>(kernel: &K, a: &Matrix) -> Result<EigenResult> {
    let n = validate::require_square(a)?;
    if n == 0 {
        return Err(LinAlgError::EmptyMatrix);
    }
    Ok(kernel.eigen(a))
}

/// Rank: the number of singular values above a relative zero threshold tied
/// to the matrix dimension and machine epsilon.
pub fn rank(a: &Matrix) -> Result<usize> {
    rank_with(&NalgebraKernel, a)
}

/// As [`rank`], against an explicit kernel.
pub fn rank_with<K: DenseKernel>(kernel: &K, a: &Matrix) -> Result<usize> {
    let (rows, cols) = *a.shape();
    if rows == 0 || cols == 0 {
        return Ok(0);
    }
    let sv = kernel.singular_values(a);
    let smax = sv.iter().fold(0.0_f64, |acc, &s| acc.max(s));
    let tol = rows.max(cols) as f64 * f64::EPSILON * smax;
    Ok(sv.iter().filter(|&&s| s > tol).count())
}

/// Trace: sum of the diagonal entries of a square matrix.
pub fn trace(a: &Matrix) -> Result<f64> {
    let n = validate::require_square(a)?;
    Ok((0..n).map(|i| a[[i, i]]).sum())
}

/// Transpose. Defined for every matrix; never fails.
pub fn transpose(a: &Matrix) -> Matrix {
    let (rows, cols) = *a.shape();
    Tensor::from_fn((cols, rows), |idx| a[[idx[1], idx[0]]])
}

/// Dense matrix product `A * B`.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    validate::require_multiply_compatible(a, b)?;
    let (m, k) = *a.shape();
    let (_, n) = *b.shape();
    Ok(Tensor::from_fn((m, n), |idx| {
        let mut sum = 0.0;
        for l in 0..k {
            sum += a[[idx[0], l]] * b[[l, idx[1]]];
        }
        sum
    }))
}

/// Matrix-vector product `A * v`.
pub fn matvec(a: &Matrix, v: &Vector) -> Result<Vector> {
    let (m, k) = *a.shape();
    validate::require_vector_length(v, k)?;
    Ok(Tensor::from_fn((m,), |idx| {
        let mut sum = 0.0;
        for l in 0..k {
            sum += a[[idx[0], l]] * v[[l]];
        }
        sum
    }))
}

/// Dot product of two equal-length vectors.
pub fn dot_product(v1: &Vector, v2: &Vector) -> Result<f64> {
    let n = validate::require_same_length(v1, v2)?;
    Ok((0..n).map(|i| v1[[i]] * v2[[i]]).sum())
}

/// Cross product of two 3-dimensional vectors.
pub fn cross_product(v1: &Vector, v2: &Vector) -> Result<Vector> {
    validate::require_dim3(v1)?;
    validate::require_dim3(v2)?;
    let out = [
        v1[[1]] * v2[[2]] - v1[[2]] * v2[[1]],
        v1[[2]] * v2[[0]] - v1[[0]] * v2[[2]],
        v1[[0]] * v2[[1]] - v1[[1]] * v2[[0]],
    ];
    Ok(Tensor::from_fn((3,), |idx| out[idx[0]]))
}
