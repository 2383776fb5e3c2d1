//! Dense decomposition kernel
//!
//! `DenseKernel` is the compile-time seam between the operation layer and
//! whatever library actually factorizes matrices. Validation and error
//! mapping never live here: a kernel reports failure through its return
//! types (`Option`, empty spectra) and the operation layer translates that
//! into the typed error vocabulary. The default backend delegates to
//! nalgebra's LU, Cholesky, SVD, symmetric-eigen, and Schur routines.

use mdarray::Tensor;
use nalgebra::{DMatrix, DVector};
use num_complex::Complex64;

use crate::construct::{from_dmatrix, from_dvector, to_dmatrix, to_dvector};
use crate::predicates::{entries_agree, DEFAULT_SYMMETRY_RTOL};
use crate::{Matrix, Vector};

/// Result of an eigendecomposition.
///
/// Column `i` of `vectors` is the eigenvector paired with `values[i]`, so
/// `A * vectors[:, i] ≈ values[i] * vectors[:, i]` within numerical
/// tolerance. Complex eigenvalues of non-symmetric real matrices are
/// preserved, not discarded.
#[derive(Debug, Clone)]
pub struct EigenResult {
    /// Eigenvalues, index-paired with the columns of `vectors`.
    pub values: Vec<Complex64>,
    /// Eigenvector matrix (n x n); column i belongs to `values[i]`.
    pub vectors: Tensor<Complex64, (usize, usize)>,
}

/// Capability trait for dense decomposition backends.
///
/// Callers guarantee square input where the factorization requires it; a
/// kernel never re-validates shapes.
pub trait DenseKernel {
    /// Determinant via pivoted LU: product of the U diagonal with the
    /// permutation sign.
    fn lu_determinant(&self, a: &Matrix) -> f64;

    /// Solve `A x = b` via pivoted LU. `None` means a zero pivot was hit,
    /// i.e. the matrix is exactly singular.
    fn lu_solve(&self, a: &Matrix, b: &Vector) -> Option<Vector>;

    /// Invert via pivoted LU. `None` means a zero pivot was hit.
    fn lu_inverse(&self, a: &Matrix) -> Option<Matrix>;

    /// Singular-value spectrum, descending.
    fn singular_values(&self, a: &Matrix) -> Vec<f64>;

    /// Full eigendecomposition of a square matrix.
    fn eigen(&self, a: &Matrix) -> EigenResult;

    /// Whether a Cholesky factorization completes without hitting a
    /// non-positive pivot.
    fn cholesky_succeeds(&self, a: &Matrix) -> bool;
}

/// Default backend over nalgebra's decomposition routines.
#[derive(Debug, Clone, Copy, Default)]
pub struct NalgebraKernel;

impl DenseKernel for NalgebraKernel {
    fn lu_determinant(&self, a: &Matrix) -> f64 {
        let (n, _) = *a.shape();
        if n == 0 {
            // Empty product.
            return 1.0;
        }
        let lu = to_dmatrix(a).lu();
        let u = lu.u();
        let mut det = lu.p().determinant::<f64>();
        for i in 0..n {
            det *= u[(i, i)];
        }
        det
    }

    fn lu_solve(&self, a: &Matrix, b: &Vector) -> Option<Vector> {
        let lu = to_dmatrix(a).lu();
        let x = lu.solve(&to_dvector(b))?;
        Some(from_dvector(&x))
    }

    fn lu_inverse(&self, a: &Matrix) -> Option<Matrix> {
        let inv = to_dmatrix(a).lu().try_inverse()?;
        Some(from_dmatrix(&inv))
    }

    fn singular_values(&self, a: &Matrix) -> Vec<f64> {
        let m = to_dmatrix(a);
        if m.is_empty() {
            return Vec::new();
        }
        m.singular_values().iter().copied().collect()
    }

    fn eigen(&self, a: &Matrix) -> EigenResult {
        let m = to_dmatrix(a);
        let n = m.nrows();
        if n == 0 {
            return EigenResult {
                values: Vec::new(),
                vectors: Tensor::from_elem((0, 0), Complex64::new(0.0, 0.0)),
            };
        }
        if is_symmetric_dm(&m) {
            let se = m.symmetric_eigen();
            let values = se
                .eigenvalues
                .iter()
                .map(|&x| Complex64::new(x, 0.0))
                .collect();
            let vectors = se.eigenvectors.map(|x| Complex64::new(x, 0.0));
            return EigenResult {
                values,
                vectors: from_dmatrix(&vectors),
            };
        }
        general_eigen(&m)
    }

    fn cholesky_succeeds(&self, a: &Matrix) -> bool {
        to_dmatrix(a).cholesky().is_some()
    }
}

/// Symmetry probe on the backend matrix. Same entrywise comparison as the
/// public predicate layer, at its default tolerance.
fn is_symmetric_dm(m: &DMatrix<f64>) -> bool {
    let n = m.nrows();
    for i in 0..n {
        for j in (i + 1)..n {
            if !entries_agree(m[(i, j)], m[(j, i)], DEFAULT_SYMMETRY_RTOL) {
                return false;
            }
        }
    }
    true
}

/// Eigendecomposition of a general (possibly non-symmetric) real matrix.
///
/// nalgebra's Schur form yields the complex eigenvalues directly; the
/// eigenvectors are recovered one at a time by shifted inverse iteration in
/// complex arithmetic. The shift is the eigenvalue plus a small complex
/// offset so the shifted system stays factorizable.
fn general_eigen(m: &DMatrix<f64>) -> EigenResult {
    let n = m.nrows();
    let values: Vec<Complex64> = m.complex_eigenvalues().iter().copied().collect();
    let mc: DMatrix<Complex64> = m.map(|x| Complex64::new(x, 0.0));

    let scale = m.iter().fold(1.0_f64, |acc, &x| acc.max(x.abs()));
    let offset = Complex64::new(scale * 1e-10, scale * 1e-10);

    let mut vectors = DMatrix::from_element(n, n, Complex64::new(0.0, 0.0));
    for (k, &lambda) in values.iter().enumerate() {
        let shifted = &mc - DMatrix::from_diagonal_element(n, n, lambda + offset);
        let lu = shifted.lu();

        // Start from a vector with unequal components so no eigendirection
        // is lost to symmetry of the initial guess.
        let mut v: DVector<Complex64> = DVector::from_iterator(
            n,
            (0..n).map(|i| Complex64::new(1.0 + i as f64 / n as f64, 0.0)),
        );
        let nrm = v.norm();
        v = v.unscale(nrm);

        for _ in 0..3 {
            let Some(w) = lu.solve(&v) else { break };
            let wnrm = w.norm();
            if !wnrm.is_finite() || wnrm == 0.0 {
                break;
            }
            v = w.unscale(wnrm);
        }
        vectors.set_column(k, &v);
    }

    EigenResult {
        values,
        vectors: from_dmatrix(&vectors),
    }
}
