//! Validated construction of dense matrices and vectors
//!
//! All downstream operations work over one validated representation, so
//! every shape assumption is established here, once, at the boundary.
//! Also hosts the private bridge between the public mdarray storage and the
//! nalgebra matrices consumed by the decomposition kernel.

use mdarray::Tensor;
use nalgebra::{DMatrix, DVector};

use crate::error::{LinAlgError, Result};
use crate::{Matrix, Vector};

/// Build a matrix from nested rows.
///
/// Rows must all have the same length; integer element types are promoted to
/// double precision through the `Into<f64>` bound.
///
/// # Example
/// ```
/// use robust_linalg::matrix_from_rows;
///
/// let a = matrix_from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
/// assert_eq!(a[[1, 0]], 3.0);
/// ```
pub fn matrix_from_rows<T>(rows: &[Vec<T>]) -> Result<Matrix>
where
    T: Into<f64> + Copy,
{
    if rows.is_empty() {
        return Ok(Tensor::from_elem((0, 0), 0.0));
    }
    let ncols = rows[0].len();
    for (i, row) in rows.iter().enumerate() {
        if row.len() != ncols {
            return Err(LinAlgError::InvalidShape {
                reason: format!("row {} has length {}, expected {}", i, row.len(), ncols),
            });
        }
    }
    Ok(Tensor::from_fn((rows.len(), ncols), |idx| {
        rows[idx[0]][idx[1]].into()
    }))
}

/// Build a matrix from a flat row-major buffer.
pub fn matrix_from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Matrix> {
    if data.len() != rows * cols {
        return Err(LinAlgError::InvalidShape {
            reason: format!(
                "buffer of length {} cannot fill a {}x{} matrix",
                data.len(),
                rows,
                cols
            ),
        });
    }
    Ok(Tensor::from_fn((rows, cols), |idx| data[idx[0] * cols + idx[1]]))
}

/// Build a vector from a slice.
pub fn vector_from_slice(data: &[f64]) -> Vector {
    Tensor::from_fn((data.len(),), |idx| data[idx[0]])
}

/// The n-by-n identity matrix.
pub fn identity(n: usize) -> Matrix {
    Tensor::from_fn((n, n), |idx| if idx[0] == idx[1] { 1.0 } else { 0.0 })
}

/// A square matrix with the given diagonal entries and zeros elsewhere.
pub fn diagonal(entries: &[f64]) -> Matrix {
    let n = entries.len();
    Tensor::from_fn((n, n), |idx| {
        if idx[0] == idx[1] {
            entries[idx[0]]
        } else {
            0.0
        }
    })
}

/// Convert a matrix to the kernel's nalgebra representation.
pub(crate) fn to_dmatrix(a: &Matrix) -> DMatrix<f64> {
    let (m, n) = *a.shape();
    DMatrix::from_fn(m, n, |i, j| a[[i, j]])
}

/// Convert a vector to the kernel's nalgebra representation.
pub(crate) fn to_dvector(v: &Vector) -> DVector<f64> {
    DVector::from_iterator(v.len(), (0..v.len()).map(|i| v[[i]]))
}

/// Convert a nalgebra matrix back to the public storage type.
pub(crate) fn from_dmatrix<T: nalgebra::Scalar + Copy>(m: &DMatrix<T>) -> Tensor<T, (usize, usize)> {
    Tensor::from_fn((m.nrows(), m.ncols()), |idx| m[(idx[0], idx[1])])
}

/// Convert a nalgebra vector back to the public storage type.
pub(crate) fn from_dvector(v: &DVector<f64>) -> Vector {
    Tensor::from_fn((v.len(),), |idx| v[idx[0]])
}
