//! Shape validation
//!
//! Pure predicates that run before any numeric work. Each either returns
//! normally or raises a `DimensionMismatch` carrying the expected and actual
//! shapes.

use crate::error::{LinAlgError, Result};
use crate::{Matrix, Vector};

/// Require a square matrix, returning its order.
pub fn require_square(a: &Matrix) -> Result<usize> {
    let (rows, cols) = *a.shape();
    if rows != cols {
        let n = rows.max(cols);
        return Err(LinAlgError::DimensionMismatch {
            expected: vec![n, n],
            got: vec![rows, cols],
        });
    }
    Ok(rows)
}

/// Require that `a * b` is defined, i.e. `a.cols == b.rows`.
pub fn require_multiply_compatible(a: &Matrix, b: &Matrix) -> Result<()> {
    let (_, a_cols) = *a.shape();
    let (b_rows, _) = *b.shape();
    if a_cols != b_rows {
        return Err(LinAlgError::DimensionMismatch {
            expected: vec![a_cols],
            got: vec![b_rows],
        });
    }
    Ok(())
}

/// Require a vector of exactly `n` elements.
pub fn require_vector_length(v: &Vector, n: usize) -> Result<()> {
    if v.len() != n {
        return Err(LinAlgError::DimensionMismatch {
            expected: vec![n],
            got: vec![v.len()],
        });
    }
    Ok(())
}

/// Require two vectors of equal length, returning that length.
pub fn require_same_length(v1: &Vector, v2: &Vector) -> Result<usize> {
    if v1.len() != v2.len() {
        return Err(LinAlgError::DimensionMismatch {
            expected: vec![v1.len()],
            got: vec![v2.len()],
        });
    }
    Ok(v1.len())
}

/// Require a 3-dimensional vector. Cross products only exist in R^3.
pub fn require_dim3(v: &Vector) -> Result<()> {
    require_vector_length(v, 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construct::{matrix_from_rows, vector_from_slice};

    #[test]
    fn square_matrix_passes() {
        let a = matrix_from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(require_square(&a).unwrap(), 2);
    }

    #[test]
    fn rectangular_matrix_fails_square_check() {
        let a = matrix_from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let err = require_square(&a).unwrap_err();
        assert_eq!(
            err,
            LinAlgError::DimensionMismatch {
                expected: vec![3, 3],
                got: vec![2, 3],
            }
        );
    }

    #[test]
    fn multiply_compatibility_reports_inner_dimensions() {
        let a = matrix_from_rows(&[vec![0.0; 3], vec![0.0; 3]]).unwrap();
        let b_rows = vec![vec![0.0; 2]; 4];
        let b = matrix_from_rows(&b_rows).unwrap();
        let err = require_multiply_compatible(&a, &b).unwrap_err();
        assert_eq!(
            err,
            LinAlgError::DimensionMismatch {
                expected: vec![3],
                got: vec![4],
            }
        );
    }

    #[test]
    fn dim3_accepts_only_three_elements() {
        let v2 = vector_from_slice(&[1.0, 2.0]);
        let v3 = vector_from_slice(&[1.0, 2.0, 3.0]);
        assert!(require_dim3(&v2).is_err());
        assert!(require_dim3(&v3).is_ok());
    }

    #[test]
    fn same_length_returns_the_length() {
        let v1 = vector_from_slice(&[1.0, 2.0]);
        let v2 = vector_from_slice(&[3.0, 4.0]);
        assert_eq!(require_same_length(&v1, &v2).unwrap(), 2);
    }
}
