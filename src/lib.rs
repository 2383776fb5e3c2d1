//! # robust-linalg: numerically robust dense linear algebra
//!
//! Dense linear-algebra primitives — determinant, inverse, linear-system
//! solving, eigendecomposition, rank, norms, and matrix-property predicates
//! — over real double-precision matrices and vectors, with a reliable signal
//! for when a result is untrustworthy.
//!
//! Every operation runs the same single-pass pipeline: validate shapes,
//! optionally check conditioning, delegate to a dense decomposition kernel,
//! and return either the result or a typed error carrying structured
//! diagnostics. Near-singularity is handled with two deliberately different
//! thresholds: `inverse` and `solve_linear_system` hard-fail past
//! `1 / epsilon`, while `determinant` only attaches a non-fatal advisory
//! past `1e10` (and only for matrices larger than 10x10) — a determinant is
//! always computable, just possibly inaccurate.
//!
//! ```
//! use robust_linalg::{determinant, inverse, matrix_from_rows, multiply};
//!
//! let a = matrix_from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! assert!((determinant(&a).unwrap() + 2.0).abs() < 1e-12);
//!
//! let inv = inverse(&a).unwrap();
//! let prod = multiply(&a, &inv).unwrap();
//! assert!((prod[[0, 0]] - 1.0).abs() < 1e-10);
//! ```

pub mod construct;
pub mod error;
pub mod kernel;
pub mod norms;
pub mod ops;
pub mod predicates;
pub mod stability;
pub mod validate;

// Re-export commonly used items at the crate root.
pub use construct::{diagonal, identity, matrix_from_rows, matrix_from_vec, vector_from_slice};
pub use error::{LinAlgError, Result};
pub use kernel::{DenseKernel, EigenResult, NalgebraKernel};
pub use norms::{euclidean_norm, frobenius_norm, matrix_norm, matrix_norm_with, vector_norm, NormOrder};
pub use ops::{
    cross_product, determinant, determinant_with, dot_product, eigenvalues, eigenvalues_with,
    inverse, inverse_with, matvec, multiply, rank, rank_with, solve_linear_system,
    solve_linear_system_with, trace, transpose, DetOptions, DetResult, InverseOptions,
};
pub use predicates::{
    is_positive_definite, is_positive_definite_with, is_symmetric, is_symmetric_with_tolerance,
};
pub use stability::{
    condition_number, condition_number_with, Advisory, ADVISORY_MIN_DIM, ADVISORY_THRESHOLD,
    SINGULAR_THRESHOLD,
};

// Re-export the storage types for convenience.
pub use mdarray::{DTensor, Tensor};

/// Dense real matrix, shape (rows, cols).
pub type Matrix = Tensor<f64, (usize, usize)>;
/// Dense real vector, length n.
pub type Vector = Tensor<f64, (usize,)>;
