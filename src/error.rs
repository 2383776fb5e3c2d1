//! Error types shared by all operations
//!
//! Every failure mode carries structured diagnostic fields so callers can
//! branch on the error kind without parsing message strings.

/// Errors raised by validation, stability checking, and the decomposition
/// kernel boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LinAlgError {
    /// The input data cannot form a valid dense matrix or vector.
    #[error("invalid shape: {reason}")]
    InvalidShape { reason: String },

    /// A zero-sized input was given to an operation that needs elements.
    #[error("input has no elements")]
    EmptyMatrix,

    /// Operand shapes do not satisfy the operation's layout requirements.
    #[error("dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    /// The matrix is exactly or nearly singular for an operation that
    /// requires invertibility. The condition number is attached when the
    /// singularity was detected by the stability check rather than by a
    /// zero pivot inside the decomposition.
    #[error("matrix is singular or nearly singular (condition number: {condition_number:?})")]
    SingularMatrix { condition_number: Option<f64> },

    /// A scalar argument violates a domain constraint.
    #[error("invalid {parameter}={value}: {constraint}")]
    InvalidInput {
        parameter: &'static str,
        value: String,
        constraint: &'static str,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LinAlgError>;
