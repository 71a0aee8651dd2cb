use thiserror::Error;

/// Errors returned by fallible vector and matrix operations.
///
/// Shape and element type mismatches are rejected at compile time and never show up here; this
/// type only covers conditions that depend on the *values* involved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The matrix has a determinant of zero and therefore no inverse.
    #[error("attempt to invert a singular matrix")]
    Singular,

    /// A flat element sequence did not contain exactly as many elements as the matrix has.
    #[error("expected {expected} matrix elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
