//! Error types.
//!
//! Most operations in this crate are total. Numerical edge cases like normalizing a zero-length
//! vector silently produce NaN or infinity, exactly like the underlying float operations do. The
//! types here cover the few cases that are reported explicitly instead.

/// A mathematical operation was applied outside of its domain.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DomainError {
    /// Attempted to invert a quaternion whose squared norm is exactly zero.
    #[error("cannot invert a quaternion with zero norm")]
    ZeroQuaternion,
}

/// A slice of the wrong length was converted into a fixed-size vector or matrix.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("expected {expected} elements, found {found}")]
pub struct LengthMismatch {
    /// Number of elements the target type holds.
    pub expected: usize,
    /// Number of elements in the slice.
    pub found: usize,
}

/// Error returned when parsing a [`Vector`][crate::Vector] from text fails.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseVectorError {
    #[error("expected {expected} components, found {found}")]
    WrongCount { expected: usize, found: usize },
    #[error("invalid component at index {index}: {token:?}")]
    InvalidComponent { index: usize, token: String },
    #[error("unbalanced parentheses")]
    UnbalancedParens,
}

/// Panics with the message used for every out-of-range element, row or column access.
#[cold]
#[track_caller]
pub(crate) fn index_out_of_range(what: &str, index: usize, len: usize) -> ! {
    panic!("{what} index out of range: the length is {len} but the index is {index}")
}
