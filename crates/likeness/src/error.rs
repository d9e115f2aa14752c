//! Error types for the comparer.

use likeness_types::{Mismatch, TypeError};

/// Errors that end a comparison.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CompareError {
    /// The values diverge. Carries the description of the first divergence.
    #[error("{0}")]
    Mismatch(Mismatch),

    /// The same pair of shared nodes was reached again below itself.
    #[error("cyclic structure detected at {path}")]
    Cycle { path: String },

    /// The comparison descended further than the configured limit.
    #[error("comparison exceeded the maximum depth of {limit} at {path}")]
    DepthExceeded { limit: usize, path: String },

    /// An allow-listed member does not exist anywhere in the compared type.
    #[error("allow-listed member \"{name}\" does not exist on {type_name} or any type it contains")]
    UnknownMember { name: String, type_name: String },

    /// A descriptor lookup failed (a hand-written impl disagrees with its
    /// own descriptor).
    #[error("type error: {0}")]
    Type(#[from] TypeError),

    /// Configuration text could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl CompareError {
    /// The mismatch description, if this error is a mismatch.
    pub fn mismatch(&self) -> Option<&Mismatch> {
        match self {
            CompareError::Mismatch(mismatch) => Some(mismatch),
            _ => None,
        }
    }

    /// Returns `true` if the values were compared and found to differ.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, CompareError::Mismatch(_))
    }
}

impl From<Mismatch> for CompareError {
    fn from(mismatch: Mismatch) -> Self {
        CompareError::Mismatch(mismatch)
    }
}

/// Convenience alias for comparison results.
pub type CompareResult<T> = Result<T, CompareError>;
