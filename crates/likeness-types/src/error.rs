use thiserror::Error;

/// Errors produced by descriptor lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("{type_name} is not a sequence type")]
    NotASequence { type_name: String },

    #[error("{type_name} is not a record type")]
    NotARecord { type_name: String },
}

/// Convenience alias for descriptor lookups.
pub type TypeResult<T> = Result<T, TypeError>;
