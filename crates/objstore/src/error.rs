//! Error types for bucket operations.

use thiserror::Error;

/// Errors produced by bucket operations and helpers.
#[derive(Debug, Error)]
pub enum ObjStoreError {
    /// The caller supplied a structurally invalid input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested object does not exist.
    ///
    /// Backends return exactly this variant on absence so that
    /// [`crate::BucketReader::is_obj_not_found_err`] can classify it.
    #[error("object not found")]
    NotFound,

    /// The upload source could not be read to completion.
    #[error("failed to read upload source: {0}")]
    UploadRead(#[source] std::io::Error),

    /// Local filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error raised by a caller-supplied listing visitor.
    #[error("visitor error: {0}")]
    Visitor(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Bucket configuration could not be parsed.
    #[error("invalid bucket configuration: {0}")]
    Config(String),

    /// A backend's internal lock was poisoned by a panicking writer.
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

impl ObjStoreError {
    /// Wrap an arbitrary error raised inside an iteration visitor.
    pub fn visitor<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Visitor(err.into())
    }
}

/// Result alias for bucket operations.
pub type ObjStoreResult<T> = Result<T, ObjStoreError>;
