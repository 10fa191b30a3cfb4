// src/core/error.rs
// Domain error type shared by scoring, listing and storage operations

use thiserror::Error;

use crate::motor::Attribute;

/// Main error type for core operations
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("page {page} not found (valid pages: 1..={page_count})")]
    PageNotFound { page: i64, page_count: i64 },

    #[error("invalid page_size {0}: must be at least 1")]
    InvalidPageSize(i64),

    #[error("missing weight for '{}'", .0.key())]
    MissingKey(Attribute),

    #[error("unknown weight key '{0}'")]
    UnknownKey(String),

    #[error("invalid weight: {0}")]
    InvalidWeight(String),

    #[error("no motorcycle records to rank")]
    EmptyBatch,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for Result using CoreError
pub type CoreResult<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// True when the failure was caused by the caller's input rather than the server
    pub fn is_client_error(&self) -> bool {
        !matches!(self, CoreError::Database(_))
    }
}
