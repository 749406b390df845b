//! Errors from loading outlines and settings

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// A bad charset, a missing or unreadable outline file, or a broken config layer.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for `TreeService` and settings loading.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
