//! Errors raised at the process boundary: stdin and the working directory

use thiserror::Error;

use crate::application::ApplicationError;

/// Outline and settings failures, plus reads that bypass the `FileSystem` trait.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl InfraError {
    /// Wrap an I/O failure, `context` names what was being read.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
