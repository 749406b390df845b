//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid rendering requests.
///
/// Parsing has no failure mode: every indentation pattern yields a tree.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown charset: {0} (expected one of: ascii, utf-8)")]
    UnknownCharset(String),
}
