//! Shared error type.
//!
//! Sub-crates define their own error enums; `CoreError` only covers what the
//! core types themselves can reject.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `mb-core`.
pub type CoreResult<T> = Result<T, CoreError>;
