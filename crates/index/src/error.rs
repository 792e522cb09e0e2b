//! Index error model.

use thiserror::Error;

/// Errors raised while constructing an index.
///
/// Table operations themselves never fail: absence is an `Option`/`bool`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IndexError {
    #[error("invalid index configuration: {0}")]
    InvalidConfig(String),
}

impl IndexError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
