//! Core error type.

use thiserror::Error;

pub type ContentResult<T> = Result<T, ContentError>;

#[derive(Debug, Error)]
pub enum ContentError {
    /// A constructor argument violated its contract.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl ContentError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ContentError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
