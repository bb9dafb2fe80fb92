//! Error types for value operations.

use crate::path::PathError;

/// Errors from navigating, building or converting values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Path parsing or validation error.
    #[error("path error: {0}")]
    Path(#[from] PathError),

    /// The path can't be applied to this value.
    #[error("invalid path: {message}")]
    InvalidPath { message: String },

    /// A serde conversion failed.
    #[error("conversion error: {message}")]
    Conversion { message: String },
}

impl Error {
    pub(crate) fn invalid_path(message: impl Into<String>) -> Self {
        Error::InvalidPath {
            message: message.into(),
        }
    }
}
