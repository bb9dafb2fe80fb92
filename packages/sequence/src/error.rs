//! Error types for sequence construction.

/// Errors raised while building a sequence.
///
/// Driving a sequence never fails; everything that can go wrong is
/// rejected when the sequence is constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// A constructor argument can't produce a well-formed sequence.
    #[error("invalid argument '{name}': {message}")]
    InvalidArgument { name: &'static str, message: String },
}

impl SequenceError {
    pub(crate) fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        SequenceError::InvalidArgument {
            name,
            message: message.into(),
        }
    }
}
