/// Errors from the text helpers.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The replacement keys couldn't be compiled into a pattern.
    #[error("invalid replacement pattern: {0}")]
    Pattern(#[from] regex::Error),
}
