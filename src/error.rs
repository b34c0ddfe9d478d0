use thiserror::Error;

/// Errors surfaced by [`Parser::process`](crate::Parser::process).
///
/// Reducer and rewriter failures are returned exactly as the callback
/// produced them; the engine never wraps or retries.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Build an error from a message, for use inside rule callbacks.
    pub fn custom(message: impl Into<String>) -> Self {
        Error::Custom(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
