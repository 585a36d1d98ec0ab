use std::fmt;

use async_trait::async_trait;

use super::types::Fact;

/// Errors that can occur while fetching a fact.
/// Every variant is shown to the user as the same generic message;
/// the detail only goes to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection failure or the body could not be read.
    Network(String),
    /// The body was not a JSON object of the expected shape.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

#[async_trait]
pub trait FactSource: Send + Sync {
    /// Returns a short human-readable name for logs and the title bar.
    fn name(&self) -> &str;

    /// Performs one fetch attempt.
    async fn fetch(&self) -> Result<Fact, FetchError>;
}
