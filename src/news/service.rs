use std::fmt;

use async_trait::async_trait;

use super::types::RawArticle;

/// Errors that can occur while talking to the news service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsError {
    /// Transport failure (timeout, DNS, connection refused).
    Network(String),
    /// Service answered with a non-success status.
    Api { status: u16, message: String },
    /// Response body was not the expected JSON shape.
    Parse(String),
}

impl fmt::Display for NewsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewsError::Network(msg) => write!(f, "network error: {msg}"),
            NewsError::Api { status, message } => {
                write!(f, "service error (HTTP {status}): {message}")
            }
            NewsError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for NewsError {}

/// The remote collaborator that supplies and summarizes articles.
#[async_trait]
pub trait NewsService: Send + Sync {
    /// Returns the name of the service (for logs).
    fn name(&self) -> &str;

    /// `GET /noticias`
    async fn fetch_articles(&self) -> Result<Vec<RawArticle>, NewsError>;

    /// `POST /resumir_batch`. Summaries are positionally aligned with `texts`;
    /// checking the count is left to the caller.
    async fn summarize_batch(&self, texts: &[String]) -> Result<Vec<String>, NewsError>;

    /// `POST /resumir`
    async fn summarize_one(&self, text: &str) -> Result<String, NewsError>;
}
