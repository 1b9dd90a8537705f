//! HTTP implementation of [`NewsService`] backed by `reqwest`.
//!
//! Each call gets its own timeout: fetching is quick, batch summarization can
//! take a while on the server side.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::service::{NewsError, NewsService};
use super::types::{
    RawArticle, SummarizeBatchRequest, SummarizeBatchResponse, SummarizeRequest,
    SummarizeResponse,
};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_SUMMARIZE_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_SUMMARIZE_ONE_TIMEOUT: Duration = Duration::from_secs(30);

const CLIENT_USER_AGENT: &str = concat!("teletipo/", env!("CARGO_PKG_VERSION"));

/// Per-endpoint request timeouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub fetch: Duration,
    pub summarize_batch: Duration,
    pub summarize_one: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            fetch: DEFAULT_FETCH_TIMEOUT,
            summarize_batch: DEFAULT_SUMMARIZE_TIMEOUT,
            summarize_one: DEFAULT_SUMMARIZE_ONE_TIMEOUT,
        }
    }
}

pub struct HttpNewsService {
    base_url: String,
    timeouts: Timeouts,
    client: reqwest::Client,
}

impl HttpNewsService {
    /// Creates a client for the service at `base_url`. A trailing slash is ignored.
    pub fn new(base_url: impl Into<String>, timeouts: Timeouts) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            timeouts,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// Sends a prepared request and decodes a JSON body, mapping failures
    /// onto [`NewsError`].
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: &str,
    ) -> Result<T, NewsError> {
        let response = request
            .header(reqwest::header::USER_AGENT, CLIENT_USER_AGENT)
            .send()
            .await
            .map_err(|e| NewsError::Network(e.to_string()))?;

        debug!("{} response status: {}", endpoint, response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("News service error on {}: {} - {}", endpoint, status, err_body);
            return Err(NewsError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| NewsError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| {
            warn!("Unparseable {} response: {}", endpoint, e);
            NewsError::Parse(e.to_string())
        })
    }
}

#[async_trait]
impl NewsService for HttpNewsService {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_articles(&self) -> Result<Vec<RawArticle>, NewsError> {
        info!("Fetching articles from {}", self.base_url);
        let request = self
            .client
            .get(self.url("noticias"))
            .timeout(self.timeouts.fetch);
        let articles: Vec<RawArticle> = self.send_json(request, "noticias").await?;
        info!("Fetched {} articles", articles.len());
        Ok(articles)
    }

    async fn summarize_batch(&self, texts: &[String]) -> Result<Vec<String>, NewsError> {
        info!("Requesting batch summary for {} texts", texts.len());
        let request = self
            .client
            .post(self.url("resumir_batch"))
            .timeout(self.timeouts.summarize_batch)
            .json(&SummarizeBatchRequest { contenidos: texts });
        let response: SummarizeBatchResponse = self.send_json(request, "resumir_batch").await?;
        Ok(response.into_summaries())
    }

    async fn summarize_one(&self, text: &str) -> Result<String, NewsError> {
        debug!("Requesting single summary ({} bytes)", text.len());
        let request = self
            .client
            .post(self.url("resumir"))
            .timeout(self.timeouts.summarize_one)
            .json(&SummarizeRequest { contenido: text });
        let response: SummarizeResponse = self.send_json(request, "resumir").await?;
        Ok(response.resumen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let service = HttpNewsService::new("http://localhost:8000/", Timeouts::default());
        assert_eq!(service.base_url(), "http://localhost:8000");
        assert_eq!(service.url("noticias"), "http://localhost:8000/noticias");
    }

    #[test]
    fn test_default_timeouts() {
        let timeouts = Timeouts::default();
        assert_eq!(timeouts.fetch, Duration::from_secs(15));
        assert_eq!(timeouts.summarize_batch, Duration::from_secs(60));
        assert_eq!(timeouts.summarize_one, Duration::from_secs(30));
    }
}
