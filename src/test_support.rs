//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::news::{NewsError, NewsService, RawArticle};

/// A service stub for tests that don't need real HTTP calls.
/// Fetch returns its canned articles; summaries echo the input titles.
#[derive(Default)]
pub struct StubNewsService {
    pub articles: Vec<RawArticle>,
}

#[async_trait]
impl NewsService for StubNewsService {
    fn name(&self) -> &str {
        "stub"
    }

    async fn fetch_articles(&self) -> Result<Vec<RawArticle>, NewsError> {
        Ok(self.articles.clone())
    }

    async fn summarize_batch(&self, texts: &[String]) -> Result<Vec<String>, NewsError> {
        Ok(texts.iter().map(|t| format!("summary of {t}")).collect())
    }

    async fn summarize_one(&self, text: &str) -> Result<String, NewsError> {
        Ok(format!("summary of {text}"))
    }
}

/// Creates a test App backed by an empty `StubNewsService`.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(StubNewsService::default()))
}
