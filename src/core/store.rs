//! # Article Store
//!
//! The ordered collection of fetched articles plus the selected index.
//!
//! Mutations return a [`StoreEvent`] describing what changed. The reducer
//! forwards those events to the view reaction, which keeps the reveal
//! animation in sync with the selection.

use std::fmt;

use log::{debug, info};

use crate::news::RawArticle;

/// A news article as held by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub paragraphs: Vec<String>,
    pub summary: Option<String>,
}

impl Article {
    /// Full article body as sent to the summarizer: paragraphs joined by a blank line.
    pub fn body(&self) -> String {
        self.paragraphs.join("\n\n")
    }
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        Self {
            title: raw.title,
            link: raw.link,
            paragraphs: raw.paragraphs,
            summary: None,
        }
    }
}

/// What a store mutation changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    CollectionReplaced,
    SelectionChanged,
    SummariesApplied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Summary count does not match article count.
    LengthMismatch { expected: usize, actual: usize },
    /// Single summary targeted an index outside the collection.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LengthMismatch { expected, actual } => write!(
                f,
                "summary count mismatch: expected {expected}, got {actual}"
            ),
            StoreError::IndexOutOfRange { index, len } => {
                write!(f, "article {index} out of range (have {len})")
            }
        }
    }
}

impl std::error::Error for StoreError {}

#[derive(Debug, Default)]
pub struct ArticleStore {
    articles: Vec<Article>,
    pub(super) selected: usize,
    /// Bumped on every `load`; lets late responses detect they are stale.
    version: u64,
}

impl ArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection and select the first article.
    pub fn load(&mut self, raw: Vec<RawArticle>) -> StoreEvent {
        self.articles = raw.into_iter().map(Article::from).collect();
        self.selected = 0;
        self.version += 1;
        info!(
            "Loaded {} articles (version {})",
            self.articles.len(),
            self.version
        );
        StoreEvent::CollectionReplaced
    }

    /// Set every article's summary, aligned by position. All or nothing.
    pub fn apply_summaries(&mut self, summaries: Vec<String>) -> Result<StoreEvent, StoreError> {
        if summaries.len() != self.articles.len() {
            return Err(StoreError::LengthMismatch {
                expected: self.articles.len(),
                actual: summaries.len(),
            });
        }
        for (article, summary) in self.articles.iter_mut().zip(summaries) {
            article.summary = Some(summary);
        }
        debug!("Applied {} summaries", self.articles.len());
        Ok(StoreEvent::SummariesApplied)
    }

    /// Set the summary of a single article.
    pub fn apply_summary(&mut self, index: usize, summary: String) -> Result<StoreEvent, StoreError> {
        let len = self.articles.len();
        let article = self
            .articles
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })?;
        article.summary = Some(summary);
        Ok(StoreEvent::SummariesApplied)
    }

    pub fn current_article(&self) -> Option<&Article> {
        self.articles.get(self.selected)
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(title: &str, paragraphs: &[&str]) -> RawArticle {
        RawArticle {
            title: title.to_string(),
            paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
            link: format!("https://example.com/{title}"),
        }
    }

    fn loaded(n: usize) -> ArticleStore {
        let mut store = ArticleStore::new();
        store.load((0..n).map(|i| raw(&format!("a{i}"), &["p"])).collect());
        store
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = ArticleStore::new();
        assert!(store.is_empty());
        assert_eq!(store.selected_index(), 0);
        assert!(store.current_article().is_none());
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_load_maps_and_resets_selection() {
        let mut store = loaded(3);
        store.selected = 2;

        let event = store.load(vec![raw("x", &["p1", "p2"])]);

        assert_eq!(event, StoreEvent::CollectionReplaced);
        assert_eq!(store.len(), 1);
        assert_eq!(store.selected_index(), 0);
        let current = store.current_article().unwrap();
        assert_eq!(current.title, "x");
        assert_eq!(current.paragraphs, vec!["p1", "p2"]);
        assert!(current.summary.is_none());
    }

    #[test]
    fn test_load_bumps_version() {
        let mut store = loaded(1);
        let v = store.version();
        store.load(Vec::new());
        assert_eq!(store.version(), v + 1);
        assert!(store.current_article().is_none());
    }

    #[test]
    fn test_apply_summaries_preserves_selection() {
        let mut store = loaded(2);
        store.selected = 1;

        let event = store
            .apply_summaries(vec!["s0".to_string(), "s1".to_string()])
            .unwrap();

        assert_eq!(event, StoreEvent::SummariesApplied);
        assert_eq!(store.selected_index(), 1);
        assert_eq!(store.articles()[0].summary.as_deref(), Some("s0"));
        assert_eq!(store.articles()[1].summary.as_deref(), Some("s1"));
    }

    #[test]
    fn test_apply_summaries_length_mismatch_changes_nothing() {
        let mut store = loaded(2);

        let err = store.apply_summaries(vec!["only one".to_string()]).unwrap_err();

        assert_eq!(
            err,
            StoreError::LengthMismatch {
                expected: 2,
                actual: 1
            }
        );
        assert!(store.articles().iter().all(|a| a.summary.is_none()));
    }

    #[test]
    fn test_apply_summary_out_of_range() {
        let mut store = loaded(1);
        let err = store.apply_summary(3, "s".to_string()).unwrap_err();
        assert_eq!(err, StoreError::IndexOutOfRange { index: 3, len: 1 });
        assert!(store.articles()[0].summary.is_none());
    }

    #[test]
    fn test_article_body_joins_with_blank_line() {
        let article = Article::from(raw("t", &["a", "b"]));
        assert_eq!(article.body(), "a\n\nb");
    }
}
