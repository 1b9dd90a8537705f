//! # Application State
//!
//! Core business state for Teletipo. No TUI-specific types live here;
//! presentation state (scroll offsets and the like) belongs to the `tui` module.
//!
//! ```text
//! App
//! ├── service: Arc<dyn NewsService>   // remote news/summary service
//! ├── store: ArticleStore             // articles + selected index
//! ├── animator: RevealAnimator        // typewriter reveal of the display text
//! ├── is_busy: bool                   // a request is outstanding
//! ├── status_message: String          // status bar text
//! ├── notice: Option<String>          // last error, shown until the next action
//! ├── last_fetched: Option<DateTime>  // when the current collection arrived
//! ├── tick_interval: Duration         // reveal cadence
//! └── excerpt_paragraphs: usize       // paragraphs shown when unsummarized
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};

use crate::core::config::{DEFAULT_EXCERPT_PARAGRAPHS, ResolvedConfig};
use crate::core::reveal::{DEFAULT_TICK_INTERVAL, RevealAnimator};
use crate::core::store::ArticleStore;
use crate::news::NewsService;

pub struct App {
    pub service: Arc<dyn NewsService>,
    pub store: ArticleStore,
    pub animator: RevealAnimator,
    pub is_busy: bool,
    pub status_message: String,
    pub notice: Option<String>,
    pub last_fetched: Option<DateTime<Local>>,
    pub tick_interval: Duration,
    pub excerpt_paragraphs: usize,
}

impl App {
    pub fn new(service: Arc<dyn NewsService>) -> Self {
        Self {
            service,
            store: ArticleStore::new(),
            animator: RevealAnimator::new(),
            is_busy: false,
            status_message: String::from("Press f to fetch news"),
            notice: None,
            last_fetched: None,
            tick_interval: DEFAULT_TICK_INTERVAL,
            excerpt_paragraphs: DEFAULT_EXCERPT_PARAGRAPHS,
        }
    }

    pub fn from_config(service: Arc<dyn NewsService>, config: &ResolvedConfig) -> Self {
        Self {
            tick_interval: config.tick_interval,
            excerpt_paragraphs: config.excerpt_paragraphs,
            ..Self::new(service)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.store.is_empty());
        assert!(!app.is_busy);
        assert!(app.notice.is_none());
        assert!(!app.animator.is_revealing());
        assert_eq!(app.excerpt_paragraphs, 3);
        assert_eq!(app.tick_interval.as_millis(), 15);
    }
}
