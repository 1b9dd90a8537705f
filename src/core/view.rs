//! # View Reaction
//!
//! Keeps the reveal animation in step with the store. Every [`StoreEvent`]
//! recomputes the current article's display text and restarts the animator;
//! the reducer calls [`react`] explicitly after each store mutation.

use std::time::Instant;

use log::debug;

use crate::core::state::App;
use crate::core::store::{Article, StoreEvent};

/// The summary when there is one, otherwise the first `excerpt_paragraphs`
/// paragraphs separated by a blank line.
pub fn display_text(article: &Article, excerpt_paragraphs: usize) -> String {
    match &article.summary {
        Some(summary) => summary.clone(),
        None => article
            .paragraphs
            .iter()
            .take(excerpt_paragraphs)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

pub fn react(app: &mut App, event: StoreEvent) {
    debug!(
        "Store event {:?} (index {}/{})",
        event,
        app.store.selected_index(),
        app.store.len()
    );
    match app.store.current_article() {
        Some(article) => {
            let text = display_text(article, app.excerpt_paragraphs);
            app.animator.start(text, app.tick_interval, Instant::now());
        }
        None => app.animator.clear(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::RawArticle;
    use crate::test_support::test_app;

    fn article(paragraphs: &[&str], summary: Option<&str>) -> Article {
        Article {
            title: "t".to_string(),
            link: "l".to_string(),
            paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
            summary: summary.map(str::to_string),
        }
    }

    #[test]
    fn test_display_text_takes_first_three_paragraphs() {
        let a = article(&["p1", "p2", "p3", "p4"], None);
        assert_eq!(display_text(&a, 3), "p1\n\np2\n\np3");
    }

    #[test]
    fn test_display_text_short_article() {
        let a = article(&["q1"], None);
        assert_eq!(display_text(&a, 3), "q1");
        assert_eq!(display_text(&article(&[], None), 3), "");
    }

    #[test]
    fn test_display_text_prefers_summary() {
        let a = article(&["p1", "p2"], Some("sumA"));
        assert_eq!(display_text(&a, 3), "sumA");
    }

    #[test]
    fn test_react_starts_reveal_of_current_article() {
        let mut app = test_app();
        let event = app.store.load(vec![RawArticle {
            title: "A".to_string(),
            paragraphs: vec!["hello".to_string()],
            link: String::new(),
        }]);

        react(&mut app, event);

        assert!(app.animator.is_revealing());
        assert_eq!(app.animator.full_text(), "hello");
        assert_eq!(app.animator.current_display(), "");
    }

    #[test]
    fn test_react_on_empty_store_clears_animator() {
        let mut app = test_app();
        app.animator
            .start("stale", app.tick_interval, Instant::now());
        let event = app.store.load(Vec::new());

        react(&mut app, event);

        assert!(!app.animator.is_revealing());
        assert_eq!(app.animator.current_display(), "");
    }
}
