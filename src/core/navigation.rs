//! Bounded movement of the selected article.
//!
//! Moving past either end is a no-op rather than an error: it models a
//! disabled "next"/"previous" control.

use super::store::ArticleStore;

impl ArticleStore {
    /// Select the following article. Returns true if the selection moved.
    pub fn next(&mut self) -> bool {
        if self.selected + 1 < self.len() {
            self.selected += 1;
            true
        } else {
            false
        }
    }

    /// Select the preceding article. Returns true if the selection moved.
    pub fn previous(&mut self) -> bool {
        if self.selected > 0 {
            self.selected -= 1;
            true
        } else {
            false
        }
    }

    pub fn has_next(&self) -> bool {
        self.selected + 1 < self.len()
    }

    pub fn has_previous(&self) -> bool {
        self.selected > 0
    }
}

#[cfg(test)]
mod tests {
    use crate::core::store::ArticleStore;
    use crate::news::RawArticle;

    fn store_with(n: usize) -> ArticleStore {
        let mut store = ArticleStore::new();
        store.load(
            (0..n)
                .map(|i| RawArticle {
                    title: format!("a{i}"),
                    paragraphs: vec![],
                    link: String::new(),
                })
                .collect(),
        );
        store
    }

    #[test]
    fn test_next_on_single_article_is_noop() {
        let mut store = store_with(1);
        assert!(!store.next());
        assert_eq!(store.selected_index(), 0);
    }

    #[test]
    fn test_next_and_previous_stay_in_bounds() {
        let mut store = store_with(3);
        assert!(store.next());
        assert!(store.next());
        assert!(!store.next());
        assert_eq!(store.selected_index(), 2);

        assert!(store.previous());
        assert!(store.previous());
        assert!(!store.previous());
        assert_eq!(store.selected_index(), 0);
    }

    #[test]
    fn test_navigation_on_empty_store() {
        let mut store = ArticleStore::new();
        assert!(!store.next());
        assert!(!store.previous());
        assert_eq!(store.selected_index(), 0);
        assert!(!store.has_next());
        assert!(!store.has_previous());
    }

    #[test]
    fn test_has_next_has_previous() {
        let mut store = store_with(2);
        assert!(store.has_next());
        assert!(!store.has_previous());
        store.next();
        assert!(!store.has_next());
        assert!(store.has_previous());
    }
}
