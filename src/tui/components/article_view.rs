//! # ArticleView Component
//!
//! The current article: title, the revealed portion of its display text and
//! the source link.
//!
//! `ArticleView` is transient (created each frame) and wraps a persistent
//! `&mut ArticleViewState` holding the scroll position, same as the
//! `StatefulWidget` pattern in ratatui. While a reveal is running the view
//! follows the growing text; scrolling up detaches it until the next article.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::store::Article;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Drawn after the revealed text while the reveal is running.
const REVEAL_CURSOR: char = '▌';

pub struct ArticleViewState {
    pub scroll_state: ScrollViewState,
    /// Keep the newest revealed line in view.
    pub follow_reveal: bool,
    /// `(store version, index)` of the article last rendered.
    shown: Option<(u64, usize)>,
}

impl Default for ArticleViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleViewState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            follow_reveal: true,
            shown: None,
        }
    }

    /// Reset scrolling when a different article (or a new fetch) is shown.
    /// Returns true if the article changed.
    pub fn sync_article(&mut self, version: u64, index: usize) -> bool {
        if self.shown == Some((version, index)) {
            return false;
        }
        self.shown = Some((version, index));
        self.scroll_state.scroll_to_top();
        self.follow_reveal = true;
        true
    }
}

impl EventHandler for ArticleViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::ScrollUp => {
                self.follow_reveal = false;
                self.scroll_state.scroll_up();
            }
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => {
                self.follow_reveal = false;
                self.scroll_state.scroll_page_up();
            }
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        Some(())
    }
}

pub struct ArticleView<'a> {
    pub article: &'a Article,
    pub display: &'a str,
    pub revealing: bool,
    pub state: &'a mut ArticleViewState,
}

impl ArticleView<'_> {
    fn body_text(&self) -> String {
        if self.revealing {
            format!("{}{}", self.display, REVEAL_CURSOR)
        } else {
            self.display.to_string()
        }
    }
}

impl Component for ArticleView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let kind = if self.article.summary.is_some() {
            "summary"
        } else {
            "excerpt"
        };
        let border_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::DIM);
        let block = Block::bordered()
            .title(Line::styled(
                format!(" {} ", self.article.title),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))
            .title(Line::styled(format!(" {kind} "), border_style).right_aligned())
            .title_bottom(Line::styled(
                format!(" {} ", self.article.link),
                Style::default().fg(Color::DarkGray),
            ))
            .border_style(border_style)
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // One column for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let paragraph = Paragraph::new(self.body_text()).wrap(Wrap { trim: false });
        let content_height = (paragraph.line_count(content_width) as u16).max(1);

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));

        if self.revealing && self.state.follow_reveal && content_height > inner.height {
            self.state.scroll_state.scroll_to_bottom();
        }
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn article(summary: Option<&str>) -> Article {
        Article {
            title: "Deshielo record".to_string(),
            link: "https://example.com/deshielo".to_string(),
            paragraphs: vec!["p1".to_string()],
            summary: summary.map(str::to_string),
        }
    }

    fn rendered(article: &Article, display: &str, revealing: bool) -> String {
        let mut state = ArticleViewState::new();
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|f| {
                let mut view = ArticleView {
                    article,
                    display,
                    revealing,
                    state: &mut state,
                };
                view.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_title_text_and_link() {
        let a = article(None);
        let text = rendered(&a, "Hola mundo", false);
        assert!(text.contains("Deshielo record"));
        assert!(text.contains("Hola mundo"));
        assert!(text.contains("https://example.com/deshielo"));
        assert!(text.contains("excerpt"));
        assert!(!text.contains(REVEAL_CURSOR));
    }

    #[test]
    fn test_cursor_while_revealing() {
        let a = article(Some("sum"));
        let text = rendered(&a, "su", true);
        assert!(text.contains("su▌"));
        assert!(text.contains("summary"));
    }

    #[test]
    fn test_sync_article_resets_follow() {
        let mut state = ArticleViewState::new();
        assert!(state.sync_article(1, 0));
        state.handle_event(&TuiEvent::ScrollUp);
        assert!(!state.follow_reveal);

        assert!(!state.sync_article(1, 0));
        assert!(!state.follow_reveal);

        assert!(state.sync_article(1, 1));
        assert!(state.follow_reveal);
    }

    #[test]
    fn test_non_scroll_events_are_ignored() {
        let mut state = ArticleViewState::new();
        assert_eq!(state.handle_event(&TuiEvent::Next), None);
        assert_eq!(state.handle_event(&TuiEvent::ScrollDown), Some(()));
    }
}
