//! # Controls Component
//!
//! One-line key hints. Hints for actions that are currently unavailable
//! (a request is outstanding, no next article, ...) are drawn dimmed.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct Controls {
    pub busy: bool,
    pub has_articles: bool,
    pub has_previous: bool,
    pub has_next: bool,
    pub revealing: bool,
}

impl Controls {
    /// `(key, label, enabled)` for every hint, in display order.
    pub fn hints(&self) -> Vec<(&'static str, &'static str, bool)> {
        vec![
            ("f", "fetch", !self.busy),
            ("s", "summarize all", !self.busy && self.has_articles),
            ("S", "summarize this", !self.busy && self.has_articles),
            ("←", "prev", self.has_previous),
            ("→", "next", self.has_next),
            ("o", "open", self.has_articles),
            ("space", "skip", self.revealing),
            ("q", "quit", true),
        ]
    }
}

impl Component for Controls {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (key, label, enabled) in self.hints() {
            let (key_style, label_style) = if enabled {
                (
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    Style::default(),
                )
            } else {
                let dim = Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM);
                (dim, dim)
            };
            spans.push(Span::styled(format!("[{key}]"), key_style));
            spans.push(Span::styled(format!(" {label}  "), label_style));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled(controls: &Controls, label: &str) -> bool {
        controls
            .hints()
            .into_iter()
            .find(|(_, l, _)| *l == label)
            .map(|(_, _, e)| e)
            .unwrap()
    }

    #[test]
    fn test_busy_disables_requests() {
        let controls = Controls {
            busy: true,
            has_articles: true,
            has_previous: false,
            has_next: true,
            revealing: false,
        };
        assert!(!enabled(&controls, "fetch"));
        assert!(!enabled(&controls, "summarize all"));
        assert!(enabled(&controls, "next"));
        assert!(enabled(&controls, "quit"));
    }

    #[test]
    fn test_empty_collection_disables_article_actions() {
        let controls = Controls {
            busy: false,
            has_articles: false,
            has_previous: false,
            has_next: false,
            revealing: false,
        };
        assert!(enabled(&controls, "fetch"));
        assert!(!enabled(&controls, "summarize all"));
        assert!(!enabled(&controls, "open"));
        assert!(!enabled(&controls, "prev"));
    }
}
