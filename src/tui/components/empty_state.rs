//! # Empty State Component
//!
//! Shown instead of the article view while the collection is empty:
//! either a hint to fetch, or a spinner while the fetch is running.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::components::title_bar::SPINNER_FRAMES;

pub struct EmptyState {
    pub busy: bool,
    pub spinner_frame: usize,
}

impl Component for EmptyState {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = if self.busy {
            let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            vec![Line::from(Span::styled(
                format!("{spinner} Loading..."),
                Style::default().fg(Color::Yellow),
            ))]
        } else {
            vec![
                Line::from(Span::styled(
                    "No news yet",
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Press f to fetch",
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(Span::styled(
                    format!("v{}", env!("CARGO_PKG_VERSION")),
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        };

        let [text_area] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), text_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(mut state: EmptyState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal.draw(|f| state.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_idle_hint() {
        let text = rendered(EmptyState {
            busy: false,
            spinner_frame: 0,
        });
        assert!(text.contains("No news yet"));
        assert!(text.contains("Press f to fetch"));
    }

    #[test]
    fn test_busy_spinner() {
        let text = rendered(EmptyState {
            busy: true,
            spinner_frame: 0,
        });
        assert!(text.contains("Loading..."));
        assert!(!text.contains("No news yet"));
    }
}
