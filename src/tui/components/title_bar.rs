//! # TitleBar Component
//!
//! Top status bar showing application state.
//!
//! ## Responsibilities
//!
//! - Display the app name
//! - Display status messages (e.g., "Fetching news...", "12 articles, fetched at 09:41")
//! - Show a spinner while a request is outstanding
//! - Show the reading position (`2/12`) once articles are loaded
//!
//! ## Conditional Formatting
//!
//! 1. **Busy**: `"Teletipo | ⠙ Fetching news..."`
//! 2. **Articles loaded**: `"Teletipo | 12 articles, fetched at 09:41 | 2/12"`
//! 3. **Default**: `"Teletipo | Press f to fetch news"`
//!
//! TitleBar is stateless; it receives everything as props.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Top status bar component.
pub struct TitleBar {
    pub status_message: String,
    /// `(selected index, article count)`; None when nothing is loaded.
    pub position: Option<(usize, usize)>,
    pub busy: bool,
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(
        status_message: String,
        position: Option<(usize, usize)>,
        busy: bool,
        spinner_frame: usize,
    ) -> Self {
        Self {
            status_message,
            position,
            busy,
            spinner_frame,
        }
    }

    fn text(&self) -> String {
        let mut text = String::from("Teletipo");
        if self.busy {
            let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            text.push_str(&format!(" | {} {}", spinner, self.status_message));
        } else if !self.status_message.is_empty() {
            text.push_str(&format!(" | {}", self.status_message));
        }
        if let Some((index, count)) = self.position {
            text.push_str(&format!(" | {}/{}", index + 1, count));
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
