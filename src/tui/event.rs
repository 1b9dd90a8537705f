use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};
use log::warn;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    Fetch,
    SummarizeAll,
    SummarizeCurrent,
    Next,
    Previous,
    OpenLink,
    SkipReveal,

    // TUI-local events (handled directly in TUI)
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO).unwrap_or_else(|e| {
        warn!("Event poll failed: {}", e);
        None
    })
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> std::io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let mapped = match event::read()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event)
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    };
    Ok(mapped)
}

/// Translate a key press into a TUI event. Key releases are ignored.
pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('f')) => Some(TuiEvent::Fetch),
        (_, KeyCode::Char('s')) => Some(TuiEvent::SummarizeAll),
        (_, KeyCode::Char('S')) => Some(TuiEvent::SummarizeCurrent),
        (_, KeyCode::Right) | (_, KeyCode::Char('l')) | (_, KeyCode::Char('n')) => {
            Some(TuiEvent::Next)
        }
        (_, KeyCode::Left) | (_, KeyCode::Char('h')) | (_, KeyCode::Char('p')) => {
            Some(TuiEvent::Previous)
        }
        (_, KeyCode::Enter) | (_, KeyCode::Char('o')) => Some(TuiEvent::OpenLink),
        (_, KeyCode::Char(' ')) => Some(TuiEvent::SkipReveal),
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::ScrollUp),
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::ScrollDown),
        (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
        _ => None,
    }
}
