//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop sleeps until something can change on screen:
//!
//! - **Revealing**: wakes at the animator's next deadline, runs the due ticks
//!   and redraws.
//! - **Busy**: draws every ~80ms so the spinner turns.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! Service calls run on tokio tasks and report back through an mpsc channel
//! of `Action`s, which the loop drains every iteration.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::news::{HttpNewsService, NewsService};
use crate::tui::component::EventHandler;
use crate::tui::components::ArticleViewState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const BUSY_FRAME: Duration = Duration::from_millis(80);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub article_view: ArticleViewState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            article_view: ArticleViewState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// How long the loop may block before it has to look at the animator again.
fn poll_timeout(app: &App, now: Instant) -> Duration {
    let mut timeout = if app.is_busy { BUSY_FRAME } else { IDLE_POLL };
    if let Some(deadline) = app.animator.next_deadline() {
        timeout = timeout.min(deadline.saturating_duration_since(now));
    }
    timeout
}

fn to_action(event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Fetch => Some(Action::FetchRequested),
        TuiEvent::SummarizeAll => Some(Action::SummarizeAllRequested),
        TuiEvent::SummarizeCurrent => Some(Action::SummarizeCurrentRequested),
        TuiEvent::Next => Some(Action::Next),
        TuiEvent::Previous => Some(Action::Previous),
        TuiEvent::OpenLink => Some(Action::OpenLink),
        TuiEvent::SkipReveal => Some(Action::SkipReveal),
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown
        | TuiEvent::Resize => None,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let service: Arc<dyn NewsService> =
        Arc::new(HttpNewsService::new(config.base_url.clone(), config.timeouts));
    let mut app = App::from_config(service, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    let result = loop {
        if app.is_busy {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let first_event = match poll_event_timeout(poll_timeout(&app, Instant::now())) {
            Ok(event) => event,
            Err(e) => break Err(e),
        };

        if app.animator.advance(Instant::now()) {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            if tui.article_view.handle_event(&event).is_some() {
                continue;
            }
            let Some(action) = to_action(event) else {
                continue;
            };
            debug!("User action: {:?}", action);
            if dispatch(&mut app, action, &tx) {
                should_quit = true;
            }
        }

        // Handle background task actions (service responses)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, action, &tx) {
                should_quit = true;
            }
        }

        if should_quit {
            break Ok(());
        }
    };

    info!("Teletipo shutting down");
    ratatui::restore();
    result
}

/// Apply an action and carry out its effect. Returns true when the app should quit.
fn dispatch(app: &mut App, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    match update(app, action) {
        Effect::None => {}
        Effect::Quit => return true,
        Effect::SpawnFetch => spawn_fetch(app, tx.clone()),
        Effect::SpawnSummarizeAll { version, texts } => {
            spawn_summarize_all(app, version, texts, tx.clone())
        }
        Effect::SpawnSummarizeOne {
            version,
            index,
            text,
        } => spawn_summarize_one(app, version, index, text, tx.clone()),
        Effect::OpenLink(url) => {
            info!("Opening {}", url);
            if let Err(e) = open::that(&url) {
                warn!("Failed to open {}: {}", url, e);
            }
        }
    }
    false
}

fn send(tx: &mpsc::Sender<Action>, action: Action) {
    if tx.send(action).is_err() {
        warn!("Failed to deliver service response: receiver dropped");
    }
}

fn spawn_fetch(app: &App, tx: mpsc::Sender<Action>) {
    let service = app.service.clone();
    info!("Spawning fetch via {}", service.name());
    tokio::spawn(async move {
        let result = service.fetch_articles().await;
        send(&tx, Action::ArticlesLoaded(result));
    });
}

fn spawn_summarize_all(app: &App, version: u64, texts: Vec<String>, tx: mpsc::Sender<Action>) {
    let service = app.service.clone();
    info!("Spawning batch summary of {} articles (version {})", texts.len(), version);
    tokio::spawn(async move {
        let result = service.summarize_batch(&texts).await;
        send(&tx, Action::SummariesReady { version, result });
    });
}

fn spawn_summarize_one(
    app: &App,
    version: u64,
    index: usize,
    text: String,
    tx: mpsc::Sender<Action>,
) {
    let service = app.service.clone();
    info!("Spawning summary of article {} (version {})", index, version);
    tokio::spawn(async move {
        let result = service.summarize_one(&text).await;
        send(
            &tx,
            Action::SummaryReady {
                version,
                index,
                result,
            },
        );
    });
}
