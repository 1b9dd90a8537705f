//! # Actions
//!
//! Everything that can happen in Teletipo becomes an `Action`.
//! User presses `f`? That's `Action::FetchRequested`.
//! Service responds? That's `Action::ArticlesLoaded(result)`.
//!
//! `update()` applies an action to the state and returns an [`Effect`]
//! describing the I/O the adapter should perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Requests carry the store version they were issued against, so a summary
//! arriving after a newer fetch is dropped instead of being applied to the
//! wrong articles.

use chrono::Local;
use log::{info, warn};

use crate::core::state::App;
use crate::core::store::StoreEvent;
use crate::core::view;
use crate::news::{NewsError, RawArticle};

#[derive(Debug)]
pub enum Action {
    // User intents
    FetchRequested,
    SummarizeAllRequested,
    SummarizeCurrentRequested,
    Next,
    Previous,
    OpenLink,
    SkipReveal,
    Quit,

    // Service responses
    ArticlesLoaded(Result<Vec<RawArticle>, NewsError>),
    SummariesReady {
        version: u64,
        result: Result<Vec<String>, NewsError>,
    },
    SummaryReady {
        version: u64,
        index: usize,
        result: Result<String, NewsError>,
    },
}

/// I/O requested by `update()`, carried out by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    SpawnFetch,
    SpawnSummarizeAll { version: u64, texts: Vec<String> },
    SpawnSummarizeOne { version: u64, index: usize, text: String },
    OpenLink(String),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,

        Action::FetchRequested => {
            if app.is_busy {
                return Effect::None;
            }
            app.notice = None;
            app.is_busy = true;
            app.status_message = "Fetching news...".to_string();
            Effect::SpawnFetch
        }

        Action::SummarizeAllRequested => {
            if app.is_busy {
                return Effect::None;
            }
            app.notice = None;
            if app.store.is_empty() {
                app.status_message = "Nothing to summarize".to_string();
                return Effect::None;
            }
            let texts = app.store.articles().iter().map(|a| a.body()).collect();
            app.is_busy = true;
            app.status_message = format!("Summarizing {} articles...", app.store.len());
            Effect::SpawnSummarizeAll {
                version: app.store.version(),
                texts,
            }
        }

        Action::SummarizeCurrentRequested => {
            if app.is_busy {
                return Effect::None;
            }
            app.notice = None;
            let Some(article) = app.store.current_article() else {
                app.status_message = "Nothing to summarize".to_string();
                return Effect::None;
            };
            let text = article.body();
            app.is_busy = true;
            app.status_message = "Summarizing article...".to_string();
            Effect::SpawnSummarizeOne {
                version: app.store.version(),
                index: app.store.selected_index(),
                text,
            }
        }

        Action::Next => {
            app.notice = None;
            if app.store.next() {
                view::react(app, StoreEvent::SelectionChanged);
            }
            Effect::None
        }

        Action::Previous => {
            app.notice = None;
            if app.store.previous() {
                view::react(app, StoreEvent::SelectionChanged);
            }
            Effect::None
        }

        Action::OpenLink => {
            app.notice = None;
            match app.store.current_article() {
                Some(article) if !article.link.is_empty() => Effect::OpenLink(article.link.clone()),
                _ => Effect::None,
            }
        }

        Action::SkipReveal => {
            app.animator.finish();
            Effect::None
        }

        Action::ArticlesLoaded(result) => {
            app.is_busy = false;
            match result {
                Ok(raw) => {
                    let event = app.store.load(raw);
                    let now = Local::now();
                    app.status_message = format!(
                        "{} articles, fetched at {}",
                        app.store.len(),
                        now.format("%H:%M")
                    );
                    app.last_fetched = Some(now);
                    view::react(app, event);
                }
                Err(e) => fail(app, format!("Could not fetch news: {e}")),
            }
            Effect::None
        }

        Action::SummariesReady { version, result } => {
            app.is_busy = false;
            if version != app.store.version() {
                warn!(
                    "Dropping summaries for version {} (current is {})",
                    version,
                    app.store.version()
                );
                app.status_message = "Discarded summaries for an older fetch".to_string();
                return Effect::None;
            }
            match result {
                Ok(summaries) => match app.store.apply_summaries(summaries) {
                    Ok(event) => {
                        app.status_message = format!("Summarized {} articles", app.store.len());
                        view::react(app, event);
                    }
                    Err(e) => fail(app, format!("Could not summarize news: {e}")),
                },
                Err(e) => fail(app, format!("Could not summarize news: {e}")),
            }
            Effect::None
        }

        Action::SummaryReady {
            version,
            index,
            result,
        } => {
            app.is_busy = false;
            if version != app.store.version() {
                warn!(
                    "Dropping summary for article {} of version {} (current is {})",
                    index,
                    version,
                    app.store.version()
                );
                app.status_message = "Discarded summary for an older fetch".to_string();
                return Effect::None;
            }
            match result.map_err(|e| e.to_string()).and_then(|summary| {
                app.store
                    .apply_summary(index, summary)
                    .map_err(|e| e.to_string())
            }) {
                Ok(event) => {
                    app.status_message = format!("Summarized article {}", index + 1);
                    // Only the visible article needs a fresh reveal.
                    if index == app.store.selected_index() {
                        view::react(app, event);
                    }
                }
                Err(e) => fail(app, format!("Could not summarize article: {e}")),
            }
            Effect::None
        }
    }
}

fn fail(app: &mut App, message: String) {
    info!("Request failed: {}", message);
    app.status_message = "Request failed".to_string();
    app.notice = Some(message);
}
