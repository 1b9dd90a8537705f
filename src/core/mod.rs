//! # Core Application Logic
//!
//! This module contains Teletipo's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Store (articles)     │
//!                    │  • Reveal (typewriter)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │    News    │
//!           │  Adapter   │              │  service   │
//!           │ (ratatui)  │              │  (reqwest) │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`store`]: `ArticleStore` — the articles and the selected index
//! - [`navigation`]: bounded next/previous on the store
//! - [`reveal`]: `RevealAnimator` — the character-by-character reveal
//! - [`view`]: the reaction that feeds the animator on store changes
//! - [`state`]: the `App` struct — all application state in one place
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: file/env/CLI settings

pub mod action;
pub mod config;
pub mod navigation;
pub mod reveal;
pub mod state;
pub mod store;
pub mod view;
