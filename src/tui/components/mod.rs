//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: app name, status, spinner and reading position
//! - `Controls`: key hints, dimmed when the action is unavailable
//! - `EmptyState`: "No news yet" / loading placeholder
//!
//! ### Stateful Components
//!
//! - `ArticleView`: the current article; wraps `ArticleViewState`
//!   (scroll position, follow-the-reveal flag) which lives in `TuiState`
//!
//! Components receive external data as props, never by reaching into `App`:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! Controls { busy: app.is_busy, .. }.render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! controls.render(frame, area); // reads from global App
//! ```
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── controls.rs      (Key hint line)
//! ├── empty_state.rs   (Placeholder before the first fetch)
//! └── article_view.rs  (Scrollable article with reveal cursor)
//! ```

pub mod article_view;
pub mod controls;
pub mod empty_state;
pub mod title_bar;

pub use article_view::{ArticleView, ArticleViewState};
pub use controls::Controls;
pub use empty_state::EmptyState;
pub use title_bar::TitleBar;
