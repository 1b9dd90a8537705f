use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ArticleView, Controls, EmptyState, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let notice_height = u16::from(app.notice.is_some());
    let layout = Layout::vertical([Length(1), Min(0), Length(notice_height), Length(1)]);
    let [title_area, main_area, notice_area, controls_area] = layout.areas(frame.area());

    let position = (!app.store.is_empty()).then(|| (app.store.selected_index(), app.store.len()));
    TitleBar::new(
        app.status_message.clone(),
        position,
        app.is_busy,
        spinner_frame,
    )
    .render(frame, title_area);

    match app.store.current_article() {
        Some(article) => {
            tui.article_view
                .sync_article(app.store.version(), app.store.selected_index());
            ArticleView {
                article,
                display: app.animator.current_display(),
                revealing: app.animator.is_revealing(),
                state: &mut tui.article_view,
            }
            .render(frame, main_area);
        }
        None => EmptyState {
            busy: app.is_busy,
            spinner_frame,
        }
        .render(frame, main_area),
    }

    if let Some(notice) = &app.notice {
        let line = Line::from(Span::styled(
            format!("✖ {notice}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, notice_area);
    }

    Controls {
        busy: app.is_busy,
        has_articles: !app.store.is_empty(),
        has_previous: app.store.has_previous(),
        has_next: app.store.has_next(),
        revealing: app.animator.is_revealing(),
    }
    .render(frame, controls_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::news::RawArticle;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(app: &App, tui: &mut TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_empty_app() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = screen(&app, &mut tui);
        assert!(text.contains("Teletipo"));
        assert!(text.contains("No news yet"));
        assert!(text.contains("[f]"));
    }

    #[test]
    fn test_draw_loaded_article_mid_reveal() {
        let mut app = test_app();
        update(
            &mut app,
            Action::ArticlesLoaded(Ok(vec![RawArticle {
                title: "Sequía".to_string(),
                paragraphs: vec!["Llueve poco".to_string()],
                link: "https://example.com/s".to_string(),
            }])),
        );
        for _ in 0..6 {
            app.animator.tick();
        }
        let mut tui = TuiState::new();
        let text = screen(&app, &mut tui);
        assert!(text.contains("Sequía"));
        assert!(text.contains("Llueve▌"));
        assert!(text.contains("1/1"));
    }

    #[test]
    fn test_draw_notice() {
        let mut app = test_app();
        app.notice = Some("Could not fetch news: network error: refused".to_string());
        let mut tui = TuiState::new();
        let text = screen(&app, &mut tui);
        assert!(text.contains("Could not fetch news"));
    }
}
