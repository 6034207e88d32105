mod flashcards;
mod grades;
mod input_box;
mod layout;
mod notes;
mod notifications;
mod pomodoro;
mod popups;
mod status_bar;
mod tab_bar;
mod tasks;
mod theme;

use crate::app::state::{AppState, Overlay, Tab};
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    tab_bar::render(frame, app_layout.tab_bar, state);
    match state.tab {
        Tab::Tasks => tasks::render(frame, app_layout.body, state),
        Tab::Grades => grades::render(frame, app_layout.body, state),
        Tab::Flashcards => flashcards::render(frame, app_layout.body, state),
        Tab::Pomodoro => pomodoro::render(frame, app_layout.body, state),
        Tab::Notes => notes::render(frame, app_layout.body, state),
    }
    notifications::render(frame, app_layout.notifications, state);

    match &state.overlay {
        Overlay::None => status_bar::render(frame, app_layout.status_bar, state),
        Overlay::Command(input) => input_box::render(frame, app_layout.status_bar, input),
        Overlay::Form(form) => {
            status_bar::render(frame, app_layout.status_bar, state);
            popups::render_form(frame, form);
        }
        Overlay::Confirm(confirm) => {
            status_bar::render(frame, app_layout.status_bar, state);
            popups::render_confirm(frame, confirm);
        }
        Overlay::Help => {
            status_bar::render(frame, app_layout.status_bar, state);
            popups::render_help(frame);
        }
    }
}

/// Bordered panel shared by every tab body.
fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1))
}

/// A line of `key description` hints.
fn hints(pairs: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (key, desc) in pairs {
        spans.push(Span::styled(format!("{} ", key), Theme::key_hint()));
        spans.push(Span::styled(format!("{}  ", desc), Theme::muted()));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::form::{Form, FormKind};
    use crate::app::state::PendingOp;
    use crate::config::AppConfig;
    use crate::storage::sample_data;
    use chrono::NaiveDate;
    use ratatui::backend::TestBackend;

    fn screen(state: &AppState) -> String {
        let backend = TestBackend::new(110, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn state() -> AppState {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        AppState::new(AppConfig::default(), sample_data(today))
    }

    #[test]
    fn every_tab_renders() {
        let mut state = state();
        for tab in Tab::ALL {
            state.switch_tab(tab);
            let text = screen(&state);
            assert!(text.contains(tab.title()));
        }
    }

    #[test]
    fn task_list_shows_titles() {
        let text = screen(&state());
        assert!(text.contains("Math homework - page 45"));
    }

    #[test]
    fn bad_date_format_in_config_still_renders() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let mut config = AppConfig::default();
        config.ui.date_format = "%Q".into();
        let state = AppState::new(config, sample_data(today));
        let text = screen(&state);
        assert!(text.contains("2026-03-12"));
    }

    #[test]
    fn pomodoro_shows_clock() {
        let mut state = state();
        state.switch_tab(Tab::Pomodoro);
        let text = screen(&state);
        assert!(text.contains("25:00"));
        assert!(text.contains("FOCUS TIME"));
    }

    #[test]
    fn study_mode_shows_question_and_counter() {
        let mut state = state();
        state.switch_tab(Tab::Flashcards);
        let id = state.data().flashcard_sets[0].id;
        state.navigator.open(id, state.tracker.data()).unwrap();
        let text = screen(&state);
        assert!(text.contains("QUESTION"));
        assert!(text.contains("Beautiful"));
        assert!(text.contains("1 / 2"));
    }

    #[test]
    fn overlays_render() {
        let mut state = state();
        state.open_overlay(Overlay::Form(Form::new(FormKind::Task)));
        assert!(screen(&state).contains("New task"));
        state.ask("Delete it?", PendingOp::DeleteTask(1));
        assert!(screen(&state).contains("Delete it?"));
        state.open_overlay(Overlay::Help);
        assert!(screen(&state).contains("/export"));
    }
}
