use crate::app::state::AppState;
use crate::ui::theme::Theme;
use crate::ui::{hints, panel};
use chrono::{Local, NaiveDate};
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use std::fmt::Write;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = panel("Tasks");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);
    let tasks = &state.data().tasks;

    if tasks.is_empty() {
        frame.render_widget(
            Paragraph::new("No tasks yet. Press a to add one.").style(Theme::muted()),
            chunks[0],
        );
    } else {
        let today = Local::now().date_naive();
        let date_format = state.config.ui.date_format.as_str();
        let items: Vec<ListItem> = tasks
            .iter()
            .map(|task| {
                let check = if task.completed { "[x] " } else { "[ ] " };
                let title_style = if task.completed {
                    Theme::completed()
                } else {
                    Theme::text()
                };
                let deadline_style = if !task.completed && task.deadline < today {
                    Theme::error_message()
                } else {
                    Theme::timestamp()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(check, Theme::secondary()),
                    Span::styled(task.title.clone(), title_style),
                    Span::styled(format!("  {}  ", task.subject), Theme::secondary()),
                    Span::styled(
                        format_deadline(task.deadline, date_format),
                        deadline_style,
                    ),
                ]))
            })
            .collect();
        let list = List::new(items)
            .highlight_style(Theme::selected())
            .highlight_symbol("> ");
        let mut list_state = ListState::default().with_selected(Some(state.tasks_cursor.selected));
        frame.render_stateful_widget(list, chunks[0], &mut list_state);
    }

    frame.render_widget(
        Paragraph::new(hints(&[("a", "add"), ("space", "done"), ("d", "delete")])),
        chunks[1],
    );
}

/// Format with the configured pattern. A pattern chrono rejects falls back to
/// `YYYY-MM-DD`.
fn format_deadline(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", date.format(pattern)) {
        Ok(()) => out,
        Err(_) => date.format("%Y-%m-%d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_pattern_falls_back_to_iso() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 30).unwrap();
        assert_eq!(format_deadline(date, "%d/%m/%Y"), "30/01/2026");
        assert_eq!(format_deadline(date, "%Q"), "2026-01-30");
    }
}
