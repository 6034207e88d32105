use crate::app::state::AppState;
use crate::ui::theme::Theme;
use crate::ui::{hints, panel};
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = panel("Notes");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);
    frame.render_widget(
        Paragraph::new(hints(&[("a", "new"), ("e", "edit"), ("d", "delete")])),
        rows[1],
    );

    let notes = &state.data().notes;
    if notes.is_empty() {
        frame.render_widget(
            Paragraph::new("No notes yet. Press a to write one.").style(Theme::muted()),
            rows[0],
        );
        return;
    }

    let cols = Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
        .spacing(1)
        .split(rows[0]);

    let items: Vec<ListItem> = notes
        .iter()
        .map(|n| ListItem::new(Span::styled(n.title.clone(), Theme::text())))
        .collect();
    let list = List::new(items)
        .highlight_style(Theme::selected())
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(Some(state.notes_cursor.selected));
    frame.render_stateful_widget(list, cols[0], &mut list_state);

    let Some(note) = notes.get(state.notes_cursor.selected) else {
        return;
    };
    let mut lines = vec![Line::from(Span::styled(note.title.clone(), Theme::title()))];
    if let Some(subject) = note.subject_label() {
        lines.push(Line::from(Span::styled(subject.to_string(), Theme::key_hint())));
    }
    lines.push(Line::from(""));
    lines.extend(
        note.content
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), Theme::text()))),
    );
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), cols[1]);
}
