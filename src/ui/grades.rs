use crate::app::state::AppState;
use crate::study::model::format_score;
use crate::ui::theme::Theme;
use crate::ui::{hints, panel};
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = panel("Grades");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);
    frame.render_widget(Paragraph::new(hints(&[("a", "add score")])), rows[1]);

    let grades = &state.data().grades;
    if grades.is_empty() {
        frame.render_widget(
            Paragraph::new("No grades yet. Press a to record a score.").style(Theme::muted()),
            rows[0],
        );
        return;
    }

    let cols = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
        .spacing(1)
        .split(rows[0]);

    let items: Vec<ListItem> = grades
        .iter()
        .map(|g| {
            ListItem::new(Line::from(vec![
                Span::styled(g.subject.clone(), Theme::text()),
                Span::styled(format!("  avg {}", g.average_display()), Theme::secondary()),
            ]))
        })
        .collect();
    let list = List::new(items)
        .highlight_style(Theme::selected())
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(Some(state.grades_cursor.selected));
    frame.render_stateful_widget(list, cols[0], &mut list_state);

    let Some(subject) = grades.get(state.grades_cursor.selected) else {
        return;
    };
    let mut lines = vec![Line::from(Span::styled(subject.subject.clone(), Theme::title()))];
    for score in &subject.scores {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>6}  ", format_score(score.value)), Theme::key_hint()),
            Span::styled(score.note.clone(), Theme::secondary()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Average ", Theme::muted()),
        Span::styled(subject.average_display(), Theme::selected()),
    ]));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), cols[1]);
}
