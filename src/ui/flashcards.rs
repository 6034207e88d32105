use crate::app::state::AppState;
use crate::ui::theme::Theme;
use crate::ui::{hints, panel};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.navigator.is_open() {
        render_study(frame, area, state);
    } else {
        render_sets(frame, area, state);
    }
}

fn render_sets(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = panel("Flashcards");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);
    frame.render_widget(
        Paragraph::new(hints(&[("a", "new set"), ("enter", "study")])),
        rows[1],
    );

    let sets = &state.data().flashcard_sets;
    if sets.is_empty() {
        frame.render_widget(
            Paragraph::new("No flashcard sets yet. Press a to create one.").style(Theme::muted()),
            rows[0],
        );
        return;
    }

    let items: Vec<ListItem> = sets
        .iter()
        .map(|set| {
            ListItem::new(Line::from(vec![
                Span::styled(set.name.clone(), Theme::text()),
                Span::styled(format!("  {} cards", set.cards.len()), Theme::secondary()),
            ]))
        })
        .collect();
    let list = List::new(items)
        .highlight_style(Theme::selected())
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(Some(state.sets_cursor.selected));
    frame.render_stateful_widget(list, rows[0], &mut list_state);
}

fn render_study(frame: &mut Frame, area: Rect, state: &AppState) {
    let data = state.data();
    let nav = &state.navigator;
    let name = nav
        .current_set(data)
        .map(|s| s.name.as_str())
        .unwrap_or("Flashcards");
    let count = state.open_card_count();

    let block = panel(name);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(nav.counter(count), Theme::secondary()))
            .alignment(Alignment::Right),
        rows[0],
    );

    let card_block = Block::default()
        .title(format!(" {} ", nav.face().label()))
        .title_style(Theme::key_hint())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(if nav.is_flipped() {
            Style::default().fg(Theme::ACCENT_LAVENDER)
        } else {
            Theme::border_focused()
        });
    let body = match nav.visible_text(data) {
        Some(text) => Paragraph::new(text.to_string()).style(Theme::text()),
        None => Paragraph::new("This set has no cards yet. Press a to add one.")
            .style(Theme::muted()),
    };
    frame.render_widget(
        body.block(card_block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[1],
    );

    let prev = if nav.can_prev() { "< prev" } else { "" };
    let next = if nav.can_next(count) { "next >" } else { "" };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{:<10}", prev), Theme::key_hint()),
            Span::raw(" ".repeat((rows[2].width as usize).saturating_sub(20))),
            Span::styled(format!("{:>10}", next), Theme::key_hint()),
        ])),
        rows[2],
    );

    frame.render_widget(
        Paragraph::new(hints(&[
            ("space", "flip"),
            ("h/l", "prev/next"),
            ("a", "add card"),
            ("esc", "back"),
        ])),
        rows[3],
    );
}
