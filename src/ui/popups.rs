use crate::app::form::Form;
use crate::app::state::Confirm;
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

fn popup_block(title: &str, accent: Color) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(accent))
        .padding(Padding::horizontal(1))
        .style(Theme::popup())
}

pub fn render_form(frame: &mut Frame, form: &Form) {
    // Two rows per field plus the hint line
    let height = form.fields.len() as u16 * 2 + 3;
    let area = centered(frame.area(), 60, height);
    frame.render_widget(Clear, area);

    let block = popup_block(form.kind.title(), Theme::ACCENT_LAVENDER);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = form
        .fields
        .iter()
        .flat_map(|_| [Constraint::Length(1), Constraint::Length(1)])
        .collect();
    constraints.push(Constraint::Length(1));
    let rows = Layout::vertical(constraints).split(inner);

    for (i, field) in form.fields.iter().enumerate() {
        let focused = i == form.focused;
        let label_style = if focused {
            Theme::selected()
        } else {
            Theme::secondary()
        };
        frame.render_widget(
            Paragraph::new(Span::styled(field.label, label_style)),
            rows[i * 2],
        );

        let value_area = rows[i * 2 + 1];
        let line = Line::from(vec![
            Span::styled("❯ ", Style::default().fg(Theme::ACCENT_TEAL)),
            Span::styled(field.input.text.as_str(), Theme::input_text()),
        ]);
        frame.render_widget(Paragraph::new(line), value_area);
        if focused {
            let x = value_area.x + 2 + field.input.cursor_column() as u16;
            frame.set_cursor_position((x.min(value_area.right().saturating_sub(1)), value_area.y));
        }
    }

    if let Some(hint_area) = rows.last() {
        frame.render_widget(
            Paragraph::new(crate::ui::hints(&[
                ("tab", "next field"),
                ("enter", "next/save"),
                ("esc", "cancel"),
            ])),
            *hint_area,
        );
    }
}

pub fn render_confirm(frame: &mut Frame, confirm: &Confirm) {
    let area = centered(frame.area(), 56, 6);
    frame.render_widget(Clear, area);

    let block = popup_block(" Confirm ", Theme::ACCENT_AMBER);
    let lines = vec![
        Line::from(Span::styled(confirm.prompt.as_str(), Theme::text())),
        Line::from(""),
        crate::ui::hints(&[("y", "yes"), ("n", "no"), ("esc", "cancel")]),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

const HELP: &[(&str, &str)] = &[
    ("1-5, F1-F5", "switch tab"),
    ("tab / shift-tab", "next / previous tab"),
    ("j k, up down", "move selection"),
    ("a", "add (task, score, set, card, note)"),
    ("space", "toggle task, flip card, start/pause timer"),
    ("enter", "open set / edit note"),
    ("e / d", "edit / delete note, delete task"),
    ("r", "reset timer"),
    ("/export [csv|json|report|all]", "write export files"),
    ("/import <path>", "replace data from a JSON backup"),
    ("/help  /quit", ""),
    ("ctrl-c, q", "quit"),
];

pub fn render_help(frame: &mut Frame) {
    let area = centered(frame.area(), 70, HELP.len() as u16 + 4);
    frame.render_widget(Clear, area);

    let block = popup_block(" Help ", Theme::ACCENT_TEAL);
    let mut lines: Vec<Line> = HELP
        .iter()
        .map(|(keys, desc)| {
            Line::from(vec![
                Span::styled(format!("{:<32}", keys), Theme::key_hint()),
                Span::styled(*desc, Theme::secondary()),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Press any key to close", Theme::muted())));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
