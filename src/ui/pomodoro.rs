use crate::app::state::AppState;
use crate::pomodoro::TimerMode;
use crate::ui::theme::Theme;
use crate::ui::{hints, panel};
use ratatui::prelude::*;
use ratatui::widgets::{Gauge, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = panel("Pomodoro");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let timer = &state.timer;
    let accent = match timer.mode() {
        TimerMode::Focus => Theme::ACCENT_TEAL,
        TimerMode::Break => Theme::ACCENT_GREEN,
    };

    let rows = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            timer.mode().label(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(timer.display(), Theme::title()))
            .alignment(Alignment::Center),
        rows[3],
    );

    let gauge_area = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Percentage(60),
        Constraint::Fill(1),
    ])
    .split(rows[5])[1];
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(accent).bg(Theme::BG_SURFACE))
            .ratio(timer.progress())
            .label(if timer.is_running() { "running" } else { "paused" }),
        gauge_area,
    );

    frame.render_widget(
        Paragraph::new(hints(&[("space", "start/pause"), ("r", "reset")])),
        rows[7],
    );
}
