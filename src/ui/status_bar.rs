use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    match &state.status_message {
        Some(msg) if msg.is_error => parts.push(Span::styled(
            format!(" {} ", msg.text),
            Theme::error_message().bg(Color::DarkGray),
        )),
        Some(msg) => parts.push(Span::styled(
            format!(" {} ", msg.text),
            Theme::info_message().bg(Color::DarkGray),
        )),
        None => parts.push(Span::styled(
            format!(" {} ", state.status_line()),
            Theme::status_bar(),
        )),
    }

    let help = " / command  ? help  q quit ";
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + help.len());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        help,
        Style::default().fg(Theme::ACCENT_TEAL).bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
