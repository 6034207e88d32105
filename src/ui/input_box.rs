use crate::app::input::InputState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Single-line command prompt drawn over the status bar.
pub fn render(frame: &mut Frame, area: Rect, input: &InputState) {
    let line = Line::from(vec![
        Span::styled("❯ ", Style::default().fg(Theme::ACCENT_TEAL)),
        Span::styled(input.text.as_str(), Theme::input_text()),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    // Cursor offset: chevron "❯ " (2 columns)
    let prompt_offset = 2u16;
    let cursor_x = area.x + prompt_offset + input.cursor_column() as u16;
    frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(1)), area.y));
}
