use crate::app::state::AppState;
use crate::config::Permission;
use crate::ui::panel;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = panel("Notifications");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    match state.config.notifications.permission {
        Permission::Denied => {
            lines.push(Line::from(Span::styled("Notifications are off.", Theme::muted())));
        }
        Permission::Default => {
            lines.push(Line::from(Span::styled(
                "Notifications not enabled yet.",
                Theme::muted(),
            )));
        }
        Permission::Granted if state.notifications.is_empty() => {
            lines.push(Line::from(Span::styled("Nothing new.", Theme::muted())));
        }
        Permission::Granted => {
            for n in &state.notifications {
                lines.push(Line::from(vec![
                    Span::styled(format!("{} ", n.timestamp), Theme::timestamp()),
                    Span::styled(n.title.clone(), Theme::key_hint()),
                ]));
                lines.push(Line::from(Span::styled(n.body.clone(), Theme::secondary())));
                lines.push(Line::from(""));
            }
        }
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
