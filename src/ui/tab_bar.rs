use crate::app::state::{AppState, Tab};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::styled(" StudyHub ", Theme::key_hint())];
    for (i, tab) in Tab::ALL.iter().enumerate() {
        let style = if *tab == state.tab {
            Theme::tab_active()
        } else {
            Theme::tab_inactive()
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {} {} ", i + 1, tab.title()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
