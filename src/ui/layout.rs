use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub tab_bar: Rect,
    pub body: Rect,
    pub notifications: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: tabs | content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    // Horizontal: tab body | gap | notifications
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Min(40),    // Tab body
            Constraint::Length(32), // Notifications
        ])
        .split(main_chunks[1]);

    AppLayout {
        tab_bar: main_chunks[0],
        body: h_chunks[0],
        notifications: h_chunks[1],
        status_bar: main_chunks[2],
    }
}

/// A rectangle of `width` x `height` centered in `area`, clipped to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(2));
    let h = height.min(area.height.saturating_sub(2));
    Rect::new(
        area.x + (area.width.saturating_sub(w)) / 2,
        area.y + (area.height.saturating_sub(h)) / 2,
        w,
        h,
    )
}
