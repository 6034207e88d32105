use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_SURFACE: Color = Color::Rgb(30, 32, 40);
    pub const BORDER_DIM: Color = Color::Rgb(70, 74, 88);
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 222, 230);
    pub const TEXT_SECONDARY: Color = Color::Rgb(160, 164, 180);
    pub const TEXT_MUTED: Color = Color::Rgb(105, 110, 125);
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 210);
    pub const ACCENT_LAVENDER: Color = Color::Rgb(175, 140, 220);
    pub const ACCENT_AMBER: Color = Color::Rgb(230, 180, 80);
    pub const ACCENT_GREEN: Color = Color::Rgb(90, 210, 130);
    pub const ACCENT_RED: Color = Color::Rgb(230, 100, 100);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn selected() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn completed() -> Style {
        Style::default()
            .fg(Self::TEXT_MUTED)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_message() -> Style {
        Style::default().fg(Self::ACCENT_RED)
    }

    pub fn info_message() -> Style {
        Style::default().fg(Self::ACCENT_GREEN)
    }

    pub fn tab_active() -> Style {
        Style::default()
            .fg(Self::BG_SURFACE)
            .bg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Color::DarkGray)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn popup() -> Style {
        Style::default().bg(Self::BG_SURFACE)
    }
}
