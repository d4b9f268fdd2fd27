//! Theme and styling constants for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// Primary foreground color.
pub const FG_PRIMARY: Color = Color::White;

/// Secondary foreground color (dimmed text).
pub const FG_SECONDARY: Color = Color::Gray;

/// Highlight color for focused elements.
pub const HIGHLIGHT: Color = Color::Magenta;

/// Completed / success color.
pub const SUCCESS: Color = Color::Green;

/// Active-count color.
pub const WARNING: Color = Color::Yellow;

/// Destructive action color.
pub const ERROR: Color = Color::Red;

/// Total-count color.
pub const INFO: Color = Color::Blue;

/// Normal text style.
#[must_use]
pub fn normal() -> Style {
    Style::default().fg(FG_PRIMARY)
}

/// Dimmed text style (annotations, hints).
#[must_use]
pub fn dimmed() -> Style {
    Style::default().fg(FG_SECONDARY)
}

/// Bold text style.
#[must_use]
pub fn bold() -> Style {
    Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)
}

/// Highlighted text style (focused panel borders).
#[must_use]
pub fn highlighted() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

/// Selected item style (in lists and the filter selector).
#[must_use]
pub fn selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Unselected filter button.
#[must_use]
pub fn button() -> Style {
    Style::default().fg(Color::Black).bg(Color::Gray)
}

/// Completed task text: struck through and dim.
#[must_use]
pub fn completed_text() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Row currently being dragged.
#[must_use]
pub fn dragging() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .bg(Color::Rgb(60, 60, 60))
}

/// Row the dragged task would be dropped onto.
#[must_use]
pub fn drop_target() -> Style {
    Style::default()
        .bg(Color::Rgb(40, 50, 90))
        .add_modifier(Modifier::UNDERLINED)
}

/// Count inside a stats box.
#[must_use]
pub fn stat_value(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Clear-completed button.
#[must_use]
pub fn danger_button() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(ERROR)
        .add_modifier(Modifier::BOLD)
}

/// Style for the input cursor (bright white, bold).
#[must_use]
pub fn input_cursor() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for the status bar background (dark background with white foreground).
#[must_use]
pub fn status_bar_bg() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 50))
}

/// Border and title of the notice popup.
#[must_use]
pub fn notice_border() -> Style {
    Style::default().fg(WARNING).add_modifier(Modifier::BOLD)
}
