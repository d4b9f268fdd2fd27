//! Stats summary: total / active / completed counts.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Color,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use termtodo_core::Stats;

use super::theme;

/// Render three count boxes side by side.
pub fn render(frame: &mut Frame, area: Rect, stats: Stats) {
    let boxes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    let entries: [(&str, usize, Color); 3] = [
        ("Total", stats.total, theme::INFO),
        ("Active", stats.active, theme::WARNING),
        ("Completed", stats.completed, theme::SUCCESS),
    ];

    for ((label, value, color), area) in entries.into_iter().zip(boxes.iter()) {
        let block = Block::default()
            .title(Line::styled(label, theme::dimmed()).centered())
            .borders(Borders::ALL)
            .border_style(theme::normal().fg(color));
        let paragraph = Paragraph::new(Line::styled(value.to_string(), theme::stat_value(color)))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, *area);
    }
}
