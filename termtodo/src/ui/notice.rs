//! Blocking notice popup.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::theme;

/// Center a `width` x `height` box inside `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    rect
}

/// Draw `message` in a popup over whatever is already on screen.
pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let popup = centered(area, 40.min(area.width), 5.min(area.height));

    let block = Block::default()
        .title(" Notice ")
        .borders(Borders::ALL)
        .border_style(theme::notice_border());
    let body = Paragraph::new(vec![
        Line::styled(message, theme::bold()),
        Line::styled("Press Enter to continue", theme::dimmed()),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(block);

    frame.render_widget(Clear, popup);
    frame.render_widget(body, popup);
}
