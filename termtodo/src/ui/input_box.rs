//! New-task input box.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::app::{App, PanelFocus};

const PLACEHOLDER: &str = "Create a new todo...";

/// Render the input box.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Input;

    let input_line = if app.input.is_empty() {
        let mut spans = vec![Span::styled(PLACEHOLDER, theme::dimmed())];
        if is_focused {
            spans.insert(0, Span::styled("█", theme::input_cursor()));
        }
        Line::from(spans)
    } else if is_focused {
        // Split around the cursor so the block cursor can be styled on its own.
        let split = app
            .input
            .char_indices()
            .nth(app.cursor_position)
            .map_or(app.input.len(), |(i, _)| i);
        let (before, after) = app.input.split_at(split);
        Line::from(vec![
            Span::styled(before, theme::normal()),
            Span::styled("█", theme::input_cursor()),
            Span::styled(after, theme::normal()),
        ])
    } else {
        Line::from(Span::styled(app.input.as_str(), theme::normal()))
    };

    let block = Block::default()
        .title(" Add Todo (Enter) ")
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    let paragraph = Paragraph::new(input_line).block(block);

    frame.render_widget(paragraph, area);
}
