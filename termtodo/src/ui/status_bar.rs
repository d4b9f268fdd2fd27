//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let help_text = if app.notice.is_some() {
        "Enter: dismiss"
    } else if app.drag.is_some() {
        "↑↓/jk: choose position | Enter/m: drop | Esc: cancel"
    } else {
        match app.focus {
            PanelFocus::Input => "Enter: add | Tab: switch panel | Esc: quit | ←→: move cursor",
            PanelFocus::Filters => "←→/hl or 1-3: filter | Tab: switch panel | Esc: quit",
            PanelFocus::Tasks => {
                "↑↓/jk: select | Space: toggle | d: delete | m: move | c: clear done | Esc: quit"
            }
        }
    };

    let status_line = Line::from(vec![
        Span::styled(
            concat!("TermTodo v", env!("CARGO_PKG_VERSION")),
            theme::bold(),
        ),
        Span::raw(" | "),
        Span::styled(help_text, theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
