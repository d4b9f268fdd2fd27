//! Filter selector: all / active / completed.

use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    widgets::{Block, Borders, Paragraph},
};
use termtodo_core::Filter;

use super::theme;
use crate::app::{App, PanelFocus};

/// Screen rectangles of the three filter labels inside the bar at `area`.
///
/// Shared by rendering and mouse hit testing.
#[must_use]
pub fn label_areas(area: Rect) -> [(Filter, Rect); 3] {
    let inner = area.inner(Margin::new(1, 1));
    let mut x = inner.x;
    Filter::ALL.map(|filter| {
        let width = u16::try_from(filter.label().len() + 2).unwrap_or(u16::MAX);
        let rect = Rect::new(x, inner.y, width, inner.height.min(1)).intersection(inner);
        x = x.saturating_add(width).saturating_add(1);
        (filter, rect)
    })
}

/// Render the filter bar, marking the active filter.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Filters;
    let active = app.store.filter();

    let block = Block::default()
        .title(" Filter ")
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });
    frame.render_widget(block, area);

    for (filter, rect) in label_areas(area) {
        let style = if filter == active {
            theme::selected()
        } else {
            theme::button()
        };
        let label = Paragraph::new(filter.label())
            .alignment(Alignment::Center)
            .style(style);
        frame.render_widget(label, rect);
    }
}
