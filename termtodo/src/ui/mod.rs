//! Terminal UI rendering.

pub mod filter_bar;
pub mod input_box;
pub mod notice;
pub mod stats_panel;
pub mod status_bar;
pub mod task_panel;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    text::Line,
    widgets::Paragraph,
};

use crate::app::{App, Hit};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    /// Title line.
    pub title: Rect,
    /// Total / active / completed boxes.
    pub stats: Rect,
    /// New-task input box.
    pub input: Rect,
    /// Filter selector.
    pub filters: Rect,
    /// Task list (including its border).
    pub list: Rect,
    /// Drag hint line.
    pub hint: Rect,
    /// Clear-completed button line.
    pub footer: Rect,
    /// Status bar.
    pub status: Rect,
}

/// Split the terminal area into [`Areas`].
#[must_use]
pub fn layout(area: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Stats
            Constraint::Length(3), // Input
            Constraint::Length(3), // Filters
            Constraint::Min(3),    // Tasks
            Constraint::Length(1), // Hint
            Constraint::Length(1), // Clear completed
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    Areas {
        title: chunks[0],
        stats: chunks[1],
        input: chunks[2],
        filters: chunks[3],
        list: chunks[4],
        hint: chunks[5],
        footer: chunks[6],
        status: chunks[7],
    }
}

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let areas = layout(area);

    let title = Paragraph::new(Line::styled("Todo App", theme::highlighted()))
        .alignment(Alignment::Center);
    frame.render_widget(title, areas.title);

    stats_panel::render(frame, areas.stats, app.store.stats());
    input_box::render(frame, areas.input, app);
    filter_bar::render(frame, areas.filters, app);
    task_panel::render(frame, areas.list, app);
    task_panel::render_hint(frame, areas.hint);
    task_panel::render_footer(frame, areas.footer, app);
    status_bar::render(frame, areas.status, app);

    if let Some(message) = &app.notice {
        notice::render(frame, area, message);
    }
}

/// Resolve the screen cell at (`column`, `row`) to the element drawn there.
///
/// `area` must be the same frame area the last [`draw`] used.
#[must_use]
pub fn hit_test(app: &App, area: Rect, column: u16, row: u16) -> Option<Hit> {
    let areas = layout(area);
    let pos = Position::new(column, row);

    if areas.input.contains(pos) {
        return Some(Hit::Input);
    }

    if let Some((filter, _)) = filter_bar::label_areas(areas.filters)
        .into_iter()
        .find(|(_, rect)| rect.contains(pos))
    {
        return Some(Hit::Filter(filter));
    }

    let inner = task_panel::list_inner(areas.list);
    if inner.contains(pos) {
        let len = app.visible_len();
        let offset = task_panel::scroll_offset(app.focus_row(), len, usize::from(inner.height));
        let slot = row - inner.y;
        let index = offset + usize::from(slot);
        if index >= len {
            return None;
        }
        let cells = task_panel::row_areas(inner, slot);
        return Some(if cells.toggle.contains(pos) {
            Hit::Toggle(index)
        } else if cells.delete.contains(pos) {
            Hit::Delete(index)
        } else {
            Hit::Row(index)
        });
    }

    task_panel::clear_button_area(areas.footer, &app.store.view())
        .filter(|rect| rect.contains(pos))
        .map(|_| Hit::ClearCompleted)
}
