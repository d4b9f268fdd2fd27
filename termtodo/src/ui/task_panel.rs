//! Task list rendering, plus the drag hint and clear-completed button.
//!
//! Row geometry is exposed so mouse hit testing resolves exactly the cells
//! that were drawn.

use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use termtodo_core::{Task, View};

use super::theme;
use crate::app::{App, PanelFocus};

/// Width of the toggle and delete cells at each end of a row.
const GLYPH_CELL_WIDTH: u16 = 3;

/// Text of the hint line below the list.
pub const DRAG_HINT: &str = "Drag and drop to reorder list";

/// Cells making up one task row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowAreas {
    /// The whole row.
    pub row: Rect,
    /// Completion toggle cell.
    pub toggle: Rect,
    /// Task text cell.
    pub text: Rect,
    /// Delete cell.
    pub delete: Rect,
}

/// Area inside the list border where rows are drawn.
#[must_use]
pub fn list_inner(area: Rect) -> Rect {
    area.inner(Margin::new(1, 1))
}

/// First visible row so that `focus` stays on screen.
#[must_use]
pub const fn scroll_offset(focus: usize, len: usize, height: usize) -> usize {
    if height == 0 || len <= height {
        return 0;
    }
    let offset = focus.saturating_sub(height - 1);
    let max = len - height;
    if offset > max { max } else { offset }
}

/// Cells for the row drawn at `slot` lines below the top of `inner`.
#[must_use]
pub fn row_areas(inner: Rect, slot: u16) -> RowAreas {
    let y = inner.y.saturating_add(slot);
    let row = Rect::new(inner.x, y, inner.width, 1);
    let toggle_width = GLYPH_CELL_WIDTH.min(row.width);
    let delete_width = GLYPH_CELL_WIDTH.min(row.width - toggle_width);
    RowAreas {
        row,
        toggle: Rect::new(row.x, y, toggle_width, 1),
        text: Rect::new(
            row.x + toggle_width,
            y,
            row.width - toggle_width - delete_width,
            1,
        ),
        delete: Rect::new(row.right() - delete_width, y, delete_width, 1),
    }
}

/// Label of the clear-completed button.
#[must_use]
pub fn clear_label(completed: usize) -> String {
    format!(" Clear Completed ({completed}) ")
}

/// Where the clear-completed button sits inside the footer, if `view`
/// offers it.
#[must_use]
pub fn clear_button_area(footer: Rect, view: &View<'_>) -> Option<Rect> {
    if !view.can_clear_completed() || footer.height == 0 {
        return None;
    }
    let width = u16::try_from(clear_label(view.stats.completed).chars().count())
        .unwrap_or(u16::MAX)
        .min(footer.width);
    let x = footer.x + (footer.width - width) / 2;
    Some(Rect::new(x, footer.y, width, 1))
}

/// Render the task list.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Tasks;
    let view = app.store.view();

    let block = Block::default()
        .title(format!(" Tasks ({}) ", view.filter))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });
    frame.render_widget(block, area);

    let inner = list_inner(area);
    if view.is_empty() {
        let message = Paragraph::new(Line::styled(view.empty_message(), theme::dimmed()))
            .alignment(Alignment::Center);
        frame.render_widget(message, inner);
        return;
    }

    let height = usize::from(inner.height);
    let offset = scroll_offset(app.focus_row(), view.tasks.len(), height);

    for (slot, (index, task)) in view
        .tasks
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .enumerate()
    {
        let areas = row_areas(inner, u16::try_from(slot).unwrap_or(u16::MAX));
        render_row(frame, areas, task, row_style(app, index, is_focused));
    }
}

fn row_style(app: &App, index: usize, is_focused: bool) -> Style {
    match app.drag {
        Some(drag) if drag.source == index => theme::dragging(),
        Some(drag) if drag.target == index => theme::drop_target(),
        Some(_) => Style::default(),
        None if is_focused && index == app.selected => theme::selected(),
        None => Style::default(),
    }
}

fn render_row(frame: &mut Frame, areas: RowAreas, task: &Task, style: Style) {
    let toggle = if task.completed {
        Span::styled("✓", theme::normal().fg(theme::SUCCESS))
    } else {
        Span::styled("○", theme::dimmed())
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::raw(" "), toggle])).style(style),
        areas.toggle,
    );

    let text_style = if task.completed {
        theme::completed_text()
    } else {
        theme::normal()
    };
    let mut spans = vec![Span::styled(task.text.as_str(), text_style)];
    if let Some(time) = &task.time {
        spans.push(Span::styled(format!("  · {time}"), theme::dimmed()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).style(style), areas.text);

    frame.render_widget(
        Paragraph::new(Span::styled(" ✗ ", theme::normal().fg(theme::ERROR))).style(style),
        areas.delete,
    );
}

/// Render the drag hint line.
pub fn render_hint(frame: &mut Frame, area: Rect) {
    let hint = Paragraph::new(Line::styled(DRAG_HINT, theme::dimmed())).alignment(Alignment::Center);
    frame.render_widget(hint, area);
}

/// Render the clear-completed button when there is something to clear.
pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.store.view();
    if let Some(rect) = clear_button_area(area, &view) {
        let button =
            Paragraph::new(clear_label(view.stats.completed)).style(theme::danger_button());
        frame.render_widget(button, rect);
    }
}
