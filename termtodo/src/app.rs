//! Application state and event handling.
//!
//! `App` owns the [`TodoStore`] plus everything that only matters while the
//! screen is up: the input buffer, focus, selection, an in-flight drag and
//! a blocking notice. Key and mouse events are translated into at most one
//! store operation each.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use termtodo_core::{Filter, TaskId, TodoStore};

use crate::config::AppConfig;

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// Input box is focused (default).
    Input,
    /// Filter selector is focused.
    Filters,
    /// Task list is focused.
    Tasks,
}

/// An in-flight drag gesture over the visible task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drag {
    /// Visible index of the row being dragged.
    pub source: usize,
    /// Visible index of the row currently under the pointer (or keyboard
    /// cursor).
    pub target: usize,
}

/// Screen element under a mouse pointer, as resolved by [`crate::ui::hit_test`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// The text input box.
    Input,
    /// One of the filter selector labels.
    Filter(Filter),
    /// Completion toggle of the visible row.
    Toggle(usize),
    /// Delete glyph of the visible row.
    Delete(usize),
    /// Body of the visible row.
    Row(usize),
    /// The clear-completed button.
    ClearCompleted,
}

impl Hit {
    /// Visible row index if the hit lies anywhere on a task row.
    #[must_use]
    pub const fn row(self) -> Option<usize> {
        match self {
            Self::Toggle(i) | Self::Delete(i) | Self::Row(i) => Some(i),
            Self::Input | Self::Filter(_) | Self::ClearCompleted => None,
        }
    }
}

/// Main application state.
pub struct App {
    /// Task list and active filter.
    pub store: TodoStore,
    /// Current text input.
    pub input: String,
    /// Cursor position in input (character index).
    pub cursor_position: usize,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Selected row in the visible task list.
    pub selected: usize,
    /// Drag in progress, if any.
    pub drag: Option<Drag>,
    /// Blocking notice awaiting acknowledgement.
    pub notice: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new application around `store`.
    #[must_use]
    pub const fn new(store: TodoStore) -> Self {
        Self {
            store,
            input: String::new(),
            cursor_position: 0,
            focus: PanelFocus::Input,
            selected: 0,
            drag: None,
            notice: None,
            should_quit: false,
        }
    }

    /// Create an application from resolved configuration.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let mut store = if config.seed_demo {
            TodoStore::with_demo_tasks()
        } else {
            TodoStore::new()
        };
        store.set_filter(config.default_filter);
        Self::new(store)
    }

    /// Number of rows in the visible task list.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.store.filtered().len()
    }

    /// Id of the task at visible row `index`.
    #[must_use]
    pub fn visible_id(&self, index: usize) -> Option<TaskId> {
        self.store.filtered().get(index).map(|t| t.id)
    }

    /// Row the list should keep on screen: the drop target while dragging,
    /// the selection otherwise.
    #[must_use]
    pub fn focus_row(&self) -> usize {
        self.drag.map_or(self.selected, |d| d.target)
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.acknowledge_notice();
            }
            return;
        }

        if self.drag.is_some() {
            self.handle_drag_key(key);
            return;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::BackTab, _) | (KeyCode::Tab, KeyModifiers::SHIFT) => {
                self.cycle_focus_backward();
                return;
            }
            (KeyCode::Tab, _) => {
                self.cycle_focus_forward();
                return;
            }
            _ => {}
        }

        match self.focus {
            PanelFocus::Input => self.handle_input_key(key),
            PanelFocus::Filters => self.handle_filters_key(key),
            PanelFocus::Tasks => self.handle_tasks_key(key),
        }
    }

    /// Handle a mouse event already resolved to the element under the
    /// pointer.
    pub fn handle_mouse_event(&mut self, kind: MouseEventKind, hit: Option<Hit>) {
        if self.notice.is_some() {
            if kind == MouseEventKind::Down(MouseButton::Left) {
                self.acknowledge_notice();
            }
            return;
        }

        match kind {
            // Drag indices refer to the current view, so a press while a
            // drag is live only cancels it.
            MouseEventKind::Down(MouseButton::Left) if self.drag.is_some() => self.end_drag(),
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(hit),
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(row) = hit.and_then(Hit::row) {
                    self.drag_over(row);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.drag.is_some() {
                    match hit.and_then(Hit::row) {
                        Some(row) => self.drop_on(row),
                        None => self.end_drag(),
                    }
                }
            }
            MouseEventKind::ScrollUp => self.select_prev(),
            MouseEventKind::ScrollDown => self.select_next(),
            _ => {}
        }
    }

    fn handle_click(&mut self, hit: Option<Hit>) {
        let Some(hit) = hit else {
            return;
        };
        match hit {
            Hit::Input => self.focus = PanelFocus::Input,
            Hit::Filter(filter) => {
                self.focus = PanelFocus::Filters;
                self.set_filter(filter);
            }
            Hit::Toggle(row) => {
                self.focus = PanelFocus::Tasks;
                self.selected = row;
                self.toggle_row(row);
            }
            Hit::Delete(row) => {
                self.focus = PanelFocus::Tasks;
                self.delete_row(row);
            }
            Hit::Row(row) => {
                self.focus = PanelFocus::Tasks;
                self.begin_drag(row);
            }
            Hit::ClearCompleted => self.clear_completed(),
        }
    }

    /// Handle key event when input is focused.
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.enter_char(c);
            }
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Delete => self.delete_char_forward(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.input.chars().count(),
            _ => {}
        }
    }

    /// Handle key event when the filter selector is focused.
    fn handle_filters_key(&mut self, key: KeyEvent) {
        let current = self.store.filter();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.set_filter(current.prev()),
            KeyCode::Right | KeyCode::Char('l') => self.set_filter(current.next()),
            KeyCode::Char('1') => self.set_filter(Filter::All),
            KeyCode::Char('2') => self.set_filter(Filter::Active),
            KeyCode::Char('3') => self.set_filter(Filter::Completed),
            _ => {}
        }
    }

    /// Handle key event when the task list is focused.
    fn handle_tasks_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter | KeyCode::Char(' ' | 'x') => self.toggle_row(self.selected),
            KeyCode::Delete | KeyCode::Char('d') => self.delete_row(self.selected),
            KeyCode::Char('c') => self.clear_completed(),
            KeyCode::Char('m') => self.begin_drag(self.selected),
            _ => {}
        }
    }

    /// Handle key event while a drag is in progress.
    fn handle_drag_key(&mut self, key: KeyEvent) {
        let Some(drag) = self.drag else {
            return;
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.drag_over(drag.target.saturating_sub(1)),
            KeyCode::Down | KeyCode::Char('j') => self.drag_over(drag.target + 1),
            KeyCode::Enter | KeyCode::Char('m' | ' ') => self.drop_on(drag.target),
            KeyCode::Esc => self.end_drag(),
            _ => {}
        }
    }

    /// Cycle focus forward: Input -> Filters -> Tasks -> Input.
    const fn cycle_focus_forward(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::Filters,
            PanelFocus::Filters => PanelFocus::Tasks,
            PanelFocus::Tasks => PanelFocus::Input,
        };
    }

    /// Cycle focus backward: Input -> Tasks -> Filters -> Input.
    const fn cycle_focus_backward(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::Tasks,
            PanelFocus::Tasks => PanelFocus::Filters,
            PanelFocus::Filters => PanelFocus::Input,
        };
    }

    /// Submit the current input as a new task.
    ///
    /// Blank input raises a notice and leaves both the store and the input
    /// untouched.
    pub fn submit_input(&mut self) {
        match self.store.add(&self.input) {
            Ok(id) => {
                tracing::debug!(%id, "task added");
                self.input.clear();
                self.cursor_position = 0;
            }
            Err(e) => {
                tracing::info!(error = %e, "rejected task submission");
                self.notice = Some(e.to_string());
            }
        }
    }

    /// Dismiss the current notice.
    pub fn acknowledge_notice(&mut self) {
        self.notice = None;
    }

    /// Switch the visible filter.
    pub fn set_filter(&mut self, filter: Filter) {
        if filter != self.store.filter() {
            tracing::debug!(%filter, "filter changed");
            self.end_drag();
        }
        self.store.set_filter(filter);
        self.clamp_selection();
    }

    /// Toggle completion of the task at visible row `row`.
    pub fn toggle_row(&mut self, row: usize) {
        if let Some(id) = self.visible_id(row)
            && self.store.toggle(id)
        {
            tracing::debug!(%id, "task toggled");
            self.clamp_selection();
        }
    }

    /// Delete the task at visible row `row`.
    pub fn delete_row(&mut self, row: usize) {
        if let Some(id) = self.visible_id(row)
            && self.store.delete(id).is_some()
        {
            tracing::debug!(%id, "task deleted");
            self.clamp_selection();
        }
    }

    /// Remove every completed task.
    pub fn clear_completed(&mut self) {
        let removed = self.store.clear_completed();
        if removed > 0 {
            tracing::debug!(removed, "cleared completed tasks");
        }
        self.clamp_selection();
    }

    /// Start dragging visible row `row`. Ignored if the row does not exist.
    pub fn begin_drag(&mut self, row: usize) {
        if row < self.visible_len() {
            self.selected = row;
            self.drag = Some(Drag {
                source: row,
                target: row,
            });
        }
    }

    /// Mark visible row `row` as the drop target, clamped to the list.
    pub fn drag_over(&mut self, row: usize) {
        let last = self.visible_len().saturating_sub(1);
        if let Some(drag) = self.drag.as_mut() {
            drag.target = row.min(last);
        }
    }

    /// Drop the dragged row onto visible row `row` and end the drag.
    pub fn drop_on(&mut self, row: usize) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        if self.store.reorder(drag.source, row) {
            tracing::debug!(from = drag.source, to = row, "task reordered");
            self.selected = row;
        }
        self.clamp_selection();
    }

    /// Abandon the current drag without reordering.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    const fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.visible_len() {
            self.selected += 1;
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.visible_len().saturating_sub(1));
    }

    /// Byte offset in `input` of the character at `cursor_position`.
    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_position)
            .map_or(self.input.len(), |(i, _)| i)
    }

    /// Insert a character at the cursor position.
    fn enter_char(&mut self, c: char) {
        let idx = self.byte_index();
        self.input.insert(idx, c);
        self.cursor_position += 1;
    }

    /// Delete the character before the cursor.
    fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let idx = self.byte_index();
            self.input.remove(idx);
        }
    }

    /// Delete the character under the cursor.
    fn delete_char_forward(&mut self) {
        let idx = self.byte_index();
        if idx < self.input.len() {
            self.input.remove(idx);
        }
    }

    /// Move cursor left.
    const fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    /// Move cursor right.
    fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(TodoStore::with_demo_tasks())
    }
}
