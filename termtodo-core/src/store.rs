//! Task list store.
//!
//! `TodoStore` owns the ordered task list and the active [`Filter`] and is
//! the only thing that mutates tasks. Every operation either applies fully
//! or leaves the store untouched.

use std::collections::HashSet;

use crate::filter::Filter;
use crate::task::{Task, TaskId, demo_tasks};
use crate::view::{Stats, View, filter_tasks};

/// Errors raised by store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Submitted text was empty or whitespace only.
    #[error("Please enter a todo!")]
    EmptyText,
    /// Two tasks supplied to [`TodoStore::from_tasks`] share an id.
    #[error("duplicate task id: {0}")]
    DuplicateId(TaskId),
    /// Every id up to `u64::MAX` has been handed out.
    #[error("no task ids left")]
    IdsExhausted,
}

/// Ordered, in-memory task list with a view filter.
#[derive(Debug, Clone)]
pub struct TodoStore {
    tasks: Vec<Task>,
    filter: Filter,
    /// `None` once the id space is used up.
    next_id: Option<TaskId>,
}

impl TodoStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            filter: Filter::All,
            next_id: Some(TaskId::new(1)),
        }
    }

    /// Creates a store holding the demo tasks.
    #[must_use]
    pub fn with_demo_tasks() -> Self {
        let tasks = demo_tasks();
        let next_id = next_id_after(&tasks);
        Self {
            tasks,
            filter: Filter::All,
            next_id,
        }
    }

    /// Creates a store from existing tasks, keeping their order.
    ///
    /// Newly added tasks get ids greater than every id in `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if two tasks share an id.
    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            if !seen.insert(task.id) {
                return Err(StoreError::DuplicateId(task.id));
            }
        }
        let next_id = next_id_after(&tasks);
        Ok(Self {
            tasks,
            filter: Filter::All,
            next_id,
        })
    }

    /// All tasks in list order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The active filter.
    #[must_use]
    pub const fn filter(&self) -> Filter {
        self.filter
    }

    /// Number of tasks, ignoring the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Appends a new open task and returns its id.
    ///
    /// The text is stored as given; only the emptiness check trims it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyText`] if `text` is empty after trimming,
    /// or [`StoreError::IdsExhausted`] if no unused id remains.
    pub fn add(&mut self, text: &str) -> Result<TaskId, StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::EmptyText);
        }
        let id = self.next_id.ok_or(StoreError::IdsExhausted)?;
        self.next_id = id.next();
        self.tasks.push(Task::new(id, text));
        Ok(id)
    }

    /// Flips the completion flag of the task with `id`.
    ///
    /// Returns `false` (and changes nothing) if no such task exists.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Removes the task with `id`, returning it if it existed.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(pos))
    }

    /// Removes every completed task and returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(Task::is_active);
        before - self.tasks.len()
    }

    /// Moves a task within the filtered view.
    ///
    /// `from` and `to` are positions in the current filtered view. They are
    /// mapped to the tasks' positions in the full list before the move, so
    /// tasks hidden by the filter keep their relative order. Returns `false`
    /// if `from == to` or either index is outside the view.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if from == to {
            return false;
        }
        let positions = self.visible_positions();
        let (Some(&from_abs), Some(&to_abs)) = (positions.get(from), positions.get(to)) else {
            return false;
        };
        let task = self.tasks.remove(from_abs);
        self.tasks.insert(to_abs, task);
        true
    }

    /// Sets the active filter.
    pub const fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Tasks passing `filter`, in list order, regardless of the active filter.
    #[must_use]
    pub fn visible(&self, filter: Filter) -> Vec<&Task> {
        filter_tasks(&self.tasks, filter)
    }

    /// Tasks passing the active filter, in list order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Task> {
        self.visible(self.filter)
    }

    /// Counts over the full list.
    #[must_use]
    pub fn stats(&self) -> Stats {
        Stats::from_tasks(&self.tasks)
    }

    /// Filtered tasks and stats in one snapshot.
    #[must_use]
    pub fn view(&self) -> View<'_> {
        View::new(&self.tasks, self.filter)
    }

    /// Full-list positions of the tasks in the filtered view.
    fn visible_positions(&self) -> Vec<usize> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| self.filter.matches(t))
            .map(|(i, _)| i)
            .collect()
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

fn next_id_after(tasks: &[Task]) -> Option<TaskId> {
    tasks
        .iter()
        .map(|t| t.id)
        .max()
        .map_or(Some(TaskId::new(1)), TaskId::next)
}
