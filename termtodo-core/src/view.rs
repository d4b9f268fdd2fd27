//! Derived, non-stored views over the task list.

use crate::filter::Filter;
use crate::task::Task;

/// Aggregate counts over the full task list, independent of the filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of tasks.
    pub total: usize,
    /// Number of tasks not yet completed.
    pub active: usize,
    /// Number of completed tasks.
    pub completed: usize,
}

impl Stats {
    /// Counts `tasks`.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total: tasks.len(),
            active: tasks.len() - completed,
            completed,
        }
    }
}

/// Returns the tasks matching `filter`, in list order.
#[must_use]
pub fn filter_tasks(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    tasks.iter().filter(|t| filter.matches(t)).collect()
}

/// Snapshot of everything the screen needs from the store.
#[derive(Debug, Clone)]
pub struct View<'a> {
    /// Filter the snapshot was taken with.
    pub filter: Filter,
    /// Tasks passing the filter, in list order.
    pub tasks: Vec<&'a Task>,
    /// Counts over the whole list.
    pub stats: Stats,
}

impl<'a> View<'a> {
    /// Builds the view for `tasks` under `filter`.
    #[must_use]
    pub fn new(tasks: &'a [Task], filter: Filter) -> Self {
        Self {
            filter,
            tasks: filter_tasks(tasks, filter),
            stats: Stats::from_tasks(tasks),
        }
    }

    /// Returns `true` if no task passes the filter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Message shown in place of the list when it is empty.
    #[must_use]
    pub fn empty_message(&self) -> String {
        match self.filter {
            Filter::All => "No todos yet! Add one above.".to_string(),
            other => format!("No {other} todos."),
        }
    }

    /// Whether the clear-completed action should be offered.
    #[must_use]
    pub const fn can_clear_completed(&self) -> bool {
        self.stats.completed > 0
    }
}
