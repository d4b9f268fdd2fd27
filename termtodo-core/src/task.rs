//! Task model for `TermTodo`.
//!
//! A [`Task`] is a single line of text with a completion flag. Identifiers
//! are handed out by the owning [`TodoStore`](crate::TodoStore) from a
//! monotonic counter, so two tasks created back to back never collide.

use serde::{Deserialize, Serialize};

/// Unique identifier for a task within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a `TaskId` from a raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the identifier that follows this one, or `None` at `u64::MAX`.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier.
    pub id: TaskId,
    /// Task text, exactly as entered.
    pub text: String,
    /// Whether the task has been completed.
    pub completed: bool,
    /// Free-text annotation (e.g. "3 hours left"). Purely decorative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl Task {
    /// Creates an open task with no annotation.
    #[must_use]
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            time: None,
        }
    }

    /// Marks the task completed.
    #[must_use]
    pub const fn completed(mut self) -> Self {
        self.completed = true;
        self
    }

    /// Attaches a time annotation.
    #[must_use]
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Returns `true` if the task is still open.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.completed
    }
}

/// The six tasks a fresh session starts with.
#[must_use]
pub fn demo_tasks() -> Vec<Task> {
    vec![
        Task::new(TaskId::new(1), "Complete online JavaScript course")
            .completed()
            .with_time("3 hours left"),
        Task::new(TaskId::new(2), "Jog around the park 3x"),
        Task::new(TaskId::new(3), "10 minutes meditation"),
        Task::new(TaskId::new(4), "Read for 1 hour"),
        Task::new(TaskId::new(5), "Pick up groceries"),
        Task::new(TaskId::new(6), "Complete Todo App on Frontend Mentor"),
    ]
}
