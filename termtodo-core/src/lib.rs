//! Task list store and derived views for `TermTodo`.

pub mod filter;
pub mod store;
pub mod task;
pub mod view;

pub use filter::{Filter, ParseFilterError};
pub use store::{StoreError, TodoStore};
pub use task::{Task, TaskId, demo_tasks};
pub use view::{Stats, View};
