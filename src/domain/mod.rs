pub mod id;
pub mod list;
pub mod task;

pub use id::IdStrategy;
pub use list::{ListId, TodoList};
pub use task::{Task, TaskId};
