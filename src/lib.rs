//! # Todo Core
//!
//! In-memory state and mutation logic for a single-screen to-do list
//! application: named lists, each holding an ordered sequence of tasks, plus
//! the list currently open in the detail view.
//!
//! The crate has no dependency on a specific UI. A presentation layer owns a
//! [`ListStore`], calls its operations in response to user input and re-renders
//! from [`ListStore::lists`] / [`ListStore::selected_tasks`] or from the
//! snapshots published by [`ListStore::subscribe`].
//!
//! ```
//! use todo_core::{ListStore, ViewMode};
//!
//! let mut store = ListStore::new();
//! let groceries = store.create_list("Groceries").unwrap().id;
//!
//! store.select_list(groceries).unwrap();
//! let milk = store.create_task("Milk").unwrap().id;
//! assert_eq!(store.toggle_task(milk).unwrap(), Some(true));
//!
//! store.clear_selection();
//! assert_eq!(store.mode(), ViewMode::Browsing);
//! assert_eq!(store.lists()[0].completed_count(), 1);
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod store;

// Re-export commonly used types
pub use config::StoreConfig;
pub use domain::{IdStrategy, ListId, Task, TaskId, TodoList};
pub use error::{Result, TodoError};
pub use logging::init_logging;
pub use store::{ListStore, StoreEvent, StoreSnapshot, ViewMode};
