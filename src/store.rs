//! The in-memory list store.
//!
//! [`ListStore`] owns every list, the current selection and the id counters.
//! The selection is kept as a [`ListId`], so task mutations always act on the
//! canonical entry in `lists` and there is no second copy to keep in sync.
//!
//! Every successful mutation publishes a [`StoreSnapshot`] on a `watch`
//! channel. Rejected operations and no-ops publish nothing.

use crate::{
    config::StoreConfig,
    domain::{ListId, Task, TaskId, TodoList},
    error::{Result, TodoError},
};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// What the presentation layer is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "mode", content = "list_id")]
pub enum ViewMode {
    /// All lists
    Browsing,
    /// The tasks of one list
    Viewing(ListId),
}

/// The mutation that produced a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum StoreEvent {
    ListCreated { list_id: ListId },
    ListDeleted { list_id: ListId },
    ListSelected { list_id: ListId },
    SelectionCleared,
    TaskCreated { list_id: ListId, task_id: TaskId },
    TaskToggled { list_id: ListId, task_id: TaskId, completed: bool },
    TaskDeleted { list_id: ListId, task_id: TaskId },
}

/// Immutable copy of the store state handed to observers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Incremented once per published change
    pub revision: u64,
    pub lists: Vec<TodoList>,
    pub selection: Option<ListId>,
    pub last_event: Option<StoreEvent>,
}

impl StoreSnapshot {
    fn empty() -> Self {
        Self {
            revision: 0,
            lists: Vec::new(),
            selection: None,
            last_event: None,
        }
    }

    /// The selected list as it was when the snapshot was taken
    pub fn selected_list(&self) -> Option<&TodoList> {
        let id = self.selection?;
        self.lists.iter().find(|list| list.id == id)
    }
}

/// Owner of all lists and the current selection
pub struct ListStore {
    config: StoreConfig,
    lists: Vec<TodoList>,
    selection: Option<ListId>,
    next_list_number: u64,
    revision: u64,
    notifier: watch::Sender<StoreSnapshot>,
}

impl ListStore {
    /// Creates an empty store with the default configuration
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        let (notifier, _) = watch::channel(StoreSnapshot::empty());
        Self {
            config,
            lists: Vec::new(),
            selection: None,
            next_list_number: 1,
            revision: 0,
            notifier,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Subscribes to state changes.
    ///
    /// The receiver starts out holding the current state.
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.notifier.subscribe()
    }

    /// Copies the current state
    pub fn snapshot(&self) -> StoreSnapshot {
        self.notifier.borrow().clone()
    }

    /// Serializes the current state for a non-Rust presentation layer
    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&*self.notifier.borrow())?)
    }

    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    pub fn list(&self, id: ListId) -> Option<&TodoList> {
        self.lists.iter().find(|list| list.id == id)
    }

    pub fn selection(&self) -> Option<ListId> {
        self.selection
    }

    pub fn selected_list(&self) -> Option<&TodoList> {
        self.selection.and_then(|id| self.list(id))
    }

    /// Tasks of the open list; empty while browsing
    pub fn selected_tasks(&self) -> &[Task] {
        self.selected_list()
            .map(|list| list.tasks.as_slice())
            .unwrap_or(&[])
    }

    pub fn mode(&self) -> ViewMode {
        match self.selection {
            Some(id) => ViewMode::Viewing(id),
            None => ViewMode::Browsing,
        }
    }

    /// Creates a list with no tasks and appends it.
    ///
    /// The name is stored as entered. Names that are empty after trimming are
    /// rejected without changing state. Duplicate names are allowed.
    pub fn create_list(&mut self, name: &str) -> Result<&TodoList> {
        if name.trim().is_empty() {
            tracing::trace!("rejected empty list name");
            return Err(TodoError::EmptyListName);
        }

        let id = self.next_list_id();
        self.lists.push(TodoList::new(id, name.to_string()));
        tracing::debug!(list_id = %id, lists = self.lists.len(), "list created");
        self.publish(StoreEvent::ListCreated { list_id: id });

        Ok(&self.lists[self.lists.len() - 1])
    }

    /// Removes a list, keeping the order of the others.
    ///
    /// Deleting the open list also clears the selection. Unknown ids are a
    /// no-op and return `None`.
    pub fn delete_list(&mut self, id: ListId) -> Option<TodoList> {
        let Some(index) = self.lists.iter().position(|list| list.id == id) else {
            tracing::trace!(list_id = %id, "delete of unknown list ignored");
            return None;
        };

        let removed = self.lists.remove(index);
        if self.selection == Some(id) {
            self.selection = None;
        }
        tracing::debug!(
            list_id = %id,
            tasks = removed.tasks.len(),
            lists = self.lists.len(),
            "list deleted"
        );
        self.publish(StoreEvent::ListDeleted { list_id: id });

        Some(removed)
    }

    /// Opens a list
    pub fn select_list(&mut self, id: ListId) -> Result<&TodoList> {
        let Some(index) = self.lists.iter().position(|list| list.id == id) else {
            tracing::trace!(list_id = %id, "select of unknown list rejected");
            return Err(TodoError::ListNotFound(id));
        };

        self.selection = Some(id);
        tracing::debug!(list_id = %id, "list selected");
        self.publish(StoreEvent::ListSelected { list_id: id });

        Ok(&self.lists[index])
    }

    /// Returns to browsing all lists
    pub fn clear_selection(&mut self) {
        if self.selection.take().is_some() {
            tracing::debug!("selection cleared");
            self.publish(StoreEvent::SelectionCleared);
        }
    }

    /// Appends an incomplete task to the open list
    pub fn create_task(&mut self, name: &str) -> Result<&Task> {
        let strategy = self.config.id_strategy;
        let index = self.selected_index()?;
        if name.trim().is_empty() {
            tracing::trace!("rejected empty task name");
            return Err(TodoError::EmptyTaskName);
        }

        let list = &mut self.lists[index];
        let list_id = list.id;
        let task_id = list.add_task(name.to_string(), strategy).id;
        tracing::debug!(
            list_id = %list_id,
            task_id = %task_id,
            tasks = list.tasks.len(),
            "task created"
        );
        self.publish(StoreEvent::TaskCreated { list_id, task_id });

        let tasks = &self.lists[index].tasks;
        Ok(&tasks[tasks.len() - 1])
    }

    /// Flips the completion flag of a task in the open list.
    ///
    /// Returns the new flag, or `None` when the open list has no such task.
    pub fn toggle_task(&mut self, id: TaskId) -> Result<Option<bool>> {
        let index = self.selected_index()?;
        let list = &mut self.lists[index];
        let list_id = list.id;

        let Some(completed) = list.toggle_task(id) else {
            tracing::trace!(list_id = %list_id, task_id = %id, "toggle of unknown task ignored");
            return Ok(None);
        };

        tracing::debug!(list_id = %list_id, task_id = %id, completed, "task toggled");
        self.publish(StoreEvent::TaskToggled {
            list_id,
            task_id: id,
            completed,
        });

        Ok(Some(completed))
    }

    /// Removes a task from the open list.
    ///
    /// Returns the removed task, or `None` when the open list has no such task.
    pub fn delete_task(&mut self, id: TaskId) -> Result<Option<Task>> {
        let index = self.selected_index()?;
        let list = &mut self.lists[index];
        let list_id = list.id;

        let Some(removed) = list.remove_task(id) else {
            tracing::trace!(list_id = %list_id, task_id = %id, "delete of unknown task ignored");
            return Ok(None);
        };

        tracing::debug!(
            list_id = %list_id,
            task_id = %id,
            tasks = list.tasks.len(),
            "task deleted"
        );
        self.publish(StoreEvent::TaskDeleted {
            list_id,
            task_id: id,
        });

        Ok(Some(removed))
    }

    fn selected_index(&self) -> Result<usize> {
        let Some(id) = self.selection else {
            tracing::trace!("task operation without an open list rejected");
            return Err(TodoError::NoSelection);
        };
        // Unreachable while the selection invariant holds.
        self.lists
            .iter()
            .position(|list| list.id == id)
            .ok_or(TodoError::NoSelection)
    }

    fn next_list_id(&mut self) -> ListId {
        let lists = &self.lists;
        let raw = self
            .config
            .id_strategy
            .allocate(&mut self.next_list_number, |value| {
                lists.iter().any(|list| list.id.value() == value)
            });
        ListId::new(raw)
    }

    fn publish(&mut self, event: StoreEvent) {
        self.revision += 1;
        self.notifier.send_replace(StoreSnapshot {
            revision: self.revision,
            lists: self.lists.clone(),
            selection: self.selection,
            last_event: Some(event),
        });
    }
}

impl Default for ListStore {
    fn default() -> Self {
        Self::new()
    }
}
