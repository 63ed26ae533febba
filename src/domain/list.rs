use crate::domain::{
    id::IdStrategy,
    task::{Task, TaskId},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Identifier of a list, unique within the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(u64);

impl ListId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw integer value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl FromStr for ListId {
    type Err = crate::error::TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| crate::error::TodoError::InvalidListId(s.to_string()))
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, ordered collection of tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: ListId,
    pub name: String,
    pub tasks: Vec<Task>,
    pub created_at: DateTime<Utc>,
    next_task_number: u64,
}

impl TodoList {
    /// Creates an empty list
    pub fn new(id: ListId, name: String) -> Self {
        Self {
            id,
            name,
            tasks: Vec::new(),
            created_at: Utc::now(),
            next_task_number: 1,
        }
    }

    /// Appends a new incomplete task and returns it
    pub fn add_task(&mut self, name: String, strategy: IdStrategy) -> &Task {
        let id = self.next_task_id(strategy);
        self.tasks.push(Task::new(id, name));
        &self.tasks[self.tasks.len() - 1]
    }

    /// Flips the completion flag of a task, returning the new value
    pub fn toggle_task(&mut self, id: TaskId) -> Option<bool> {
        self.get_task_mut(id).map(Task::toggle)
    }

    /// Removes a task, keeping the order of the others
    pub fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        Some(self.tasks.remove(index))
    }

    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn get_task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    /// Number of completed tasks
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    /// Fraction of completed tasks; an empty list counts as 0.0
    pub fn progress(&self) -> f64 {
        if self.tasks.is_empty() {
            0.0
        } else {
            (self.completed_count() as f64) / (self.tasks.len() as f64)
        }
    }

    fn next_task_id(&mut self, strategy: IdStrategy) -> TaskId {
        let tasks = &self.tasks;
        let raw = strategy.allocate(&mut self.next_task_number, |value| {
            tasks.iter().any(|task| task.id.value() == value)
        });
        TaskId::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groceries() -> TodoList {
        TodoList::new(ListId::new(1), "Groceries".to_string())
    }

    #[test]
    fn test_list_creation() {
        let list = groceries();

        assert_eq!(list.id.value(), 1);
        assert_eq!(list.name, "Groceries");
        assert!(list.tasks.is_empty());
    }

    #[test]
    fn test_add_task_assigns_sequential_ids() {
        let mut list = groceries();

        let first = list.add_task("Milk".to_string(), IdStrategy::Sequential).id;
        let second = list.add_task("Eggs".to_string(), IdStrategy::Sequential).id;

        assert_eq!(first, TaskId::new(1));
        assert_eq!(second, TaskId::new(2));
        assert_eq!(list.tasks[0].name, "Milk");
        assert_eq!(list.tasks[1].name, "Eggs");
    }

    #[test]
    fn test_task_ids_not_reused_after_removal() {
        let mut list = groceries();

        let first = list.add_task("Milk".to_string(), IdStrategy::Sequential).id;
        list.remove_task(first);
        let second = list.add_task("Eggs".to_string(), IdStrategy::Sequential).id;

        assert_ne!(first, second);
    }

    #[test]
    fn test_random_task_ids_are_unique() {
        let mut list = groceries();
        for i in 0..50 {
            list.add_task(format!("Item {}", i), IdStrategy::Random);
        }

        let mut ids: Vec<TaskId> = list.tasks.iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_toggle_task() {
        let mut list = groceries();
        let milk = list.add_task("Milk".to_string(), IdStrategy::Sequential).id;
        let eggs = list.add_task("Eggs".to_string(), IdStrategy::Sequential).id;

        assert_eq!(list.toggle_task(milk), Some(true));
        assert!(!list.get_task(eggs).unwrap().completed);

        assert_eq!(list.toggle_task(milk), Some(false));
        assert_eq!(list.toggle_task(TaskId::new(99)), None);
    }

    #[test]
    fn test_remove_task_keeps_order() {
        let mut list = groceries();
        list.add_task("A".to_string(), IdStrategy::Sequential);
        let b = list.add_task("B".to_string(), IdStrategy::Sequential).id;
        list.add_task("C".to_string(), IdStrategy::Sequential);

        let removed = list.remove_task(b).unwrap();
        assert_eq!(removed.name, "B");

        let names: Vec<&str> = list.tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);

        assert!(list.remove_task(b).is_none());
        assert_eq!(list.tasks.len(), 2);
    }

    #[test]
    fn test_progress() {
        let mut list = groceries();
        assert_eq!(list.progress(), 0.0);

        let milk = list.add_task("Milk".to_string(), IdStrategy::Sequential).id;
        list.add_task("Eggs".to_string(), IdStrategy::Sequential);
        list.toggle_task(milk);

        assert_eq!(list.completed_count(), 1);
        assert_eq!(list.progress(), 0.5);
    }

    #[test]
    fn test_list_id_parsing() {
        let id: ListId = "12".parse().unwrap();
        assert_eq!(id, ListId::new(12));
        assert_eq!(id.to_string(), "12");
        assert!("twelve".parse::<ListId>().is_err());
    }
}
