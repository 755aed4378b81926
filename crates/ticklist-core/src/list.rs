use serde::{Deserialize, Serialize};

use crate::todo::{Todo, TodoStatus};

/// Ordered collection of todos, single-owner. Records keep their insertion
/// position across edits and status changes; removal shifts later records
/// down without touching their identity.
///
/// Mutations that name an absent id do nothing. The UI can only hand back
/// ids it was given, so the missing-id path is an invariant guard, not an
/// error condition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_todos(todos: Vec<Todo>) -> Self {
        Self { todos }
    }

    /// Appends the record at the end, preserving insertion order.
    pub fn add(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Replaces the matched record's status in place.
    pub fn set_status(&mut self, id: &str, status: TodoStatus) {
        if let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) {
            todo.status = status;
        }
    }

    /// Replaces the matched record's name in place.
    pub fn rename(&mut self, id: &str, name: &str) {
        if let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) {
            todo.name = name.to_string();
        }
    }

    /// Removes the matched record; later records shift down one slot.
    pub fn remove(&mut self, id: &str) {
        self.todos.retain(|t| t.id != id);
    }

    pub fn get(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// How many records are complete, for the title bar summary.
    pub fn complete_count(&self) -> usize {
        self.todos.iter().filter(|t| t.status.is_complete()).count()
    }
}
