use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    Incomplete,
    Complete,
}

impl TodoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Incomplete => "incomplete",
            TodoStatus::Complete => "complete",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TodoStatus::Incomplete => "Incomplete",
            TodoStatus::Complete => "Complete",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "incomplete" => Some(TodoStatus::Incomplete),
            "complete" => Some(TodoStatus::Complete),
            _ => None,
        }
    }

    /// The checkbox flip: complete <-> incomplete.
    pub fn toggled(&self) -> Self {
        match self {
            TodoStatus::Incomplete => TodoStatus::Complete,
            TodoStatus::Complete => TodoStatus::Incomplete,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, TodoStatus::Complete)
    }
}

impl Default for TodoStatus {
    fn default() -> Self {
        TodoStatus::Incomplete
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A single list entry. The id is assigned at creation and never changes;
/// name and status are mutated in place through `TodoList`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub name: String,
    pub status: TodoStatus,
}

impl Todo {
    /// New record with a fresh uuid-v4 id, starting incomplete.
    /// The name is stored exactly as given; callers validate before this.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            status: TodoStatus::Incomplete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_todo_starts_incomplete_with_unique_id() {
        let a = Todo::new("gym");
        let b = Todo::new("gym");
        assert_eq!(a.status, TodoStatus::Incomplete);
        assert_eq!(a.name, "gym");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn new_todo_keeps_name_untrimmed() {
        let todo = Todo::new("  gym  ");
        assert_eq!(todo.name, "  gym  ");
    }

    #[test]
    fn toggled_flips_both_ways() {
        assert_eq!(TodoStatus::Incomplete.toggled(), TodoStatus::Complete);
        assert_eq!(TodoStatus::Complete.toggled(), TodoStatus::Incomplete);
    }

    #[test]
    fn status_round_trips_through_str() {
        for status in [TodoStatus::Incomplete, TodoStatus::Complete] {
            assert_eq!(TodoStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(TodoStatus::from_str("done"), None);
    }

    #[test]
    fn status_serializes_snake_case() {
        let todo = Todo {
            id: "a".into(),
            name: "gym".into(),
            status: TodoStatus::Incomplete,
        };
        let json = serde_json::to_string(&todo).unwrap();
        assert!(json.contains("\"status\":\"incomplete\""));
    }
}
