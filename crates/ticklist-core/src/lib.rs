pub mod list;
pub mod todo;

pub use list::TodoList;
pub use todo::{Todo, TodoStatus};
