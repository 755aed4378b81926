pub mod edit_dialog;
pub mod todo_pane;

pub use edit_dialog::{DialogOutcome, EditDialog};
pub use todo_pane::TodoPane;
