//! To-do domain module.
//!
//! Lists, todos, the name rules that guard them, id assignment and the
//! display ordering used by every view.

mod errors;
mod list;
mod ordering;
mod validation;

pub use errors::{NameField, TodoError};
pub use list::{next_id, Todo, TodoList};
pub use ordering::{sort_lists, sort_todos};
pub use validation::{validate_list_name, validate_todo_name, MAX_NAME_LENGTH, MIN_NAME_LENGTH};
