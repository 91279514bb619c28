//! Todo command handlers.

mod add_todo;
mod complete_all;
mod delete_todo;
mod toggle_todo;

pub use add_todo::{add_todo, AddTodoCommand, AddTodoResult};
pub use complete_all::{complete_all, CompleteAllCommand, CompleteAllResult};
pub use delete_todo::{delete_todo, DeleteTodoCommand, DeleteTodoResult};
pub use toggle_todo::{toggle_todo, ToggleTodoCommand, ToggleTodoResult};
