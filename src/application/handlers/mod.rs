//! Application handlers.
//!
//! Command functions that validate input and mutate the session context
//! passed to them. None of them touch HTTP or the session store.

pub mod list;
pub mod todo;

pub use list::{
    create_list, delete_list, rename_list, CreateListCommand, CreateListResult,
    DeleteListCommand, DeleteListResult, RenameListCommand, RenameListResult,
};
pub use todo::{
    add_todo, complete_all, delete_todo, toggle_todo, AddTodoCommand, AddTodoResult,
    CompleteAllCommand, CompleteAllResult, DeleteTodoCommand, DeleteTodoResult,
    ToggleTodoCommand, ToggleTodoResult,
};
