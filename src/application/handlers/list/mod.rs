//! List command handlers.

mod create_list;
mod delete_list;
mod rename_list;

pub use create_list::{create_list, CreateListCommand, CreateListResult};
pub use delete_list::{delete_list, DeleteListCommand, DeleteListResult};
pub use rename_list::{rename_list, RenameListCommand, RenameListResult};
