//! Delete todo command.

use crate::domain::foundation::{ListId, TodoId};
use crate::domain::session::TodoSession;
use crate::domain::todo::TodoError;

/// Command to delete a todo.
#[derive(Debug, Clone)]
pub struct DeleteTodoCommand {
    pub list_id: ListId,
    pub todo_id: TodoId,
}

/// Result of a delete. Deleting an unknown todo is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTodoResult {
    pub list_id: ListId,
    pub removed: bool,
}

/// Removes the todo with the given id from the list.
///
/// # Errors
///
/// - `ListNotFound` if the list does not exist
pub fn delete_todo(
    session: &mut TodoSession,
    cmd: DeleteTodoCommand,
) -> Result<DeleteTodoResult, TodoError> {
    let list = session.load_list_mut(cmd.list_id)?;
    let removed = list.remove_todo(cmd.todo_id);

    tracing::debug!(list_id = %cmd.list_id, todo_id = %cmd.todo_id, removed, "todo delete");
    Ok(DeleteTodoResult {
        list_id: cmd.list_id,
        removed,
    })
}
