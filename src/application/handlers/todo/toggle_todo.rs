//! Toggle todo command.

use crate::domain::foundation::{ListId, TodoId};
use crate::domain::session::TodoSession;
use crate::domain::todo::TodoError;

/// Command to set a todo's completion flag.
#[derive(Debug, Clone)]
pub struct ToggleTodoCommand {
    pub list_id: ListId,
    pub todo_id: TodoId,
    pub completed: bool,
}

/// Result of a successful toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleTodoResult {
    pub list_id: ListId,
    pub todo_id: TodoId,
    pub completed: bool,
}

/// Sets `completed` on one todo to the supplied value.
///
/// # Errors
///
/// - `ListNotFound` if the list does not exist
/// - `TodoNotFound` if the list has no todo with that id
pub fn toggle_todo(
    session: &mut TodoSession,
    cmd: ToggleTodoCommand,
) -> Result<ToggleTodoResult, TodoError> {
    let todo = session.load_list_mut(cmd.list_id)?.todo_mut(cmd.todo_id)?;
    todo.set_completed(cmd.completed);

    tracing::debug!(
        list_id = %cmd.list_id,
        todo_id = %cmd.todo_id,
        completed = cmd.completed,
        "todo toggled"
    );
    Ok(ToggleTodoResult {
        list_id: cmd.list_id,
        todo_id: cmd.todo_id,
        completed: cmd.completed,
    })
}
