//! Complete-all command.

use crate::domain::foundation::ListId;
use crate::domain::session::TodoSession;
use crate::domain::todo::TodoError;

/// Command to mark every todo in a list completed.
#[derive(Debug, Clone)]
pub struct CompleteAllCommand {
    pub list_id: ListId,
}

/// Result of a successful complete-all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteAllResult {
    pub list_id: ListId,
    pub todo_count: usize,
}

/// Marks every todo in the list completed.
///
/// # Errors
///
/// - `ListNotFound` if the list does not exist
pub fn complete_all(
    session: &mut TodoSession,
    cmd: CompleteAllCommand,
) -> Result<CompleteAllResult, TodoError> {
    let list = session.load_list_mut(cmd.list_id)?;
    list.complete_all();
    let todo_count = list.todos().len();

    tracing::debug!(list_id = %cmd.list_id, todo_count, "all todos completed");
    Ok(CompleteAllResult {
        list_id: cmd.list_id,
        todo_count,
    })
}
