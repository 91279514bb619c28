//! Delete list command.

use crate::domain::foundation::ListId;
use crate::domain::session::TodoSession;

/// Command to delete a list.
#[derive(Debug, Clone)]
pub struct DeleteListCommand {
    pub list_id: ListId,
}

/// Result of a delete. Deleting an unknown id is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteListResult {
    pub removed: bool,
}

/// Removes the list with the given id, if present.
pub fn delete_list(session: &mut TodoSession, cmd: DeleteListCommand) -> DeleteListResult {
    let removed = session.remove_list(cmd.list_id);
    if removed {
        tracing::debug!(list_id = %cmd.list_id, "list deleted");
    } else {
        tracing::debug!(list_id = %cmd.list_id, "delete of unknown list ignored");
    }
    DeleteListResult { removed }
}
