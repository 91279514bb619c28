//! Create list command.

use crate::domain::foundation::ListId;
use crate::domain::session::TodoSession;
use crate::domain::todo::{validate_list_name, TodoError, TodoList};

/// Command to create a new list.
#[derive(Debug, Clone)]
pub struct CreateListCommand {
    pub name: String,
}

/// Result of successful list creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateListResult {
    pub list_id: ListId,
}

/// Validates the name and appends an empty list to the session.
///
/// # Errors
///
/// - `InvalidLength` if the trimmed name is not 1-100 characters
/// - `DuplicateName` if a list with that name exists
pub fn create_list(
    session: &mut TodoSession,
    cmd: CreateListCommand,
) -> Result<CreateListResult, TodoError> {
    let name = cmd.name.trim();
    validate_list_name(name, session.lists())?;

    let list_id = session.next_list_id();
    session.push_list(TodoList::new(list_id, name));

    tracing::debug!(%list_id, "list created");
    Ok(CreateListResult { list_id })
}
