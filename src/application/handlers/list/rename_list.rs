//! Rename list command.

use crate::domain::foundation::ListId;
use crate::domain::session::TodoSession;
use crate::domain::todo::{validate_list_name, TodoError};

/// Command to rename a list.
#[derive(Debug, Clone)]
pub struct RenameListCommand {
    pub list_id: ListId,
    pub new_name: String,
}

/// Result of a successful rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameListResult {
    pub list_id: ListId,
    pub old_name: String,
}

/// Renames a list after validating the new name.
///
/// The uniqueness check covers the list being renamed, so submitting its
/// current name fails with `DuplicateName`.
///
/// # Errors
///
/// - `ListNotFound` if the list does not exist
/// - `InvalidLength` if the trimmed name is not 1-100 characters
/// - `DuplicateName` if any list (this one included) has that name
pub fn rename_list(
    session: &mut TodoSession,
    cmd: RenameListCommand,
) -> Result<RenameListResult, TodoError> {
    session.load_list(cmd.list_id)?;

    let new_name = cmd.new_name.trim();
    validate_list_name(new_name, session.lists())?;

    let list = session.load_list_mut(cmd.list_id)?;
    let old_name = list.set_name(new_name.to_string());

    tracing::debug!(list_id = %cmd.list_id, %old_name, "list renamed");
    Ok(RenameListResult {
        list_id: cmd.list_id,
        old_name,
    })
}
