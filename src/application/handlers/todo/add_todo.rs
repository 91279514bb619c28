//! Add todo command.

use crate::domain::foundation::{ListId, TodoId};
use crate::domain::session::TodoSession;
use crate::domain::todo::{validate_todo_name, TodoError};

/// Command to add a todo to a list.
#[derive(Debug, Clone)]
pub struct AddTodoCommand {
    pub list_id: ListId,
    pub name: String,
}

/// Result of a successful add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTodoResult {
    pub list_id: ListId,
    pub todo_id: TodoId,
}

/// Appends an incomplete todo to the list.
///
/// # Errors
///
/// - `ListNotFound` if the list does not exist
/// - `InvalidLength` if the trimmed name is not 1-100 characters
pub fn add_todo(session: &mut TodoSession, cmd: AddTodoCommand) -> Result<AddTodoResult, TodoError> {
    let list = session.load_list_mut(cmd.list_id)?;

    let name = cmd.name.trim();
    validate_todo_name(name)?;

    let todo_id = list.push_todo(name.to_string());

    tracing::debug!(list_id = %cmd.list_id, %todo_id, "todo added");
    Ok(AddTodoResult {
        list_id: cmd.list_id,
        todo_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::list::{create_list, CreateListCommand};

    fn session_with_list() -> TodoSession {
        let mut session = TodoSession::new();
        create_list(
            &mut session,
            CreateListCommand {
                name: "Groceries".to_string(),
            },
        )
        .unwrap();
        session
    }

    fn add(session: &mut TodoSession, list: u32, name: &str) -> Result<AddTodoResult, TodoError> {
        add_todo(
            session,
            AddTodoCommand {
                list_id: ListId::new(list),
                name: name.to_string(),
            },
        )
    }

    #[test]
    fn appends_incomplete_todos_with_sequential_ids() {
        let mut session = session_with_list();

        assert_eq!(add(&mut session, 1, "Milk").unwrap().todo_id, TodoId::new(1));
        assert_eq!(add(&mut session, 1, "Eggs").unwrap().todo_id, TodoId::new(2));

        let list = session.load_list(ListId::new(1)).unwrap();
        let names: Vec<&str> = list.todos().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["Milk", "Eggs"]);
        assert!(list.todos().iter().all(|t| !t.is_completed()));
    }

    #[test]
    fn unknown_list_is_not_found() {
        let mut session = session_with_list();
        assert_eq!(
            add(&mut session, 2, "Milk"),
            Err(TodoError::ListNotFound(ListId::new(2)))
        );
    }

    #[test]
    fn empty_name_rejected_before_mutation() {
        let mut session = session_with_list();
        assert_eq!(add(&mut session, 1, "  "), Err(TodoError::invalid_todo_name()));
        assert!(session.lists()[0].todos().is_empty());
    }

    #[test]
    fn duplicate_todo_names_are_allowed() {
        let mut session = session_with_list();
        add(&mut session, 1, "Milk").unwrap();
        assert!(add(&mut session, 1, "Milk").is_ok());
    }
}
