//! To-do domain error types.

use thiserror::Error;

use crate::domain::foundation::{ListId, TodoId};

/// Which kind of name failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    List,
    Todo,
}

/// Errors raised by list and todo operations.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("{}", invalid_length_message(.field))]
    InvalidLength { field: NameField },

    #[error("List name must be unique.")]
    DuplicateName,

    #[error("The list was not found.")]
    ListNotFound(ListId),

    #[error("The todo was not found.")]
    TodoNotFound(TodoId),
}

impl TodoError {
    pub fn invalid_list_name() -> Self {
        TodoError::InvalidLength {
            field: NameField::List,
        }
    }

    pub fn invalid_todo_name() -> Self {
        TodoError::InvalidLength {
            field: NameField::Todo,
        }
    }

    /// True for errors caused by user input rather than a missing entity.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TodoError::InvalidLength { .. } | TodoError::DuplicateName
        )
    }
}

fn invalid_length_message(field: &NameField) -> &'static str {
    match field {
        NameField::List => "List name must be between 1 and 100 characters.",
        NameField::Todo => "Todo must be between 1 and 100 characters.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_length_message_depends_on_field() {
        assert_eq!(
            TodoError::invalid_list_name().to_string(),
            "List name must be between 1 and 100 characters."
        );
        assert_eq!(
            TodoError::invalid_todo_name().to_string(),
            "Todo must be between 1 and 100 characters."
        );
    }

    #[test]
    fn not_found_messages_are_user_facing() {
        assert_eq!(
            TodoError::ListNotFound(ListId::new(3)).to_string(),
            "The list was not found."
        );
        assert_eq!(
            TodoError::TodoNotFound(TodoId::new(3)).to_string(),
            "The todo was not found."
        );
    }

    #[test]
    fn only_input_errors_count_as_validation() {
        assert!(TodoError::DuplicateName.is_validation());
        assert!(TodoError::invalid_todo_name().is_validation());
        assert!(!TodoError::ListNotFound(ListId::new(1)).is_validation());
    }
}
