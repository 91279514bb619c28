//! Name validation rules for lists and todos.

use super::errors::TodoError;
use super::list::TodoList;

/// Minimum length for list and todo names, in characters.
pub const MIN_NAME_LENGTH: usize = 1;

/// Maximum length for list and todo names, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

fn has_valid_length(name: &str) -> bool {
    (MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&name.chars().count())
}

/// Validates a list name against length rules and sibling uniqueness.
///
/// Uniqueness is checked against every list passed in, including the one
/// being renamed. Renaming a list to its current name is rejected.
///
/// # Errors
///
/// - `InvalidLength` if the name is not 1-100 characters
/// - `DuplicateName` if any existing list has exactly this name
pub fn validate_list_name(name: &str, existing: &[TodoList]) -> Result<(), TodoError> {
    if !has_valid_length(name) {
        return Err(TodoError::invalid_list_name());
    }
    if existing.iter().any(|list| list.name() == name) {
        return Err(TodoError::DuplicateName);
    }
    Ok(())
}

/// Validates a todo name.
///
/// # Errors
///
/// - `InvalidLength` if the name is not 1-100 characters
pub fn validate_todo_name(name: &str) -> Result<(), TodoError> {
    if has_valid_length(name) {
        Ok(())
    } else {
        Err(TodoError::invalid_todo_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ListId;
    use proptest::prelude::*;

    fn lists(names: &[&str]) -> Vec<TodoList> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| TodoList::new(ListId::new(i as u32 + 1), *name))
            .collect()
    }

    #[test]
    fn accepts_boundary_lengths() {
        assert!(validate_list_name("a", &[]).is_ok());
        assert!(validate_list_name(&"a".repeat(100), &[]).is_ok());
        assert!(validate_todo_name(&"a".repeat(100)).is_ok());
    }

    #[test]
    fn rejects_empty_and_overlong_names() {
        assert_eq!(
            validate_list_name("", &[]),
            Err(TodoError::invalid_list_name())
        );
        assert_eq!(
            validate_todo_name(&"a".repeat(101)),
            Err(TodoError::invalid_todo_name())
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        let name = "é".repeat(100);
        assert!(name.len() > 100);
        assert!(validate_todo_name(&name).is_ok());
    }

    #[test]
    fn rejects_exact_duplicate() {
        let existing = lists(&["Groceries", "Work"]);
        assert_eq!(
            validate_list_name("Work", &existing),
            Err(TodoError::DuplicateName)
        );
    }

    #[test]
    fn duplicate_check_is_case_sensitive() {
        let existing = lists(&["Groceries"]);
        assert!(validate_list_name("groceries", &existing).is_ok());
    }

    #[test]
    fn length_is_checked_before_uniqueness() {
        let existing = lists(&["Groceries"]);
        assert_eq!(
            validate_list_name("", &existing),
            Err(TodoError::invalid_list_name())
        );
    }

    proptest! {
        #[test]
        fn overlong_names_always_rejected(name in "[a-z]{101,300}") {
            prop_assert!(validate_list_name(&name, &[]).is_err());
            prop_assert!(validate_todo_name(&name).is_err());
        }

        #[test]
        fn in_range_names_accepted_when_unique(name in "[a-zA-Z0-9 ]{1,100}") {
            prop_assert!(validate_list_name(&name, &[]).is_ok());
            prop_assert!(validate_todo_name(&name).is_ok());
        }

        #[test]
        fn existing_name_always_duplicate(name in "[a-z]{1,100}") {
            let existing = vec![TodoList::new(ListId::new(1), name.clone())];
            prop_assert_eq!(
                validate_list_name(&name, &existing),
                Err(TodoError::DuplicateName)
            );
        }
    }
}
