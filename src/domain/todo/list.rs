//! To-do list aggregate and its todo entities.
//!
//! Lists belong to exactly one session and own their todos. Both carry
//! integer ids assigned by [`next_id`] at insertion time.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ListId, TodoId};

use super::errors::TodoError;

/// Returns `max(ids) + 1`, or `1` for an empty collection.
///
/// Always computed from the live collection. Deleting the highest id and
/// inserting again therefore yields `remaining max + 1`.
pub fn next_id<I>(ids: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    ids.into_iter().max().map_or(1, |max| max.saturating_add(1))
}

/// A single checkable item within a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    name: String,
    completed: bool,
}

impl Todo {
    /// Creates an incomplete todo. The name must already be validated.
    pub fn new(id: TodoId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            completed: false,
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}

/// A named, ordered collection of todos.
///
/// # Invariants
///
/// - `name` is 1-100 characters
/// - todo ids are unique within the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    id: ListId,
    name: String,
    todos: Vec<Todo>,
}

impl TodoList {
    /// Creates an empty list. The name must already be validated.
    pub fn new(id: ListId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            todos: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> ListId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Number of completed todos.
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.is_completed()).count()
    }

    /// Number of todos still open.
    pub fn remaining_count(&self) -> usize {
        self.todos.len() - self.completed_count()
    }

    /// A list is complete when it has at least one todo and all are done.
    pub fn is_complete(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(Todo::is_completed)
    }

    /// Id the next added todo will receive.
    pub fn next_todo_id(&self) -> TodoId {
        TodoId::new(next_id(self.todos.iter().map(|t| t.id().value())))
    }

    /// Finds a todo by id.
    ///
    /// # Errors
    ///
    /// - `TodoNotFound` if no todo carries the id
    pub fn todo_mut(&mut self, id: TodoId) -> Result<&mut Todo, TodoError> {
        self.todos
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or(TodoError::TodoNotFound(id))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    pub(crate) fn set_name(&mut self, name: String) -> String {
        std::mem::replace(&mut self.name, name)
    }

    /// Appends a new incomplete todo and returns its id.
    pub(crate) fn push_todo(&mut self, name: String) -> TodoId {
        let id = self.next_todo_id();
        self.todos.push(Todo::new(id, name));
        id
    }

    /// Removes the todo with the given id. Returns whether one was removed.
    pub(crate) fn remove_todo(&mut self, id: TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id() != id);
        self.todos.len() != before
    }

    /// Marks every todo completed.
    pub(crate) fn complete_all(&mut self) {
        for todo in &mut self.todos {
            todo.set_completed(true);
        }
    }
}
