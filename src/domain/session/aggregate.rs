//! Per-browser session state.
//!
//! A `TodoSession` is the explicit context every command receives. It owns
//! the session's lists exclusively and carries the pending flash messages.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ListId;
use crate::domain::todo::{next_id, TodoError, TodoList};

use super::flash::{Flash, FlashKind};

/// State held for one browser session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoSession {
    lists: Vec<TodoList>,
    flash: Flash,
}

impl TodoSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lists
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the lists in insertion order.
    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    /// Id the next created list will receive.
    pub fn next_list_id(&self) -> ListId {
        ListId::new(next_id(self.lists.iter().map(|l| l.id().value())))
    }

    /// Finds a list by id.
    ///
    /// # Errors
    ///
    /// - `ListNotFound` if no list carries the id
    pub fn load_list(&self, id: ListId) -> Result<&TodoList, TodoError> {
        self.lists
            .iter()
            .find(|l| l.id() == id)
            .ok_or(TodoError::ListNotFound(id))
    }

    /// Finds a list by id for mutation.
    ///
    /// # Errors
    ///
    /// - `ListNotFound` if no list carries the id
    pub fn load_list_mut(&mut self, id: ListId) -> Result<&mut TodoList, TodoError> {
        self.lists
            .iter_mut()
            .find(|l| l.id() == id)
            .ok_or(TodoError::ListNotFound(id))
    }

    pub(crate) fn push_list(&mut self, list: TodoList) {
        self.lists.push(list);
    }

    /// Removes the list with the given id. Returns whether one was removed.
    pub(crate) fn remove_list(&mut self, id: ListId) -> bool {
        let before = self.lists.len();
        self.lists.retain(|l| l.id() != id);
        self.lists.len() != before
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Flash
    // ─────────────────────────────────────────────────────────────────────────

    pub fn flash(&self) -> &Flash {
        &self.flash
    }

    pub fn set_flash(&mut self, kind: FlashKind, message: impl Into<String>) {
        self.flash.set(kind, message);
    }

    /// Takes every pending message, leaving none behind.
    pub fn take_flash(&mut self) -> Flash {
        self.flash.drain()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    /// Renders over all lists, draining the flash before `render` runs.
    pub fn view_lists<T>(&mut self, render: impl FnOnce(&[TodoList], Flash) -> T) -> T {
        let flash = self.flash.drain();
        render(&self.lists, flash)
    }

    /// Renders one list, draining the flash before `render` runs.
    ///
    /// A missing list leaves the flash untouched so the caller can add its
    /// own error and redirect.
    ///
    /// # Errors
    ///
    /// - `ListNotFound` if no list carries the id
    pub fn view_list<T>(
        &mut self,
        id: ListId,
        render: impl FnOnce(&TodoList, Flash) -> T,
    ) -> Result<T, TodoError> {
        let list = self
            .lists
            .iter()
            .find(|l| l.id() == id)
            .ok_or(TodoError::ListNotFound(id))?;
        let flash = self.flash.drain();
        Ok(render(list, flash))
    }
}
