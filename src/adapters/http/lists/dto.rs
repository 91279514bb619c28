//! HTTP DTOs for list and todo endpoints.
//!
//! Request types mirror the HTML form fields. Response types are the view
//! state each page renders; they carry entity ids so that actions taken on a
//! sorted view still target the right list or todo.

use serde::{Deserialize, Serialize};

use crate::domain::session::{Flash, FlashKind};
use crate::domain::todo::{sort_lists, sort_todos, Todo, TodoList};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Form body for creating or renaming a list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListNameForm {
    #[serde(default)]
    pub list_name: String,
}

/// Form body for adding a todo.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoForm {
    #[serde(default)]
    pub todo: String,
}

/// Form body for toggling a todo.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToggleTodoForm {
    #[serde(default)]
    pub completed: Option<String>,
}

impl ToggleTodoForm {
    /// Only the literal string `"true"` marks the todo completed.
    pub fn is_completed(&self) -> bool {
        self.completed.as_deref() == Some("true")
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Flash messages drained for this render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<String>,
}

impl From<Flash> for FlashView {
    fn from(flash: Flash) -> Self {
        Self {
            success: flash.get(FlashKind::Success).map(str::to_string),
            error: flash.get(FlashKind::Error).map(str::to_string),
            delete: flash.into_message(FlashKind::Delete),
        }
    }
}

/// One row of the list index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSummaryResponse {
    pub id: u32,
    pub name: String,
    pub complete: bool,
    pub todos_total: usize,
    pub todos_completed: usize,
    pub todos_remaining: usize,
}

impl From<&TodoList> for ListSummaryResponse {
    fn from(list: &TodoList) -> Self {
        Self {
            id: list.id().value(),
            name: list.name().to_string(),
            complete: list.is_complete(),
            todos_total: list.todos().len(),
            todos_completed: list.completed_count(),
            todos_remaining: list.remaining_count(),
        }
    }
}

/// GET /lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListsView {
    pub lists: Vec<ListSummaryResponse>,
    pub flash: FlashView,
}

impl ListsView {
    /// Builds the index with incomplete lists first.
    pub fn new(lists: &[TodoList], flash: Flash) -> Self {
        Self {
            lists: sort_lists(lists)
                .into_iter()
                .map(|(list, _)| list.into())
                .collect(),
            flash: flash.into(),
        }
    }
}

/// One todo row of the list detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoResponse {
    pub id: u32,
    pub name: String,
    pub completed: bool,
}

impl From<&Todo> for TodoResponse {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id().value(),
            name: todo.name().to_string(),
            completed: todo.is_completed(),
        }
    }
}

/// GET /lists/:id
///
/// `todo` echoes a rejected add-todo submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListView {
    pub id: u32,
    pub name: String,
    pub complete: bool,
    pub todos_total: usize,
    pub todos_completed: usize,
    pub todos: Vec<TodoResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo: Option<String>,
    pub flash: FlashView,
}

impl ListView {
    /// Builds the detail view with completed todos last.
    pub fn new(list: &TodoList, flash: Flash) -> Self {
        Self {
            id: list.id().value(),
            name: list.name().to_string(),
            complete: list.is_complete(),
            todos_total: list.todos().len(),
            todos_completed: list.completed_count(),
            todos: sort_todos(list.todos())
                .into_iter()
                .map(|(todo, _)| todo.into())
                .collect(),
            todo: None,
            flash: flash.into(),
        }
    }

    pub fn with_submitted_todo(mut self, todo: impl Into<String>) -> Self {
        self.todo = Some(todo.into());
        self
    }
}

/// GET /lists/new
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewListView {
    pub list_name: String,
    pub flash: FlashView,
}

impl NewListView {
    pub fn new(list_name: impl Into<String>, flash: Flash) -> Self {
        Self {
            list_name: list_name.into(),
            flash: flash.into(),
        }
    }
}

/// GET /lists/:id/edit
///
/// `name` is the stored name; `list_name` is the form field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditListView {
    pub id: u32,
    pub name: String,
    pub list_name: String,
    pub flash: FlashView,
}

impl EditListView {
    pub fn new(list: &TodoList, list_name: impl Into<String>, flash: Flash) -> Self {
        Self {
            id: list.id().value(),
            name: list.name().to_string(),
            list_name: list_name.into(),
            flash: flash.into(),
        }
    }
}
