//! HTTP adapter for list and todo endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    EditListView, FlashView, ListNameForm, ListSummaryResponse, ListView, ListsView,
    NewListView, TodoForm, TodoResponse, ToggleTodoForm,
};
pub use handlers::{
    ALL_COMPLETED, LIST_CREATED, LIST_DELETED, LIST_RENAMED, TODO_ADDED, TODO_DELETED,
    TODO_UPDATED,
};
pub use routes::list_routes;
