//! HTTP routes for list and todo endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    add_todo_handler, complete_all_handler, create_list_handler, delete_list_handler,
    delete_todo_handler, edit_list_form, new_list_form, rename_list_handler, root, show_list,
    show_lists, toggle_todo_handler,
};

/// Creates the router with every list and todo endpoint.
///
/// Expects `session_middleware` to be layered on top.
pub fn list_routes() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/lists", get(show_lists).post(create_list_handler))
        .route("/lists/new", get(new_list_form))
        .route("/lists/:id", get(show_list).post(rename_list_handler))
        .route("/lists/:id/edit", get(edit_list_form))
        .route("/lists/:id/destroy", post(delete_list_handler))
        .route("/lists/:id/todos", post(add_todo_handler))
        .route("/lists/:id/todos/check/all", post(complete_all_handler))
        .route("/lists/:id/todos/:todo_id", post(toggle_todo_handler))
        .route("/lists/:id/todos/:todo_id/destroy", post(delete_todo_handler))
}
