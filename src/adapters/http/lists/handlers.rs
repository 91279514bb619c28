//! HTTP handlers for list and todo endpoints.
//!
//! Every handler locks the caller's session once and passes the context to
//! an application command. Mutations answer with a `303 See Other` redirect
//! and a flash message; rejected input re-renders the originating view.

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};

use crate::adapters::http::middleware::{CurrentSession, RequestMode};
use crate::application::handlers::{
    add_todo, complete_all, create_list, delete_list, delete_todo, rename_list, toggle_todo,
    AddTodoCommand, CompleteAllCommand, CreateListCommand, DeleteListCommand, DeleteTodoCommand,
    RenameListCommand, ToggleTodoCommand,
};
use crate::domain::foundation::{ListId, TodoId};
use crate::domain::session::{FlashKind, TodoSession};
use crate::domain::todo::TodoError;

use super::dto::{
    EditListView, ListNameForm, ListView, ListsView, NewListView, TodoForm, ToggleTodoForm,
};

// ════════════════════════════════════════════════════════════════════════════
// Messages
// ════════════════════════════════════════════════════════════════════════════

pub const LIST_CREATED: &str = "The list has been created.";
pub const LIST_RENAMED: &str = "The list name has been edited.";
pub const LIST_DELETED: &str = "The list has been deleted.";
pub const TODO_ADDED: &str = "The todo has been added.";
pub const TODO_DELETED: &str = "The todo has been deleted.";
pub const TODO_UPDATED: &str = "The todo has been updated.";
pub const ALL_COMPLETED: &str = "All todos have been completed.";

const LISTS_PATH: &str = "/lists";

fn list_path(id: ListId) -> String {
    format!("{}/{}", LISTS_PATH, id)
}

/// A missing or unreadable form body counts as an empty submission.
fn form_or_default<T: Default>(form: Option<Form<T>>) -> T {
    form.map(|Form(form)| form).unwrap_or_default()
}

fn redirect_with(session: &mut TodoSession, kind: FlashKind, message: &str, to: &str) -> Response {
    session.set_flash(kind, message);
    Redirect::to(to).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Views
// ════════════════════════════════════════════════════════════════════════════

/// GET / - Redirect to the list index
pub async fn root() -> Redirect {
    Redirect::to(LISTS_PATH)
}

/// GET /lists - List index
pub async fn show_lists(CurrentSession(handle): CurrentSession) -> Response {
    let mut session = handle.lock().await;
    let view = session.view_lists(ListsView::new);
    (StatusCode::OK, Json(view)).into_response()
}

/// GET /lists/new - New list form
pub async fn new_list_form(CurrentSession(handle): CurrentSession) -> Response {
    let mut session = handle.lock().await;
    let view = NewListView::new("", session.take_flash());
    (StatusCode::OK, Json(view)).into_response()
}

/// GET /lists/:id - List detail
pub async fn show_list(
    CurrentSession(handle): CurrentSession,
    Path(id): Path<String>,
) -> Response {
    let mut session = handle.lock().await;
    render_list(&mut session, ListId::parse_lenient(&id), StatusCode::OK, None)
}

/// GET /lists/:id/edit - Edit list form
pub async fn edit_list_form(
    CurrentSession(handle): CurrentSession,
    Path(id): Path<String>,
) -> Response {
    let mut session = handle.lock().await;
    render_edit(&mut session, ListId::parse_lenient(&id), None, StatusCode::OK)
}

fn render_list(
    session: &mut TodoSession,
    list_id: ListId,
    status: StatusCode,
    submitted_todo: Option<String>,
) -> Response {
    let rendered = session.view_list(list_id, |list, flash| {
        let view = ListView::new(list, flash);
        match submitted_todo {
            Some(todo) => view.with_submitted_todo(todo),
            None => view,
        }
    });

    match rendered {
        Ok(view) => (status, Json(view)).into_response(),
        Err(e) => handle_todo_error(session, e, |_| Redirect::to(LISTS_PATH).into_response()),
    }
}

fn render_edit(
    session: &mut TodoSession,
    list_id: ListId,
    submitted_name: Option<String>,
    status: StatusCode,
) -> Response {
    let rendered = session.view_list(list_id, |list, flash| {
        let list_name = submitted_name.unwrap_or_else(|| list.name().to_string());
        EditListView::new(list, list_name, flash)
    });

    match rendered {
        Ok(view) => (status, Json(view)).into_response(),
        Err(e) => handle_todo_error(session, e, |_| Redirect::to(LISTS_PATH).into_response()),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// List mutations
// ════════════════════════════════════════════════════════════════════════════

/// POST /lists - Create a list
pub async fn create_list_handler(
    CurrentSession(handle): CurrentSession,
    form: Option<Form<ListNameForm>>,
) -> Response {
    let form = form_or_default(form);
    let mut session = handle.lock().await;
    let cmd = CreateListCommand {
        name: form.list_name.clone(),
    };

    match create_list(&mut session, cmd) {
        Ok(_) => redirect_with(&mut session, FlashKind::Success, LIST_CREATED, LISTS_PATH),
        Err(e) => handle_todo_error(&mut session, e, |session| {
            let view = NewListView::new(form.list_name, session.take_flash());
            (StatusCode::UNPROCESSABLE_ENTITY, Json(view)).into_response()
        }),
    }
}

/// POST /lists/:id - Rename a list
pub async fn rename_list_handler(
    CurrentSession(handle): CurrentSession,
    Path(id): Path<String>,
    form: Option<Form<ListNameForm>>,
) -> Response {
    let form = form_or_default(form);
    let mut session = handle.lock().await;
    let list_id = ListId::parse_lenient(&id);
    let cmd = RenameListCommand {
        list_id,
        new_name: form.list_name.clone(),
    };

    match rename_list(&mut session, cmd) {
        Ok(_) => redirect_with(&mut session, FlashKind::Success, LIST_RENAMED, &list_path(list_id)),
        Err(e) => handle_todo_error(&mut session, e, |session| {
            render_edit(
                session,
                list_id,
                Some(form.list_name),
                StatusCode::UNPROCESSABLE_ENTITY,
            )
        }),
    }
}

/// POST /lists/:id/destroy - Delete a list
pub async fn delete_list_handler(
    CurrentSession(handle): CurrentSession,
    mode: RequestMode,
    Path(id): Path<String>,
) -> Response {
    let mut session = handle.lock().await;
    let cmd = DeleteListCommand {
        list_id: ListId::parse_lenient(&id),
    };

    delete_list(&mut session, cmd);

    if mode.is_lightweight() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        redirect_with(&mut session, FlashKind::Delete, LIST_DELETED, LISTS_PATH)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Todo mutations
// ════════════════════════════════════════════════════════════════════════════

/// POST /lists/:id/todos - Add a todo
pub async fn add_todo_handler(
    CurrentSession(handle): CurrentSession,
    Path(id): Path<String>,
    form: Option<Form<TodoForm>>,
) -> Response {
    let form = form_or_default(form);
    let mut session = handle.lock().await;
    let list_id = ListId::parse_lenient(&id);
    let cmd = AddTodoCommand {
        list_id,
        name: form.todo.clone(),
    };

    match add_todo(&mut session, cmd) {
        Ok(_) => redirect_with(&mut session, FlashKind::Success, TODO_ADDED, &list_path(list_id)),
        Err(e) => handle_todo_error(&mut session, e, |session| {
            render_list(
                session,
                list_id,
                StatusCode::UNPROCESSABLE_ENTITY,
                Some(form.todo),
            )
        }),
    }
}

/// POST /lists/:id/todos/:todo_id/destroy - Delete a todo
pub async fn delete_todo_handler(
    CurrentSession(handle): CurrentSession,
    mode: RequestMode,
    Path((id, todo_id)): Path<(String, String)>,
) -> Response {
    let mut session = handle.lock().await;
    let list_id = ListId::parse_lenient(&id);
    let cmd = DeleteTodoCommand {
        list_id,
        todo_id: TodoId::parse_lenient(&todo_id),
    };

    match delete_todo(&mut session, cmd) {
        Ok(_) if mode.is_lightweight() => StatusCode::NO_CONTENT.into_response(),
        Ok(_) => redirect_with(&mut session, FlashKind::Success, TODO_DELETED, &list_path(list_id)),
        Err(e) if mode.is_lightweight() => {
            tracing::warn!(error = %e, "lightweight todo delete failed");
            StatusCode::NOT_FOUND.into_response()
        }
        Err(e) => handle_todo_error(&mut session, e, |_| Redirect::to(LISTS_PATH).into_response()),
    }
}

/// POST /lists/:id/todos/:todo_id - Set a todo's completion flag
pub async fn toggle_todo_handler(
    CurrentSession(handle): CurrentSession,
    Path((id, todo_id)): Path<(String, String)>,
    form: Option<Form<ToggleTodoForm>>,
) -> Response {
    let form = form_or_default(form);
    let mut session = handle.lock().await;
    let list_id = ListId::parse_lenient(&id);
    let cmd = ToggleTodoCommand {
        list_id,
        todo_id: TodoId::parse_lenient(&todo_id),
        completed: form.is_completed(),
    };

    match toggle_todo(&mut session, cmd) {
        Ok(_) => redirect_with(&mut session, FlashKind::Success, TODO_UPDATED, &list_path(list_id)),
        Err(e) => handle_todo_error(&mut session, e, |_| {
            Redirect::to(&list_path(list_id)).into_response()
        }),
    }
}

/// POST /lists/:id/todos/check/all - Complete every todo
pub async fn complete_all_handler(
    CurrentSession(handle): CurrentSession,
    Path(id): Path<String>,
) -> Response {
    let mut session = handle.lock().await;
    let list_id = ListId::parse_lenient(&id);

    match complete_all(&mut session, CompleteAllCommand { list_id }) {
        Ok(_) => redirect_with(&mut session, FlashKind::Success, ALL_COMPLETED, &list_path(list_id)),
        Err(e) => handle_todo_error(&mut session, e, |_| Redirect::to(LISTS_PATH).into_response()),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Records the error as a flash message and picks the response.
///
/// A missing list always redirects to the index. Anything else is answered
/// by `fallback`, which re-renders the originating view or redirects.
fn handle_todo_error(
    session: &mut TodoSession,
    error: TodoError,
    fallback: impl FnOnce(&mut TodoSession) -> Response,
) -> Response {
    session.set_flash(FlashKind::Error, error.to_string());

    match error {
        TodoError::ListNotFound(id) => {
            tracing::warn!(list_id = %id, "list not found");
            Redirect::to(LISTS_PATH).into_response()
        }
        TodoError::TodoNotFound(id) => {
            tracing::warn!(todo_id = %id, "todo not found");
            fallback(session)
        }
        TodoError::InvalidLength { .. } | TodoError::DuplicateName => {
            tracing::debug!(error = %error, "input rejected");
            fallback(session)
        }
    }
}
