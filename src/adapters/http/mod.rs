//! HTTP adapters - axum router, middleware and endpoint handlers.

pub mod lists;
pub mod middleware;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::ports::SessionStore;

pub use lists::list_routes;
pub use middleware::{session_middleware, SessionCookie, SessionState};

/// Builds the full application router.
///
/// Layers, outermost first: request tracing, request timeout, session
/// resolution.
pub fn app_router(
    store: Arc<dyn SessionStore>,
    cookie: SessionCookie,
    request_timeout: Duration,
) -> Router {
    let session_state = SessionState::new(store, cookie);

    list_routes()
        .layer(axum::middleware::from_fn_with_state(
            session_state,
            session_middleware,
        ))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}
