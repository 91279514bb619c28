//! Session middleware and extractors for axum.
//!
//! This module provides:
//! - `session_middleware` - Layer that resolves the caller's session from a cookie
//! - `CurrentSession` - Extractor handing the session context to a handler
//! - `RequestMode` - Extractor telling full-page requests from script-driven ones
//!
//! # Architecture
//!
//! ```text
//! Request → session_middleware → SessionStore::get / create
//!                  ↓ injects ResolvedSession into extensions
//!           Handler → CurrentSession extractor → lock → &mut TodoSession
//!                  ↓
//! Response ← Set-Cookie appended when a new session was issued
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::SessionId;
use crate::ports::{SessionHandle, SessionStore, SessionStoreError};

/// Header set by script-driven callers.
pub const REQUESTED_WITH_HEADER: &str = "x-requested-with";

/// Marker value identifying a lightweight request.
pub const XML_HTTP_REQUEST: &str = "XMLHttpRequest";

/// Cookie attributes for the session id cookie.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    pub name: String,
    pub secure: bool,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>, secure: bool) -> Self {
        Self {
            name: name.into(),
            secure,
        }
    }

    /// Reads this cookie's value from the request headers.
    pub fn read<'a>(&self, headers: &'a HeaderMap) -> Option<&'a str> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == self.name)
            .map(|(_, value)| value.trim())
    }

    /// Builds the `Set-Cookie` header value issuing `id`.
    pub fn issue(&self, id: &SessionId) -> String {
        let mut cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", self.name, id);
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

/// Session middleware state.
#[derive(Clone)]
pub struct SessionState {
    pub store: Arc<dyn SessionStore>,
    pub cookie: SessionCookie,
}

impl SessionState {
    pub fn new(store: Arc<dyn SessionStore>, cookie: SessionCookie) -> Self {
        Self { store, cookie }
    }
}

/// Session resolved for the current request.
#[derive(Clone)]
pub struct ResolvedSession {
    pub id: SessionId,
    pub handle: SessionHandle,
}

/// Middleware that attaches a session to every request.
///
/// This middleware:
/// 1. Reads the session id from the configured cookie
/// 2. Looks the session up, ignoring unknown or expired ids
/// 3. Creates a fresh session when none was found
/// 4. Injects `ResolvedSession` into request extensions
/// 5. Issues the cookie on the response if the session is new
pub async fn session_middleware(
    State(state): State<SessionState>,
    mut request: Request,
    next: Next,
) -> Response {
    let presented = state
        .cookie
        .read(request.headers())
        .and_then(|value| value.parse::<SessionId>().ok());

    let (session, issued) = match resolve(&state, presented).await {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::error!("Session store unavailable: {}", e);
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "error": "Session storage unavailable",
                    "code": "SESSION_UNAVAILABLE"
                })),
            )
                .into_response();
        }
    };

    let id = session.id;
    request.extensions_mut().insert(session);
    let mut response = next.run(request).await;

    if issued {
        match HeaderValue::from_str(&state.cookie.issue(&id)) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => tracing::error!("Invalid session cookie header: {}", e),
        }
    }

    response
}

async fn resolve(
    state: &SessionState,
    presented: Option<SessionId>,
) -> Result<(ResolvedSession, bool), SessionStoreError> {
    if let Some(id) = presented {
        if let Some(handle) = state.store.get(&id).await? {
            return Ok((ResolvedSession { id, handle }, false));
        }
        tracing::debug!(session_id = %id, "unknown session cookie, issuing a new session");
    }

    let (id, handle) = state.store.create().await?;
    Ok((ResolvedSession { id, handle }, true))
}

/// Extractor for the current request's session context.
///
/// Requires `session_middleware` on the route. Lock the handle to obtain
/// the `&mut TodoSession` that commands operate on.
#[derive(Clone)]
pub struct CurrentSession(pub SessionHandle);

impl<S> axum::extract::FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = SessionRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<ResolvedSession>()
                .map(|session| CurrentSession(Arc::clone(&session.handle)))
                .ok_or(SessionRejection::MissingSession)
        })
    }
}

/// How the caller wants a mutation answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMode {
    /// Browser form post: redirect and set a flash message.
    Page,
    /// Script-driven call: bare status, no redirect, no flash.
    Lightweight,
}

impl RequestMode {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let lightweight = headers
            .get(REQUESTED_WITH_HEADER)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.eq_ignore_ascii_case(XML_HTTP_REQUEST));

        if lightweight {
            RequestMode::Lightweight
        } else {
            RequestMode::Page
        }
    }

    pub fn is_lightweight(&self) -> bool {
        *self == RequestMode::Lightweight
    }
}

impl<S> axum::extract::FromRequestParts<S> for RequestMode
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move { Ok(RequestMode::from_headers(&parts.headers)) })
    }
}

/// Rejection type for session extraction failures.
#[derive(Debug, Clone)]
pub enum SessionRejection {
    /// The route is not behind `session_middleware`.
    MissingSession,
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        let message = match self {
            SessionRejection::MissingSession => "Session not initialised",
        };
        tracing::error!("{}", message);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "error": message,
                "code": "SESSION_MISSING"
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemorySessionStore;
    use axum::{body::Body, routing::get, Router};
    use tower::ServiceExt;

    fn cookie() -> SessionCookie {
        SessionCookie::new("todo_session", false)
    }

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn reads_named_cookie_among_others() {
        let headers = headers_with_cookie("theme=dark; todo_session=abc ; lang=en");
        assert_eq!(cookie().read(&headers), Some("abc"));
    }

    #[test]
    fn missing_cookie_reads_none() {
        let headers = headers_with_cookie("theme=dark");
        assert_eq!(cookie().read(&headers), None);
        assert_eq!(cookie().read(&HeaderMap::new()), None);
    }

    #[test]
    fn issued_cookie_carries_attributes() {
        let id = SessionId::new();
        let value = cookie().issue(&id);
        assert!(value.starts_with(&format!("todo_session={}", id)));
        assert!(value.contains("HttpOnly"));
        assert!(!value.contains("Secure"));

        let secure = SessionCookie::new("todo_session", true).issue(&id);
        assert!(secure.ends_with("; Secure"));
    }

    #[test]
    fn request_mode_detects_marker_header() {
        let mut headers = HeaderMap::new();
        assert_eq!(RequestMode::from_headers(&headers), RequestMode::Page);

        headers.insert(REQUESTED_WITH_HEADER, HeaderValue::from_static("XMLHttpRequest"));
        assert!(RequestMode::from_headers(&headers).is_lightweight());
    }

    fn app(store: Arc<InMemorySessionStore>) -> Router {
        let state = SessionState::new(store, cookie());
        Router::new()
            .route("/", get(|CurrentSession(_): CurrentSession| async { "ok" }))
            .layer(axum::middleware::from_fn_with_state(state, session_middleware))
    }

    #[tokio::test]
    async fn first_request_issues_cookie() {
        let store = Arc::new(InMemorySessionStore::with_defaults());

        let response = app(store.clone())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(SET_COOKIE).is_some());
        assert_eq!(store.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn known_cookie_reuses_session() {
        let store = Arc::new(InMemorySessionStore::with_defaults());
        let (id, _) = store.create().await.unwrap();

        let response = app(store.clone())
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(COOKIE, format!("todo_session={}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.headers().get(SET_COOKIE).is_none());
        assert_eq!(store.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn garbage_cookie_gets_fresh_session() {
        let store = Arc::new(InMemorySessionStore::with_defaults());

        let response = app(store.clone())
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(COOKIE, "todo_session=not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.headers().get(SET_COOKIE).is_some());
    }

    #[tokio::test]
    async fn missing_middleware_is_server_error() {
        let app = Router::new().route("/", get(|CurrentSession(_): CurrentSession| async { "ok" }));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
