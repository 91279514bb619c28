//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `session` - Session cookie middleware and extractors

pub mod session;

pub use session::{
    session_middleware, CurrentSession, RequestMode, ResolvedSession, SessionCookie,
    SessionRejection, SessionState, REQUESTED_WITH_HEADER, XML_HTTP_REQUEST,
};
