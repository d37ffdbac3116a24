//! HTTP routes for session endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    book_session, get_schedule, get_session, list_participant_sessions, SessionHandlers,
};

/// Creates the session router with all endpoints.
///
/// # Routes
/// - `POST /sessions` - Book a session
/// - `GET /sessions/:id` - Get one session
/// - `GET /participants/:id/sessions` - Sessions in either role (`?sorted=true`)
/// - `GET /participants/:id/schedule` - Upcoming/past split (`?role=&as_of=`)
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/sessions", post(book_session))
        .route("/sessions/:id", get(get_session))
        .route("/participants/:id/sessions", get(list_participant_sessions))
        .route("/participants/:id/schedule", get(get_schedule))
        .with_state(handlers)
}
