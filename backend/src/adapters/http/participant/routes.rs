//! HTTP routes for participant directory endpoints.

use axum::{routing::get, Router};

use super::handlers::{coach_names, get_coach, get_participant, list_coaches, ParticipantHandlers};

/// # Routes
/// - `GET /participants/:id` - Any user record
/// - `GET /coaches` - Coaches ordered by name
/// - `GET /coaches/names` - Coach id to name map
/// - `GET /coaches/:id` - A user holding the coach role
pub fn participant_routes(handlers: ParticipantHandlers) -> Router {
    Router::new()
        .route("/participants/:id", get(get_participant))
        .route("/coaches", get(list_coaches))
        .route("/coaches/names", get(coach_names))
        .route("/coaches/:id", get(get_coach))
        .with_state(handlers)
}
