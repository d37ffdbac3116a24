//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure. [`app`]
//! wires them over one DocumentStore and applies the middleware stack.

pub mod error;
pub mod participant;
pub mod session;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use http::HeaderValue;
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::application::handlers::{
    BookSessionHandler, CreateBookingHandler, GetParticipantHandler, GetScheduleHandler,
    GetSessionHandler, ListCoachesHandler, ListSessionsHandler,
};
use crate::config::ServerConfig;
use crate::ports::DocumentStore;

pub use error::ErrorResponse;
pub use participant::{participant_routes, ParticipantHandlers};
pub use session::{session_routes, SessionHandlers};

/// All `/api` routes over a single store.
pub fn api_router(store: Arc<dyn DocumentStore>) -> Router {
    let participants = GetParticipantHandler::new(store.clone());
    let sessions = ListSessionsHandler::new(store.clone());

    let session_handlers = SessionHandlers::new(
        Arc::new(BookSessionHandler::new(
            participants.clone(),
            CreateBookingHandler::new(store.clone()),
        )),
        Arc::new(GetSessionHandler::new(store.clone())),
        Arc::new(sessions.clone()),
        Arc::new(GetScheduleHandler::new(sessions)),
    );
    let participant_handlers = ParticipantHandlers::new(
        Arc::new(participants),
        Arc::new(ListCoachesHandler::new(store)),
    );

    Router::new()
        .merge(session_routes(session_handlers))
        .merge(participant_routes(participant_handlers))
}

/// Full application: `/health`, `/api`, tracing, timeout, and CORS.
pub fn app(store: Arc<dyn DocumentStore>, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_router(store))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Configured origins, or any origin outside production when none are set.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if !origins.is_empty() {
        layer.allow_origin(AllowOrigin::list(origins))
    } else if server.is_production() {
        layer
    } else {
        layer.allow_origin(Any)
    }
}
