//! HTTP adapter for the participant directory.

mod dto;
mod handlers;
mod routes;

pub use dto::{CoachListResponse, CoachNamesResponse, ParticipantResponse};
pub use handlers::ParticipantHandlers;
pub use routes::participant_routes;
