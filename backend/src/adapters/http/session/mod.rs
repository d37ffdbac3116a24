//! HTTP adapter for session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    BookSessionRequest, CounterpartResponse, ScheduleParams, ScheduleResponse,
    SessionCardResponse, SessionListParams, SessionListResponse, SessionResponse,
};
pub use handlers::SessionHandlers;
pub use routes::session_routes;
