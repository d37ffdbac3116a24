//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands (bookings) write through the document store; queries read fresh.

pub mod handlers;

pub use handlers::{
    // Session handlers
    BookSessionCommand, BookSessionHandler,
    CreateBookingCommand, CreateBookingHandler,
    GetScheduleHandler, GetScheduleQuery,
    GetSessionHandler, GetSessionQuery,
    ListSessionsHandler, ListSessionsQuery,
    // Participant handlers
    GetParticipantHandler, GetParticipantQuery, ListCoachesHandler,
};
