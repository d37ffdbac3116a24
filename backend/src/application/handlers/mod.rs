//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod participant;
pub mod session;

pub use participant::{GetParticipantHandler, GetParticipantQuery, ListCoachesHandler};
pub use session::{
    BookSessionCommand, BookSessionHandler, CreateBookingCommand, CreateBookingHandler,
    GetScheduleHandler, GetScheduleQuery, GetSessionHandler, GetSessionQuery,
    ListSessionsHandler, ListSessionsQuery,
};
