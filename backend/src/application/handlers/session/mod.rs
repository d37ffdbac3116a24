//! Session command and query handlers.

mod book_session;
mod create_booking;
mod get_schedule;
mod get_session;
mod list_sessions;

#[cfg(test)]
mod test_store;

pub use book_session::{BookSessionCommand, BookSessionHandler};
pub use create_booking::{CreateBookingCommand, CreateBookingHandler};
pub use get_schedule::{GetScheduleHandler, GetScheduleQuery};
pub use get_session::{GetSessionHandler, GetSessionQuery};
pub use list_sessions::{ListSessionsHandler, ListSessionsQuery};
