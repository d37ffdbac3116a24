//! Participant directory query handlers.

mod get_participant;
mod list_coaches;

pub use get_participant::{GetParticipantHandler, GetParticipantQuery};
pub use list_coaches::ListCoachesHandler;
