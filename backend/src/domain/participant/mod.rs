//! Participant domain module.
//!
//! Participants are the user records a session is booked between. The
//! scheduling core only reads them: display name and avatar are copied onto
//! a session at booking time, and the role decides whether a user can be
//! booked as a coach.

mod errors;
mod profile;

pub use errors::ParticipantError;
pub use profile::Participant;
