//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the scheduling domain.

mod errors;
mod ids;
mod participant_role;
mod session_status;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{ParticipantId, SessionId};
pub use participant_role::ParticipantRole;
pub use session_status::SessionStatus;
pub use timestamp::Timestamp;
