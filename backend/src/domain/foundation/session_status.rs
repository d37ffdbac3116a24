//! SessionStatus enum for the lifecycle of a booked coaching session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a booked session.
///
/// Bookings are only ever written as `Upcoming`. `Completed` and `Cancelled`
/// exist so stored documents carrying them still decode, but nothing in this
/// crate moves a session into either state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Upcoming,
    Completed,
    Cancelled,
}

impl SessionStatus {
    /// Returns true once the session can no longer take place.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Completed | SessionStatus::Cancelled)
    }

    /// Validates a transition from this status to another.
    ///
    /// No transitions are implemented; every pair is rejected.
    pub fn can_transition_to(&self, _target: &SessionStatus) -> bool {
        false
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionStatus::Upcoming => "upcoming",
            SessionStatus::Completed => "completed",
            SessionStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", s)
    }
}
