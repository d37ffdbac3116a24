//! Session domain module.
//!
//! Handles coaching session booking and the derived schedule state:
//! temporal classification, the student/coach merge, and role-aware
//! display projections.
//!
//! # Lifecycle
//!
//! Sessions are created `Upcoming` and never mutated here. `Completed` and
//! `Cancelled` are valid stored values with no transition into them.

mod aggregate;
mod errors;
mod schedule;
mod view;

pub use aggregate::{Session, SessionDraft, SESSION_DURATION_MINUTES};
pub use errors::SessionError;
pub use schedule::{classify, merge_participant_sessions, sort_by_start_time, Schedule};
pub use view::{Counterpart, ScheduleView, SessionAction, SessionCard, ViewerRole};
