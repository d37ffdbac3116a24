//! Pure schedule computations: merging the two query angles, bucketing into
//! upcoming and past, and ordering by start time.
//!
//! Nothing here reads the clock. The reference instant is always passed in.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::foundation::Timestamp;

use super::Session;

/// Sessions of one participant split around a reference instant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    /// `start_time >= as_of`, soonest first.
    pub upcoming: Vec<Session>,
    /// `start_time < as_of`, most recent first.
    pub past: Vec<Session>,
}

impl Schedule {
    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.past.is_empty()
    }

    pub fn len(&self) -> usize {
        self.upcoming.len() + self.past.len()
    }
}

/// Unions the student-side and coach-side results, keeping the first
/// occurrence of every session id.
///
/// A duplicate only appears when one participant is listed as both student
/// and coach on the same record.
pub fn merge_participant_sessions(as_student: Vec<Session>, as_coach: Vec<Session>) -> Vec<Session> {
    let mut seen = HashSet::new();
    as_student
        .into_iter()
        .chain(as_coach)
        .filter(|session| seen.insert(session.id().clone()))
        .collect()
}

/// Splits sessions into upcoming and past relative to `as_of`.
///
/// Both sorts are stable, so sessions sharing a start time keep their input
/// order.
pub fn classify(sessions: Vec<Session>, as_of: &Timestamp) -> Schedule {
    let (mut upcoming, mut past): (Vec<_>, Vec<_>) = sessions
        .into_iter()
        .partition(|session| session.is_upcoming_at(as_of));

    upcoming.sort_by(|a, b| a.start_time().cmp(b.start_time()));
    past.sort_by(|a, b| b.start_time().cmp(a.start_time()));

    Schedule { upcoming, past }
}

/// Orders sessions ascending by start time (stable).
pub fn sort_by_start_time(mut sessions: Vec<Session>) -> Vec<Session> {
    sessions.sort_by(|a, b| a.start_time().cmp(b.start_time()));
    sessions
}
