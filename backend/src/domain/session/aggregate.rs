//! Session entity.
//!
//! A session is one booked hour between a student and a coach. It is created
//! once by the booking handler and never modified afterwards by this crate.
//!
//! # Snapshot fields
//!
//! `student_name`, `coach_name` and the two avatars are copied from the
//! participant records when the booking is made. Later profile edits do not
//! reach sessions that already exist.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ParticipantId, SessionId, SessionStatus, Timestamp};
use crate::domain::participant::Participant;

/// Length of every booked session, in minutes.
pub const SESSION_DURATION_MINUTES: u32 = 60;

/// A session that has been validated but not yet written to the store.
///
/// Carries every persisted field except `id`, which the store assigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDraft {
    student_id: ParticipantId,
    coach_id: ParticipantId,
    student_name: String,
    coach_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    student_avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    coach_avatar: Option<String>,
    start_time: Timestamp,
    duration: u32,
    status: SessionStatus,
}

impl SessionDraft {
    /// Books a one-hour upcoming session, snapshotting both participants'
    /// display fields.
    pub fn book(coach: &Participant, student: &Participant, start_time: Timestamp) -> Self {
        Self {
            student_id: student.id().clone(),
            coach_id: coach.id().clone(),
            student_name: student.name().to_string(),
            coach_name: coach.name().to_string(),
            student_avatar: student.avatar_url().map(str::to_string),
            coach_avatar: coach.avatar_url().map(str::to_string),
            start_time,
            duration: SESSION_DURATION_MINUTES,
            status: SessionStatus::Upcoming,
        }
    }

    pub fn student_id(&self) -> &ParticipantId {
        &self.student_id
    }

    pub fn coach_id(&self) -> &ParticipantId {
        &self.coach_id
    }

    pub fn start_time(&self) -> &Timestamp {
        &self.start_time
    }
}

/// A persisted coaching session.
///
/// # Invariants
///
/// - `id` is unique across all sessions and never reassigned
/// - `start_time` is a valid instant
/// - the session is visible to exactly `student_id` and `coach_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    id: SessionId,
    student_id: ParticipantId,
    coach_id: ParticipantId,
    student_name: String,
    coach_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    student_avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    coach_avatar: Option<String>,
    start_time: Timestamp,
    #[serde(default = "default_duration")]
    duration: u32,
    #[serde(default)]
    status: SessionStatus,
}

fn default_duration() -> u32 {
    SESSION_DURATION_MINUTES
}

impl Session {
    /// Attaches the store-assigned identifier to a written draft.
    pub fn from_draft(id: SessionId, draft: SessionDraft) -> Self {
        Self {
            id,
            student_id: draft.student_id,
            coach_id: draft.coach_id,
            student_name: draft.student_name,
            coach_name: draft.coach_name,
            student_avatar: draft.student_avatar,
            coach_avatar: draft.coach_avatar,
            start_time: draft.start_time,
            duration: draft.duration,
            status: draft.status,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn student_id(&self) -> &ParticipantId {
        &self.student_id
    }

    pub fn coach_id(&self) -> &ParticipantId {
        &self.coach_id
    }

    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    pub fn coach_name(&self) -> &str {
        &self.coach_name
    }

    pub fn student_avatar(&self) -> Option<&str> {
        self.student_avatar.as_deref()
    }

    pub fn coach_avatar(&self) -> Option<&str> {
        self.coach_avatar.as_deref()
    }

    pub fn start_time(&self) -> &Timestamp {
        &self.start_time
    }

    /// Length in minutes.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// True if `participant` is the student or the coach of this session.
    pub fn involves(&self, participant: &ParticipantId) -> bool {
        &self.student_id == participant || &self.coach_id == participant
    }

    /// Upcoming relative to `as_of`. A session starting exactly at `as_of`
    /// still counts as upcoming.
    pub fn is_upcoming_at(&self, as_of: &Timestamp) -> bool {
        self.start_time >= *as_of
    }
}
