//! HTTP DTOs for session endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SessionStatus;
use crate::domain::session::{Counterpart, ScheduleView, Session, SessionCard, ViewerRole};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to book a session.
///
/// Missing or empty fields are accepted here and rejected by the handlers.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSessionRequest {
    #[serde(default)]
    pub coach_id: String,
    #[serde(default)]
    pub student_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
}

/// Query parameters for listing a participant's sessions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionListParams {
    /// Order by start time, earliest first
    #[serde(default)]
    pub sorted: bool,
}

/// Query parameters for a participant's schedule.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleParams {
    #[serde(default)]
    pub role: ViewerRole,
    /// RFC 3339 reference instant; defaults to now
    #[serde(default)]
    pub as_of: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Session record for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub id: String,
    pub student_id: String,
    pub coach_id: String,
    pub student_name: String,
    pub coach_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coach_avatar: Option<String>,
    pub start_time: String,
    pub duration: u32,
    pub status: SessionStatus,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            id: session.id().to_string(),
            student_id: session.student_id().to_string(),
            coach_id: session.coach_id().to_string(),
            student_name: session.student_name().to_string(),
            coach_name: session.coach_name().to_string(),
            student_avatar: session.student_avatar().map(str::to_string),
            coach_avatar: session.coach_avatar().map(str::to_string),
            start_time: session.start_time().to_rfc3339(),
            duration: session.duration(),
            status: session.status(),
        }
    }
}

/// List of sessions.
#[derive(Debug, Clone, Serialize)]
pub struct SessionListResponse {
    pub items: Vec<SessionResponse>,
    pub total: usize,
}

impl From<Vec<Session>> for SessionListResponse {
    fn from(sessions: Vec<Session>) -> Self {
        let items: Vec<SessionResponse> = sessions.into_iter().map(Into::into).collect();
        Self {
            total: items.len(),
            items,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CounterpartResponse {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub label: String,
}

impl From<Counterpart> for CounterpartResponse {
    fn from(counterpart: Counterpart) -> Self {
        Self {
            name: counterpart.name,
            avatar: counterpart.avatar,
            label: counterpart.label.to_string(),
        }
    }
}

/// One schedule entry with its display projection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCardResponse {
    pub session: SessionResponse,
    pub counterpart: CounterpartResponse,
    pub is_past: bool,
    /// Button label, e.g. "Join Session"
    pub action: String,
}

impl From<SessionCard> for SessionCardResponse {
    fn from(card: SessionCard) -> Self {
        Self {
            action: card.action.label().to_string(),
            is_past: card.is_past,
            counterpart: card.counterpart.into(),
            session: card.session.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub as_of: String,
    pub upcoming: Vec<SessionCardResponse>,
    pub past: Vec<SessionCardResponse>,
}

impl From<ScheduleView> for ScheduleResponse {
    fn from(view: ScheduleView) -> Self {
        Self {
            as_of: view.as_of.to_rfc3339(),
            upcoming: view.upcoming.into_iter().map(Into::into).collect(),
            past: view.past.into_iter().map(Into::into).collect(),
        }
    }
}
