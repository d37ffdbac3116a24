//! Role-aware projections of sessions for display.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::{Schedule, Session};

/// Which side of the booking the viewer is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewerRole {
    #[default]
    Student,
    Coach,
}

/// The other party of a session, as seen by the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Counterpart {
    pub name: String,
    pub avatar: Option<String>,
    /// `"Coach"` or `"Student"`.
    pub label: &'static str,
}

impl Session {
    /// Students see the coach; coaches see the student.
    pub fn view_as(&self, viewer: ViewerRole) -> Counterpart {
        match viewer {
            ViewerRole::Student => Counterpart {
                name: self.coach_name().to_string(),
                avatar: self.coach_avatar().map(str::to_string),
                label: "Coach",
            },
            ViewerRole::Coach => Counterpart {
                name: self.student_name().to_string(),
                avatar: self.student_avatar().map(str::to_string),
                label: "Student",
            },
        }
    }
}

/// Primary action offered on a session card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionAction {
    Join,
    ViewDetails,
}

impl SessionAction {
    pub fn label(&self) -> &'static str {
        match self {
            SessionAction::Join => "Join Session",
            SessionAction::ViewDetails => "View Details",
        }
    }
}

/// One entry of a schedule page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCard {
    pub session: Session,
    pub counterpart: Counterpart,
    pub is_past: bool,
    pub action: SessionAction,
}

impl SessionCard {
    fn new(session: Session, viewer: ViewerRole, is_past: bool) -> Self {
        let counterpart = session.view_as(viewer);
        let action = if is_past {
            SessionAction::ViewDetails
        } else {
            SessionAction::Join
        };
        Self {
            session,
            counterpart,
            is_past,
            action,
        }
    }
}

/// A classified schedule projected for one viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleView {
    pub as_of: Timestamp,
    pub upcoming: Vec<SessionCard>,
    pub past: Vec<SessionCard>,
}

impl ScheduleView {
    /// Keeps the bucket order of `schedule`.
    pub fn project(schedule: Schedule, viewer: ViewerRole, as_of: Timestamp) -> Self {
        Self {
            as_of,
            upcoming: schedule
                .upcoming
                .into_iter()
                .map(|s| SessionCard::new(s, viewer, false))
                .collect(),
            past: schedule
                .past
                .into_iter()
                .map(|s| SessionCard::new(s, viewer, true))
                .collect(),
        }
    }
}
