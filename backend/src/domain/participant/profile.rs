//! Participant record as stored in the users collection.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ParticipantId, ParticipantRole};

/// A resolved user that can take part in a session.
///
/// Field names follow the stored document layout (`avatarUrl`,
/// `hourlyRate`). Unknown fields on the document are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    id: ParticipantId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default)]
    role: ParticipantRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar_url: Option<String>,
    /// Price per one-hour session, quoted on booking confirmation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hourly_rate: Option<f64>,
}

impl Participant {
    pub fn new(id: ParticipantId, name: impl Into<String>, role: ParticipantRole) -> Self {
        Self {
            id,
            name: name.into(),
            email: None,
            role,
            avatar_url: None,
            hourly_rate: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_avatar(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    pub fn with_hourly_rate(mut self, rate: f64) -> Self {
        self.hourly_rate = Some(rate);
        self
    }

    pub fn id(&self) -> &ParticipantId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn role(&self) -> ParticipantRole {
        self.role
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    pub fn hourly_rate(&self) -> Option<f64> {
        self.hourly_rate
    }

    pub fn is_coach(&self) -> bool {
        self.role.is_coach()
    }
}
