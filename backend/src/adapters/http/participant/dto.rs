//! HTTP DTOs for participant directory endpoints.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::domain::foundation::{ParticipantId, ParticipantRole};
use crate::domain::participant::Participant;

/// Directory entry for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: ParticipantRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
}

impl From<Participant> for ParticipantResponse {
    fn from(participant: Participant) -> Self {
        Self {
            id: participant.id().to_string(),
            name: participant.name().to_string(),
            email: participant.email().map(str::to_string),
            role: participant.role(),
            avatar_url: participant.avatar_url().map(str::to_string),
            hourly_rate: participant.hourly_rate(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CoachListResponse {
    pub items: Vec<ParticipantResponse>,
    pub total: usize,
}

impl From<Vec<Participant>> for CoachListResponse {
    fn from(coaches: Vec<Participant>) -> Self {
        let items: Vec<ParticipantResponse> = coaches.into_iter().map(Into::into).collect();
        Self {
            total: items.len(),
            items,
        }
    }
}

/// Coach id to display name.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct CoachNamesResponse(pub BTreeMap<String, String>);

impl From<HashMap<ParticipantId, String>> for CoachNamesResponse {
    fn from(names: HashMap<ParticipantId, String>) -> Self {
        Self(
            names
                .into_iter()
                .map(|(id, name)| (id.to_string(), name))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participant_response_uses_wire_role() {
        let coach = Participant::new(ParticipantId::new("C1").unwrap(), "Carla", ParticipantRole::Coach)
            .with_hourly_rate(80.0);
        let json = serde_json::to_value(ParticipantResponse::from(coach)).unwrap();
        assert_eq!(json["role"], "COACH");
        assert_eq!(json["hourlyRate"], 80.0);
        assert!(json.get("email").is_none());
    }

    #[test]
    fn coach_names_serialize_as_object() {
        let mut names = HashMap::new();
        names.insert(ParticipantId::new("C1").unwrap(), "Carla".to_string());
        let json = serde_json::to_value(CoachNamesResponse::from(names)).unwrap();
        assert_eq!(json, serde_json::json!({ "C1": "Carla" }));
    }
}
