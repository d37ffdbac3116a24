//! ListCoachesHandler - Query handler for the coach directory.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::domain::foundation::{ParticipantId, ParticipantRole};
use crate::domain::participant::{Participant, ParticipantError};
use crate::ports::{collections, decode, DocumentStore};

/// Handler listing every user with the coach role.
#[derive(Clone)]
pub struct ListCoachesHandler {
    store: Arc<dyn DocumentStore>,
}

impl ListCoachesHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// All coaches, ordered by name.
    pub async fn handle(&self) -> Result<Vec<Participant>, ParticipantError> {
        let role = Value::String(ParticipantRole::Coach.as_str().to_string());
        let documents = self.store.query(collections::USERS, "role", &role).await?;

        let mut coaches = documents
            .into_iter()
            .map(decode::<Participant>)
            .collect::<Result<Vec<_>, _>>()?;
        coaches.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(coaches)
    }

    /// Coach id to display name, for quick lookups.
    pub async fn coach_name_map(&self) -> Result<HashMap<ParticipantId, String>, ParticipantError> {
        Ok(self
            .handle()
            .await?
            .into_iter()
            .map(|coach| (coach.id().clone(), coach.name().to_string()))
            .collect())
    }
}
