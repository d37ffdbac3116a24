//! GetParticipantHandler - Query handler for resolving user records.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::domain::foundation::ParticipantId;
use crate::domain::participant::{Participant, ParticipantError};
use crate::ports::{collections, decode, DocumentStore, ID_FIELD};

/// Query for a single participant.
#[derive(Debug, Clone)]
pub struct GetParticipantQuery {
    pub participant_id: ParticipantId,
}

/// Handler for participant lookups.
#[derive(Clone)]
pub struct GetParticipantHandler {
    store: Arc<dyn DocumentStore>,
}

impl GetParticipantHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Resolve any user record by id.
    pub async fn handle(&self, query: GetParticipantQuery) -> Result<Participant, ParticipantError> {
        let id = query.participant_id;
        let mut document = self
            .store
            .get(collections::USERS, id.as_str())
            .await?
            .ok_or_else(|| ParticipantError::not_found(id.clone()))?;

        // The lookup key is the id when the record does not repeat it
        document
            .entry(ID_FIELD)
            .or_insert_with(|| Value::String(id.as_str().to_string()));

        Ok(decode(document)?)
    }

    /// Resolve a user that holds the coach role.
    ///
    /// A user that exists but is not a coach is reported as not found.
    pub async fn handle_coach(
        &self,
        query: GetParticipantQuery,
    ) -> Result<Participant, ParticipantError> {
        let id = query.participant_id.clone();
        let participant = self.handle(query).await?;
        if !participant.is_coach() {
            debug!(participant_id = %id, role = %participant.role(), "participant is not a coach");
            return Err(ParticipantError::not_found(id));
        }
        Ok(participant)
    }
}
