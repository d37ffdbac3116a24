//! ListSessionsHandler - Query handler for every session a participant is part of.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::domain::foundation::ParticipantId;
use crate::domain::session::{merge_participant_sessions, Session, SessionError};
use crate::ports::{collections, decode, DocumentStore};

const STUDENT_FIELD: &str = "studentId";
const COACH_FIELD: &str = "coachId";

/// Query for a participant's sessions, in either role.
#[derive(Debug, Clone)]
pub struct ListSessionsQuery {
    pub participant_id: ParticipantId,
}

/// Handler for listing sessions.
///
/// Always reads fresh from the store. Both role queries run concurrently and
/// the whole call fails if either does.
#[derive(Clone)]
pub struct ListSessionsHandler {
    store: Arc<dyn DocumentStore>,
}

impl ListSessionsHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListSessionsQuery) -> Result<Vec<Session>, SessionError> {
        let key = Value::String(query.participant_id.as_str().to_string());

        let (as_student, as_coach) = futures::try_join!(
            self.sessions_where(STUDENT_FIELD, &key),
            self.sessions_where(COACH_FIELD, &key),
        )?;

        debug!(
            participant_id = %query.participant_id,
            as_student = as_student.len(),
            as_coach = as_coach.len(),
            "fetched participant sessions"
        );

        Ok(merge_participant_sessions(as_student, as_coach))
    }

    async fn sessions_where(&self, field: &str, value: &Value) -> Result<Vec<Session>, SessionError> {
        let documents = self.store.query(collections::SESSIONS, field, value).await?;
        documents
            .into_iter()
            .map(|document| decode::<Session>(document).map_err(SessionError::from))
            .collect()
    }
}
