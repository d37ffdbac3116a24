//! GetSessionHandler - Query handler for retrieving a single session.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::{Session, SessionError};
use crate::ports::{collections, decode, DocumentStore};

/// Query to get a session by ID.
#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    pub session_id: SessionId,
}

/// Handler for retrieving session details.
#[derive(Clone)]
pub struct GetSessionHandler {
    store: Arc<dyn DocumentStore>,
}

impl GetSessionHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<Session, SessionError> {
        let document = self
            .store
            .get(collections::SESSIONS, query.session_id.as_str())
            .await?
            .ok_or_else(|| SessionError::not_found(query.session_id))?;

        Ok(decode(document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::session::test_store::{shared, RecordingStore};

    fn query(id: &str) -> GetSessionQuery {
        GetSessionQuery {
            session_id: SessionId::new(id).unwrap(),
        }
    }

    #[tokio::test]
    async fn returns_stored_session() {
        let recorder = RecordingStore::new();
        let seeded = recorder.seed_session("s1", "2024-06-01", "10:00", "U1", "C1").await;
        let (_, store) = shared(recorder);

        let session = GetSessionHandler::new(store).handle(query("s1")).await.unwrap();

        assert_eq!(session, seeded);
    }

    #[tokio::test]
    async fn missing_session_is_not_found() {
        let (recorder, store) = shared(RecordingStore::new());

        let result = GetSessionHandler::new(store).handle(query("missing")).await;

        assert!(matches!(result, Err(SessionError::NotFound(_))));
        assert_eq!(recorder.get_count(), 1);
    }
}
