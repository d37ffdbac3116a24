//! Recording document store shared by the session handler tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::adapters::storage::InMemoryDocumentStore;
use crate::domain::participant::Participant;
use crate::domain::session::{Session, SessionDraft};
use crate::domain::foundation::{ParticipantId, ParticipantRole, SessionId, Timestamp};
use crate::ports::{collections, encode, Document, DocumentStore, StoreError};

/// Wraps an in-memory store, records calls, and can inject failures.
pub struct RecordingStore {
    inner: InMemoryDocumentStore,
    puts: Mutex<Vec<String>>,
    queries: Mutex<Vec<(String, Value)>>,
    gets: Mutex<Vec<String>>,
    fail_writes: bool,
    fail_query_field: Option<&'static str>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self {
            inner: InMemoryDocumentStore::new(),
            puts: Mutex::new(Vec::new()),
            queries: Mutex::new(Vec::new()),
            gets: Mutex::new(Vec::new()),
            fail_writes: false,
            fail_query_field: None,
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::new()
        }
    }

    pub fn failing_query_on(field: &'static str) -> Self {
        Self {
            fail_query_field: Some(field),
            ..Self::new()
        }
    }

    pub fn put_count(&self) -> usize {
        self.puts.lock().unwrap().len()
    }

    pub fn get_count(&self) -> usize {
        self.gets.lock().unwrap().len()
    }

    pub fn queries(&self) -> Vec<(String, Value)> {
        self.queries.lock().unwrap().clone()
    }

    pub fn total_calls(&self) -> usize {
        self.put_count() + self.get_count() + self.queries().len()
    }

    /// Writes a document directly, bypassing the recorder.
    pub async fn seed(&self, collection: &str, document: Document) -> String {
        self.inner.put(collection, document).await.unwrap()
    }

    pub async fn seed_session(&self, id: &str, date: &str, time: &str, student: &str, coach: &str) -> Session {
        let draft = SessionDraft::book(
            &participant(coach, ParticipantRole::Coach),
            &participant(student, ParticipantRole::Learner),
            Timestamp::from_date_and_time(date, time).unwrap(),
        );
        let session = Session::from_draft(SessionId::new(id).unwrap(), draft);
        self.seed(collections::SESSIONS, encode(&session).unwrap()).await;
        session
    }

    pub async fn seed_participant(&self, participant: &Participant) {
        self.seed(collections::USERS, encode(participant).unwrap()).await;
    }
}

pub fn participant(id: &str, role: ParticipantRole) -> Participant {
    Participant::new(ParticipantId::new(id).unwrap(), format!("{} name", id), role)
        .with_avatar(format!("{}.png", id))
}

#[async_trait]
impl DocumentStore for RecordingStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        self.gets.lock().unwrap().push(id.to_string());
        self.inner.get(collection, id).await
    }

    async fn put(&self, collection: &str, document: Document) -> Result<String, StoreError> {
        self.puts.lock().unwrap().push(collection.to_string());
        if self.fail_writes {
            return Err(StoreError::unavailable("simulated write failure"));
        }
        self.inner.put(collection, document).await
    }

    async fn query(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Document>, StoreError> {
        self.queries
            .lock()
            .unwrap()
            .push((field.to_string(), value.clone()));
        if self.fail_query_field == Some(field) {
            return Err(StoreError::unavailable("simulated query failure"));
        }
        self.inner.query(collection, field, value).await
    }
}

/// Convenience for handing the recorder to handlers while keeping a handle.
pub fn shared(store: RecordingStore) -> (Arc<RecordingStore>, Arc<dyn DocumentStore>) {
    let store = Arc::new(store);
    let port: Arc<dyn DocumentStore> = store.clone();
    (store, port)
}
