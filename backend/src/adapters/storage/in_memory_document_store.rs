//! In-Memory Document Store Adapter
//!
//! Stores documents in memory, grouped by collection.
//! Useful for testing and development.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::ports::{Document, DocumentStore, StoreError, ID_FIELD};

type Collections = HashMap<String, BTreeMap<String, Document>>;

/// In-memory document store
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    collections: Arc<RwLock<Collections>>,
    writes: Arc<AtomicUsize>,
}

impl InMemoryDocumentStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection
    pub async fn document_count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, BTreeMap::len)
    }

    /// Number of `put` calls served since creation
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

/// Returns the key a document should be stored under, inserting a fresh one
/// if the document has none.
pub(crate) fn assign_id(document: &mut Document) -> Result<String, StoreError> {
    match document.get(ID_FIELD) {
        Some(Value::String(id)) if !id.trim().is_empty() => Ok(id.clone()),
        Some(Value::String(_)) | None => {
            let id = Uuid::new_v4().simple().to_string();
            document.insert(ID_FIELD.to_string(), Value::String(id.clone()));
            Ok(id)
        }
        Some(other) => Err(StoreError::InvalidKey(other.to_string())),
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .cloned())
    }

    async fn put(&self, collection: &str, mut document: Document) -> Result<String, StoreError> {
        let id = assign_id(&mut document)?;

        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), document);
        self.writes.fetch_add(1, Ordering::SeqCst);

        Ok(id)
    }

    async fn query(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.values()
                    .filter(|doc| doc.get(field) == Some(value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
