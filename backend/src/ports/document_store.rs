//! Document store port.
//!
//! The scheduling core talks to a hosted document database through three
//! primitives: fetch by key, write-and-assign-key, and equality-filtered
//! query. The store offers no OR across fields and no transactions, and
//! every call is atomic at the record level.
//!
//! # Identifier assignment
//!
//! `put` assigns the identifier. A document without an `"id"` field gets a
//! fresh one, which is written into the stored document and returned. A
//! document that already has a string `"id"` is stored under that key,
//! replacing any previous record.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// A flat, self-contained stored record.
pub type Document = Map<String, Value>;

/// Field holding a document's identifier.
pub const ID_FIELD: &str = "id";

/// Collection names used by this crate.
pub mod collections {
    /// Booked sessions, keyed by session id.
    pub const SESSIONS: &str = "sessions";
    /// User records, keyed by participant id.
    pub const USERS: &str = "users";
}

/// Errors that can occur during document store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to encode or decode document: {0}")]
    Serialization(String),

    #[error("Invalid document key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        StoreError::Unavailable(message.into())
    }
}

/// Port for a generic keyed document store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch one document by identifier.
    ///
    /// Returns `None` if absent.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;

    /// Persist a document and return its identifier.
    ///
    /// # Errors
    /// Returns `StoreError` if the write fails. Callers do not retry.
    async fn put(&self, collection: &str, document: Document) -> Result<String, StoreError>;

    /// All documents whose `field` equals `value`.
    ///
    /// No ordering is guaranteed.
    async fn query(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Document>, StoreError>;
}

/// Encodes a typed record as a document.
pub fn encode<T: Serialize>(record: &T) -> Result<Document, StoreError> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(StoreError::Serialization(format!(
            "expected an object, got {}",
            other
        ))),
        Err(e) => Err(StoreError::Serialization(e.to_string())),
    }
}

/// Decodes a document into a typed record.
pub fn decode<T: DeserializeOwned>(document: Document) -> Result<T, StoreError> {
    serde_json::from_value(Value::Object(document))
        .map_err(|e| StoreError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        id: String,
        count: u32,
    }

    // Trait object safety test
    #[test]
    fn document_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn DocumentStore) {}
    }

    #[test]
    fn encode_then_decode_typed_record() {
        let doc = encode(&Sample {
            id: "a".to_string(),
            count: 3,
        })
        .unwrap();
        assert_eq!(doc.get("count"), Some(&json!(3)));

        let back: Sample = decode(doc).unwrap();
        assert_eq!(back.count, 3);
    }

    #[test]
    fn encode_rejects_non_object() {
        let err = encode(&42).unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }

    #[test]
    fn decode_reports_missing_fields() {
        let mut doc = Document::new();
        doc.insert("id".to_string(), json!("a"));
        let err = decode::<Sample>(doc).unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
