//! File-based Document Store Adapter
//!
//! Stores every document as a YAML file at
//! `<base_path>/<collection>/<id>.yaml`. Queries scan the collection
//! directory, which is fine for local development and small deployments.

use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::in_memory_document_store::assign_id;
use crate::ports::{Document, DocumentStore, StoreError};

const EXTENSION: &str = "yaml";

/// File-based document store
#[derive(Debug, Clone)]
pub struct FileDocumentStore {
    base_path: PathBuf,
}

impl FileDocumentStore {
    /// Create a new file store rooted at `base_path`
    ///
    /// # Example
    /// ```ignore
    /// let store = FileDocumentStore::new("./data/store");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Directory holding one collection
    fn collection_dir(&self, collection: &str) -> Result<PathBuf, StoreError> {
        Ok(self.base_path.join(checked_key(collection)?))
    }

    /// File path for one document
    fn document_path(&self, collection: &str, id: &str) -> Result<PathBuf, StoreError> {
        Ok(self
            .collection_dir(collection)?
            .join(format!("{}.{}", checked_key(id)?, EXTENSION)))
    }

    async fn read_document(path: &Path) -> Result<Document, StoreError> {
        let yaml = fs::read_to_string(path)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;

        match serde_yaml::from_str::<Value>(&yaml) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(StoreError::Serialization(format!(
                "{} does not contain a mapping",
                path.display()
            ))),
            Err(e) => Err(StoreError::Serialization(e.to_string())),
        }
    }
}

/// Keys become path segments, so anything that could escape the base
/// directory is refused.
fn checked_key(key: &str) -> Result<&str, StoreError> {
    let valid = !key.is_empty()
        && key != "."
        && key != ".."
        && !key.contains(['/', '\\'])
        && !key.contains('\0');
    if valid {
        Ok(key)
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

#[async_trait]
impl DocumentStore for FileDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let path = self.document_path(collection, id)?;
        if !path.exists() {
            return Ok(None);
        }
        Self::read_document(&path).await.map(Some)
    }

    async fn put(&self, collection: &str, mut document: Document) -> Result<String, StoreError> {
        let id = assign_id(&mut document)?;
        let path = self.document_path(collection, &id)?;

        fs::create_dir_all(self.collection_dir(collection)?)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;

        let yaml = serde_yaml::to_string(&Value::Object(document))
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        fs::write(&path, yaml)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;

        Ok(id)
    }

    async fn query(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Document>, StoreError> {
        let dir = self.collection_dir(collection)?;
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&dir)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;

        let mut matches = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
                continue;
            }
            let document = Self::read_document(&path).await?;
            if document.get(field) == Some(value) {
                matches.push(document);
            }
        }

        Ok(matches)
    }
}
