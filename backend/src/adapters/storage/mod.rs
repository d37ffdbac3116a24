//! Storage Adapters
//!
//! Implementations of the DocumentStore port.
//!
//! ## Available Adapters
//!
//! - **FileDocumentStore** - Stores documents as YAML files on disk
//! - **InMemoryDocumentStore** - Stores documents in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileDocumentStore, InMemoryDocumentStore};
//!
//! // Local persistence
//! let store = FileDocumentStore::new("./data/store");
//!
//! // Testing: in-memory storage
//! let store = InMemoryDocumentStore::new();
//! ```

mod file_document_store;
mod in_memory_document_store;

pub use file_document_store::FileDocumentStore;
pub use in_memory_document_store::InMemoryDocumentStore;

use std::sync::Arc;

use tracing::info;

use crate::config::{StoreBackend, StoreConfig};
use crate::ports::DocumentStore;

/// Builds the store selected by configuration.
pub fn document_store_from_config(config: &StoreConfig) -> Arc<dyn DocumentStore> {
    match config.backend {
        StoreBackend::Memory => {
            info!("using in-memory document store");
            Arc::new(InMemoryDocumentStore::new())
        }
        StoreBackend::File => {
            info!(data_dir = %config.data_dir.display(), "using file document store");
            Arc::new(FileDocumentStore::new(&config.data_dir))
        }
    }
}
