//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - DocumentStore implementations (in-memory, YAML files)
//! - `http` - REST API over axum

pub mod http;
pub mod storage;

pub use http::{api_router, app};
pub use storage::{document_store_from_config, FileDocumentStore, InMemoryDocumentStore};
