//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `DocumentStore` - Keyed document store with equality-filtered queries

mod document_store;

pub use document_store::{
    collections, decode, encode, Document, DocumentStore, StoreError, ID_FIELD,
};
