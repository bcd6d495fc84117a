//! FocusBuddy records and document storage.
//!
//! Records are the typed shapes of the documents the focus-timer service
//! reads. They are written to a [`DocumentStore`], either the Postgres-backed
//! [`PgDocumentStore`] or the in-process [`MemoryDocumentStore`].

pub mod collection;
pub mod config;
pub mod database;
pub mod errors;
pub mod memory;
pub mod models;
pub mod store;

pub use collection::Collection;
pub use config::{ConfigError, ConnectionTarget, DatabaseConfig};
pub use database::PgDocumentStore;
pub use errors::StoreError;
pub use memory::MemoryDocumentStore;
pub use store::{DocumentId, DocumentStore, StoredDocument};
