use thiserror::Error;

use crate::collection::Collection;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Document for '{collection}' must be a JSON object, got {kind}")]
    InvalidDocument {
        collection: Collection,
        kind: &'static str,
    },

    #[error("Filter must be a JSON object")]
    InvalidFilter,

    #[error("Unknown collection: {0}")]
    UnknownCollection(String),
}
