//! Seed data for focusbuddy.
//!
//! This crate holds the development dataset for the focus-timer service and
//! the tooling to write it into a document store.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let store = PgDocumentStore::connect(&DatabaseConfig::from_env()?).await?;
//! store.migrate().await?;
//!
//! let report = Seeder::new(store)
//!     .seed(&SeedFixture::focus_buddy(), Spelling::Verbatim)
//!     .await?;
//! ```

pub mod config;
pub mod db;
pub mod fixture;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::db::{SeedError, SeedReport, Seeder};
    pub use crate::fixture::{InsertMode, SeedBatch, SeedFixture, Spelling};
    pub use focusbuddy::{
        Collection, ConnectionTarget, DatabaseConfig, DocumentStore, MemoryDocumentStore,
        PgDocumentStore,
    };
}
