//! Database seeding utilities.

use std::time::{Duration, Instant};

use focusbuddy::{Collection, DocumentStore, StoreError};
use thiserror::Error;
use tracing::info;

use crate::fixture::{InsertMode, SeedBatch, SeedFixture, Spelling};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Failed to render seed documents: {0}")]
    Render(#[from] serde_json::Error),
}

/// What a seed run wrote.
#[derive(Debug, Clone, Default)]
pub struct SeedReport {
    /// Documents written per collection, in write order.
    pub inserted: Vec<(Collection, usize)>,
    pub elapsed: Duration,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.inserted.iter().map(|(_, n)| n).sum()
    }

    pub fn count_for(&self, collection: Collection) -> usize {
        self.inserted
            .iter()
            .filter(|(c, _)| *c == collection)
            .map(|(_, n)| n)
            .sum()
    }
}

/// Writes seed fixtures into a document store.
///
/// Writes are unconditional. Nothing is checked for existing data, so seeding
/// twice leaves two copies of every document.
pub struct Seeder<S> {
    store: S,
}

impl<S: DocumentStore> Seeder<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Writes every batch of the fixture, one after another.
    ///
    /// Stops at the first failing write. Earlier writes are kept.
    pub async fn seed(
        &self,
        fixture: &SeedFixture,
        spelling: Spelling,
    ) -> Result<SeedReport, SeedError> {
        let started = Instant::now();
        let batches = fixture.batches(spelling)?;
        info!("Seeding {} collections ({spelling} spelling)...", batches.len());

        let mut report = SeedReport::default();
        for batch in batches {
            let collection = batch.collection;
            let written = self.seed_batch(batch).await?;
            report.inserted.push((collection, written));
        }
        report.elapsed = started.elapsed();

        info!(
            "Seeded {} documents in {} ms",
            report.total(),
            report.elapsed.as_millis()
        );
        Ok(report)
    }

    /// Performs a single write, returning the number of documents written.
    pub async fn seed_batch(&self, batch: SeedBatch) -> Result<usize, SeedError> {
        let SeedBatch {
            collection,
            mode,
            documents,
        } = batch;

        let written = match mode {
            InsertMode::One => {
                for document in documents.iter().cloned() {
                    self.store.insert_one(collection, document).await?;
                }
                documents.len()
            }
            InsertMode::Many => self.store.insert_many(collection, documents).await?.len(),
        };

        info!("  Seeded {written} into {collection}");
        Ok(written)
    }

    /// Empties every seeded collection.
    ///
    /// **WARNING**: This deletes all documents in those collections, seeded or not.
    pub async fn clear_all(&self) -> Result<u64, SeedError> {
        info!("Clearing all seeded collections...");

        let mut removed = 0;
        for collection in Collection::ALL {
            removed += self.store.clear(collection).await?;
        }

        info!("Removed {removed} documents");
        Ok(removed)
    }

    /// Returns a reference to the store for advanced usage.
    pub fn store(&self) -> &S {
        &self.store
    }
}
