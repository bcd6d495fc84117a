//! Default seed script - writes the focusbuddy development dataset
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! ```
//!
//! Every run appends a fresh copy of the dataset unless `SEED_CLEAR_FIRST`
//! is set.

use seed_data::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let db_config = DatabaseConfig::from_env()?;
    let seed_config = SeedConfig::from_env()?;

    let store = PgDocumentStore::connect(&db_config).await?;
    store.migrate().await?;

    tracing::info!("Connected to database");

    let seeder = Seeder::new(store);
    if seed_config.clear_first {
        seeder.clear_all().await?;
    }

    let result = seeder
        .seed(&SeedFixture::focus_buddy(), seed_config.spelling)
        .await?;

    // Summary output
    tracing::info!("Seed completed!");
    for (collection, count) in &result.inserted {
        tracing::info!("  {}: {}", collection, count);
    }

    Ok(())
}
