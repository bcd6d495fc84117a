//! Example: Look up a blocked domain and register a second user.
//!
//! A quick check that a seeded database is reachable and readable:
//! - finds the block-list entry for https://facebook.com
//! - inserts user 2 with an idle status
//!
//! Run with:
//! ```
//! cargo run -p seed-data --example lookup_block_list
//! ```

use focusbuddy::models::{BlockListEntry, User, UserStatus};
use focusbuddy::store::insert_record;
use seed_data::prelude::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Connect to database
    let store = PgDocumentStore::connect(&DatabaseConfig::from_env()?).await?;
    store.migrate().await?;

    tracing::info!("Connected to database");

    let blocked = store
        .find_one(
            Collection::BlockList,
            &json!({"domain": "https://facebook.com"}),
        )
        .await?;

    match blocked {
        Some(doc) => {
            let entry: BlockListEntry = doc.decode()?;
            tracing::info!(
                "Found {} (id {}): list type {:?}, active: {}",
                entry.domain,
                doc.id,
                entry.list_type,
                entry.is_active
            );
        }
        None => tracing::warn!("https://facebook.com is not on the block list; run the seed first"),
    }

    let user = User {
        user_id: 2,
        user_status: UserStatus::Idle,
    };
    let id = insert_record(&store, &user).await?;
    tracing::info!("Inserted user {} as document {}", user.user_id, id);

    Ok(())
}
