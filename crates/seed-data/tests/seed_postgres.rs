//! Integration tests for seeding a Postgres document store.
//!
//! These tests verify the written dataset end to end:
//! - one document per single-insert collection, two block-list entries in order
//! - legacy field names survive the JSONB round trip
//! - a second run duplicates every document
//!
//! To run these tests, you need a PostgreSQL database and `DATABASE_URL` set.
//! Migrations are applied by the test.
//!
//! Run with: `DATABASE_URL=postgres://... cargo nextest run -p seed-data seed_postgres`
//!
//! Note: The test clears the seeded collections, so point it at a
//! disposable database.

use std::env;

use focusbuddy::models::{BlockListEntry, FocusTimeSummary, FocusTimer};
use focusbuddy::store::find_records;
use seed_data::prelude::*;
use serde_json::json;

/// Get a migrated store, skipping tests if DATABASE_URL is not set.
async fn get_test_store() -> Option<PgDocumentStore> {
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            return None;
        }
    };

    let config = DatabaseConfig {
        target: ConnectionTarget::Url(database_url),
        max_connections: 1,
        ..DatabaseConfig::default()
    };

    match PgDocumentStore::connect(&config).await {
        Ok(store) => {
            store.migrate().await.expect("Failed to run migrations");
            Some(store)
        }
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            None
        }
    }
}

// A single test so runs never interleave on the shared collections.
#[tokio::test]
async fn test_seed_round_trip() {
    let Some(store) = get_test_store().await else {
        return;
    };
    let seeder = Seeder::new(store);
    seeder.clear_all().await.expect("Failed to clear");

    let report = seeder
        .seed(&SeedFixture::focus_buddy(), Spelling::Verbatim)
        .await
        .expect("Failed to seed");
    assert_eq!(report.total(), 8);

    let store = seeder.store();
    for collection in Collection::ALL {
        let expected = if collection == Collection::BlockList { 2 } else { 1 };
        assert_eq!(
            store.count(collection).await.unwrap(),
            expected,
            "{collection}"
        );
    }

    let user = store
        .find_one(Collection::User, &json!({}))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        serde_json::Value::Object(user.body),
        json!({"user_id": 1, "user_status": 2})
    );

    let timer = store
        .find_one(Collection::FocusTimer, &json!({"type": 1}))
        .await
        .unwrap()
        .expect("focus timer");
    assert_eq!(timer.body["remaining_runtime"], json!(1800));
    assert_eq!(timer.body["duartion"], json!(3600));
    let timers: Vec<FocusTimer> = find_records(store, &json!({})).await.unwrap();
    assert_eq!(timers[0].duration, 3600);

    let entries: Vec<BlockListEntry> = find_records(store, &json!({})).await.unwrap();
    let seen: Vec<_> = entries
        .iter()
        .map(|e| (e.domain.as_str(), e.is_active))
        .collect();
    assert_eq!(
        seen,
        vec![("https://facebook.com", true), ("https://youtube.com", false)]
    );

    let summaries: Vec<FocusTimeSummary> = find_records(store, &json!({"lifetime_total": 43.5}))
        .await
        .unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].weekly.len(), 2);

    // Second run: nothing deduplicates.
    seeder
        .seed(&SeedFixture::focus_buddy(), Spelling::Verbatim)
        .await
        .expect("Failed to seed twice");
    assert_eq!(store.count(Collection::User).await.unwrap(), 2);
    assert_eq!(store.count(Collection::BlockList).await.unwrap(), 4);

    seeder.clear_all().await.expect("Failed to clean up");
}
