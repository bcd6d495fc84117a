use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::{debug, info};

use crate::collection::Collection;
use crate::config::DatabaseConfig;
use crate::errors::StoreError;
use crate::store::{DocumentId, DocumentStore, StoredDocument, check_filter, into_object};

/// Document store backed by a single Postgres `documents` table.
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool using the configured limits.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        info!("Connecting to database at {}", config.redacted());

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .connect_with(config.connect_options()?)
            .await?;

        Ok(Self::new(pool))
    }

    /// Applies the embedded migrations.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert_one(
        &self,
        collection: Collection,
        document: Value,
    ) -> Result<DocumentId, StoreError> {
        let body = Value::Object(into_object(collection, document)?);

        let id: DocumentId = sqlx::query_scalar(
            r#"
            INSERT INTO documents (collection, body)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(collection.as_str())
        .bind(&body)
        .fetch_one(&self.pool)
        .await?;

        debug!(%collection, id, "Inserted document");
        Ok(id)
    }

    async fn insert_many(
        &self,
        collection: Collection,
        documents: Vec<Value>,
    ) -> Result<Vec<DocumentId>, StoreError> {
        let bodies = documents
            .into_iter()
            .map(|d| into_object(collection, d).map(Value::Object))
            .collect::<Result<Vec<_>, _>>()?;

        if bodies.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(bodies.len());

        for body in &bodies {
            let id: DocumentId = sqlx::query_scalar(
                r#"
                INSERT INTO documents (collection, body)
                VALUES ($1, $2)
                RETURNING id
                "#,
            )
            .bind(collection.as_str())
            .bind(body)
            .fetch_one(&mut *tx)
            .await?;
            ids.push(id);
        }

        tx.commit().await?;

        debug!(%collection, count = ids.len(), "Inserted documents");
        Ok(ids)
    }

    async fn find(
        &self,
        collection: Collection,
        filter: &Value,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        check_filter(filter)?;

        let rows: Vec<(DocumentId, Value)> = sqlx::query_as(
            r#"
            SELECT id, body
            FROM documents
            WHERE collection = $1 AND body @> $2
            ORDER BY id
            "#,
        )
        .bind(collection.as_str())
        .bind(filter)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(id, body)| {
                Ok(StoredDocument {
                    id,
                    collection,
                    body: into_object(collection, body)?,
                })
            })
            .collect()
    }

    async fn count(&self, collection: Collection) -> Result<u64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE collection = $1")
            .bind(collection.as_str())
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }

    async fn clear(&self, collection: Collection) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1")
            .bind(collection.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
