//! The document store seam.
//!
//! A [`DocumentStore`] exposes per-collection inserts and containment
//! lookups. Stores never deduplicate: inserting the same document twice keeps
//! both copies.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::collection::Collection;
use crate::errors::StoreError;
use crate::models::Record;

/// Identifier assigned by the store on insert. Increases with insertion order.
pub type DocumentId = i64;

/// A document as read back from a store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: DocumentId,
    pub collection: Collection,
    pub body: Map<String, Value>,
}

impl StoredDocument {
    /// Decodes the body into a typed record.
    pub fn decode<R: Record>(&self) -> Result<R, StoreError> {
        Ok(serde_json::from_value(Value::Object(self.body.clone()))?)
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts a single document and returns its id.
    async fn insert_one(
        &self,
        collection: Collection,
        document: Value,
    ) -> Result<DocumentId, StoreError>;

    /// Inserts documents in order and returns their ids in the same order.
    async fn insert_many(
        &self,
        collection: Collection,
        documents: Vec<Value>,
    ) -> Result<Vec<DocumentId>, StoreError>;

    /// Returns documents containing `filter`, in insertion order.
    ///
    /// `filter` must be an object. An empty object matches every document.
    async fn find(
        &self,
        collection: Collection,
        filter: &Value,
    ) -> Result<Vec<StoredDocument>, StoreError>;

    async fn count(&self, collection: Collection) -> Result<u64, StoreError>;

    /// Removes every document in the collection, returning how many were removed.
    async fn clear(&self, collection: Collection) -> Result<u64, StoreError>;

    async fn find_one(
        &self,
        collection: Collection,
        filter: &Value,
    ) -> Result<Option<StoredDocument>, StoreError> {
        Ok(self.find(collection, filter).await?.into_iter().next())
    }
}

/// Serializes a record into its collection.
pub async fn insert_record<R, S>(store: &S, record: &R) -> Result<DocumentId, StoreError>
where
    R: Record,
    S: DocumentStore + ?Sized,
{
    let document = serde_json::to_value(record)?;
    store.insert_one(R::COLLECTION, document).await
}

/// Finds and decodes records of one type.
pub async fn find_records<R, S>(store: &S, filter: &Value) -> Result<Vec<R>, StoreError>
where
    R: Record,
    S: DocumentStore + ?Sized,
{
    store
        .find(R::COLLECTION, filter)
        .await?
        .iter()
        .map(StoredDocument::decode)
        .collect()
}

/// Checks a document is an object and unwraps it.
pub(crate) fn into_object(
    collection: Collection,
    document: Value,
) -> Result<Map<String, Value>, StoreError> {
    match document {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::InvalidDocument {
            collection,
            kind: kind_of(&other),
        }),
    }
}

pub(crate) fn check_filter(filter: &Value) -> Result<(), StoreError> {
    if filter.is_object() {
        Ok(())
    } else {
        Err(StoreError::InvalidFilter)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Whether a stored body contains `filter`. Non-object filters match nothing.
pub fn body_contains(body: &Map<String, Value>, filter: &Value) -> bool {
    match filter {
        Value::Object(want) => want
            .iter()
            .all(|(key, value)| body.get(key).is_some_and(|have| contains(have, value))),
        _ => false,
    }
}

fn is_scalar(value: &Value) -> bool {
    !value.is_array() && !value.is_object()
}

/// Containment with Postgres `jsonb @>` semantics.
///
/// Objects contain every key of the filter with a contained value, arrays
/// contain every filter element somewhere, numbers compare by value. Below
/// the top level an array never contains a bare scalar.
pub fn contains(document: &Value, filter: &Value) -> bool {
    match (document, filter) {
        (Value::Object(doc), Value::Object(want)) => want
            .iter()
            .all(|(key, value)| doc.get(key).is_some_and(|have| contains(have, value))),
        (Value::Array(doc), Value::Array(want)) => want.iter().all(|value| {
            doc.iter().any(|have| {
                // Scalars only match scalars; they never reach into nested arrays.
                (!is_scalar(value) || is_scalar(have)) && contains(have, value)
            })
        }),
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        (a, b) => a == b,
    }
}
