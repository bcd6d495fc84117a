//! In-process document store.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::collection::Collection;
use crate::errors::StoreError;
use crate::store::{
    DocumentId, DocumentStore, StoredDocument, body_contains, check_filter, into_object,
};

#[derive(Debug, Default)]
struct Inner {
    next_id: DocumentId,
    collections: HashMap<Collection, Vec<StoredDocument>>,
}

/// A [`DocumentStore`] held in memory. Ids are shared across collections and
/// start at 1.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    inner: RwLock<Inner>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Inner {
    fn push(&mut self, collection: Collection, document: Value) -> Result<DocumentId, StoreError> {
        let body = into_object(collection, document)?;
        self.next_id += 1;
        let id = self.next_id;
        self.collections
            .entry(collection)
            .or_default()
            .push(StoredDocument {
                id,
                collection,
                body,
            });
        Ok(id)
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert_one(
        &self,
        collection: Collection,
        document: Value,
    ) -> Result<DocumentId, StoreError> {
        self.inner.write().await.push(collection, document)
    }

    async fn insert_many(
        &self,
        collection: Collection,
        documents: Vec<Value>,
    ) -> Result<Vec<DocumentId>, StoreError> {
        // All or nothing: a bad document leaves the collection untouched.
        let bodies = documents
            .into_iter()
            .map(|d| into_object(collection, d))
            .collect::<Result<Vec<_>, _>>()?;

        let mut inner = self.inner.write().await;
        let mut ids = Vec::with_capacity(bodies.len());
        for body in bodies {
            ids.push(inner.push(collection, Value::Object(body))?);
        }
        Ok(ids)
    }

    async fn find(
        &self,
        collection: Collection,
        filter: &Value,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        check_filter(filter)?;
        let inner = self.inner.read().await;
        let Some(docs) = inner.collections.get(&collection) else {
            return Ok(Vec::new());
        };
        let found = docs
            .iter()
            .filter(|d| body_contains(&d.body, filter))
            .cloned()
            .collect();
        Ok(found)
    }

    async fn count(&self, collection: Collection) -> Result<u64, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .collections
            .get(&collection)
            .map_or(0, |docs| docs.len() as u64))
    }

    async fn clear(&self, collection: Collection) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner
            .collections
            .remove(&collection)
            .map_or(0, |docs| docs.len() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BlockListEntry, BlockListType, User, UserStatus};
    use crate::store::{find_records, insert_record};
    use serde_json::json;

    #[tokio::test]
    async fn test_insert_many_preserves_order() {
        let store = MemoryDocumentStore::new();
        let ids = store
            .insert_many(
                Collection::BlockList,
                vec![json!({"domain": "a"}), json!({"domain": "b"})],
            )
            .await
            .unwrap();

        assert_eq!(ids, vec![1, 2]);
        let docs = store.find(Collection::BlockList, &json!({})).await.unwrap();
        let domains: Vec<_> = docs.iter().map(|d| d.body["domain"].clone()).collect();
        assert_eq!(domains, vec![json!("a"), json!("b")]);
    }

    #[tokio::test]
    async fn test_duplicates_are_kept() {
        let store = MemoryDocumentStore::new();
        let doc = json!({"user_id": 1, "user_status": 2});
        store.insert_one(Collection::User, doc.clone()).await.unwrap();
        store.insert_one(Collection::User, doc).await.unwrap();

        assert_eq!(store.count(Collection::User).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_insert_many_rejects_without_partial_write() {
        let store = MemoryDocumentStore::new();
        let err = store
            .insert_many(Collection::BlockList, vec![json!({"domain": "a"}), json!("b")])
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::InvalidDocument { .. }));
        assert_eq!(store.count(Collection::BlockList).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_find_one_by_domain() {
        let store = MemoryDocumentStore::new();
        for (domain, active) in [("https://facebook.com", true), ("https://youtube.com", false)] {
            let entry = BlockListEntry {
                domain: domain.to_string(),
                icon: String::new(),
                list_type: BlockListType::Other,
                is_active: active,
            };
            insert_record(&store, &entry).await.unwrap();
        }

        let found = store
            .find_one(Collection::BlockList, &json!({"domain": "https://youtube.com"}))
            .await
            .unwrap()
            .unwrap();
        let entry: BlockListEntry = found.decode().unwrap();
        assert!(!entry.is_active);

        assert!(
            store
                .find_one(Collection::BlockList, &json!({"domain": "https://x.com"}))
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let store = MemoryDocumentStore::new();
        let user = User {
            user_id: 2,
            user_status: UserStatus::Idle,
        };
        insert_record(&store, &user).await.unwrap();

        assert_eq!(store.count(Collection::FocusTimer).await.unwrap(), 0);
        let users: Vec<User> = find_records(&store, &json!({"user_id": 2})).await.unwrap();
        assert_eq!(users, vec![user]);

        assert_eq!(store.clear(Collection::User).await.unwrap(), 1);
        assert_eq!(store.count(Collection::User).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_filter_must_be_object() {
        let store = MemoryDocumentStore::new();
        let err = store.find(Collection::User, &json!([])).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidFilter));
    }
}
