//! JSON collection adapter
//!
//! Implements [`CollectionPort`] by serializing the whole collection as one
//! JSON array under a single key.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, warn};

use core_kernel::{CollectionPort, DomainPort, PortError};

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// A collection of `T` stored as a JSON array under one key
pub struct JsonCollection<T> {
    store: Arc<dyn KeyValueStore>,
    key: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonCollection<T> {
    /// Binds a collection to `key` in `store`
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            _marker: PhantomData,
        }
    }
}

impl<T: 'static> DomainPort for JsonCollection<T> {}

#[async_trait]
impl<T> CollectionPort<T> for JsonCollection<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    fn key(&self) -> &str {
        &self.key
    }

    async fn load(&self) -> Result<Vec<T>, PortError> {
        let raw = match self.store.get(&self.key).await? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Ok(Vec::new()),
        };

        let records: Vec<T> = serde_json::from_str(&raw).map_err(|source| {
            warn!(key = %self.key, error = %source, "stored collection is malformed");
            StoreError::Malformed {
                key: self.key.clone(),
                source,
            }
        })?;

        debug!(key = %self.key, count = records.len(), "loaded collection");
        Ok(records)
    }

    async fn save_all(&self, records: &[T]) -> Result<(), PortError> {
        let encoded = serde_json::to_string(records).map_err(|source| StoreError::Encode {
            key: self.key.clone(),
            source,
        })?;
        self.store.set(&self.key, encoded).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Row {
        id: u32,
        label: String,
    }

    #[tokio::test]
    async fn test_missing_key_loads_empty() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let rows = JsonCollection::<Row>::new(store, "rows");
        assert!(rows.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_all_rewrites_whole_collection() {
        let store = MemoryStore::new();
        let rows = JsonCollection::<Row>::new(Arc::new(store.clone()), "rows");

        rows.save_all(&[Row { id: 1, label: "a".into() }, Row { id: 2, label: "b".into() }])
            .await
            .unwrap();
        rows.save_all(&[Row { id: 3, label: "c".into() }]).await.unwrap();

        assert_eq!(
            store.get("rows").await.unwrap().as_deref(),
            Some(r#"[{"id":3,"label":"c"}]"#)
        );
    }

    #[tokio::test]
    async fn test_malformed_json_is_a_transformation_error() {
        let store = MemoryStore::with_entries([("rows", "{not json")]).await;
        let rows = JsonCollection::<Row>::new(Arc::new(store), "rows");

        let err = rows.load().await.unwrap_err();
        assert!(err.is_transformation());
        assert!(err.to_string().contains("rows"));
    }
}
