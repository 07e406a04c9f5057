//! In-memory key/value store

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// In-process store; cloning shares the same underlying map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the store with raw values
    pub async fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        {
            let mut map = store.entries.write().await;
            for (key, value) in entries {
                map.insert(key.into(), value.into());
            }
        }
        store
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut keys: Vec<String> = self.entries.read().await.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("estimates").await.unwrap(), None);

        store.set("estimates", "[]".to_string()).await.unwrap();
        assert_eq!(store.get("estimates").await.unwrap().as_deref(), Some("[]"));

        store.remove("estimates").await.unwrap();
        assert_eq!(store.get("estimates").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let store = MemoryStore::with_entries([("b", "2"), ("a", "1")]).await;
        let other = store.clone();

        other.set("c", "3".to_string()).await.unwrap();
        assert_eq!(store.keys().await.unwrap(), vec!["a", "b", "c"]);
    }
}
