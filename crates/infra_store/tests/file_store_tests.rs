//! Tests for the file-backed store and JSON collections on disk

use std::sync::Arc;

use core_kernel::CollectionPort;
use infra_store::{keys, FileStore, JsonCollection, KeyValueStore, StoreError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Entry {
    id: u32,
    name: String,
}

mod file_store_tests {
    use super::*;

    #[tokio::test]
    async fn test_fresh_directory_has_no_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data"));

        assert!(store.keys().await.unwrap().is_empty());
        assert_eq!(store.get(keys::ESTIMATES).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_creates_one_file_per_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.set(keys::SALES_ORDERS, "[]".to_string()).await.unwrap();
        store.set(keys::CUSTOMERS, "[]".to_string()).await.unwrap();

        assert!(dir.path().join("salesOrders.json").exists());
        assert_eq!(store.keys().await.unwrap(), vec!["customers", "salesOrders"]);
    }

    #[tokio::test]
    async fn test_remove_missing_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.remove("nothing").await.unwrap();
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        let err = store.set("../escape", "{}".to_string()).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidKey(_)));
    }
}

mod collection_on_disk_tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(dir.path()));
        let entries = JsonCollection::<Entry>::new(store.clone(), "entries");

        let saved = vec![
            Entry { id: 1, name: "Cash".into() },
            Entry { id: 2, name: "Bank".into() },
        ];
        entries.save_all(&saved).await.unwrap();

        let reopened = JsonCollection::<Entry>::new(store, "entries");
        assert_eq!(reopened.load().await.unwrap(), saved);
        assert_eq!(reopened.key(), "entries");
    }

    #[tokio::test]
    async fn test_malformed_file_surfaces_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("entries.json"), "[{\"id\": }").unwrap();

        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(dir.path()));
        let entries = JsonCollection::<Entry>::new(store, "entries");

        assert!(entries.load().await.unwrap_err().is_transformation());
    }
}
