//! Store Test Helpers
//!
//! Collections backed by a shared in-memory store, or by files in a
//! throwaway directory when a test needs to inspect what was written.

use std::sync::Arc;

use core_kernel::{CollectionPort, Record, RecordController};
use infra_store::{FileStore, JsonCollection, KeyValueStore, MemoryStore};
use tempfile::TempDir;

/// An in-memory store plus typed collections over it
#[derive(Clone, Default)]
pub struct TestStore {
    store: MemoryStore,
}

impl TestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw access for corrupting or inspecting stored JSON
    pub fn raw(&self) -> Arc<dyn KeyValueStore> {
        Arc::new(self.store.clone())
    }

    /// Collection for a record type under its own key
    pub fn collection<R: Record>(&self) -> Arc<dyn CollectionPort<R>> {
        Arc::new(JsonCollection::<R>::new(self.raw(), R::COLLECTION))
    }

    /// Controller over the record type's collection
    pub fn controller<R: Record>(&self) -> RecordController<R> {
        RecordController::new(self.collection::<R>())
    }

    /// Stores records directly, bypassing validation
    pub async fn seed<R: Record>(&self, records: &[R]) {
        self.collection::<R>()
            .save_all(records)
            .await
            .expect("seeding the memory store failed");
    }

    /// Reads the stored JSON text for a key
    pub async fn json(&self, key: &str) -> Option<String> {
        self.store.get(key).await.expect("memory store read failed")
    }
}

/// A file store rooted in a temporary directory
pub struct TempFileStore {
    pub dir: TempDir,
    pub store: Arc<FileStore>,
}

impl TempFileStore {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let store = Arc::new(FileStore::new(dir.path()));
        Self { dir, store }
    }
}

impl Default for TempFileStore {
    fn default() -> Self {
        Self::new()
    }
}
