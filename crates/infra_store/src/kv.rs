//! Key/value storage seam

use async_trait::async_trait;

use crate::error::StoreError;

/// A flat string-to-string store, read and written one whole value at a time
///
/// There is no locking across read-modify-write cycles; callers that load,
/// mutate and save may overwrite a concurrent writer.
#[async_trait]
pub trait KeyValueStore: Send + Sync + 'static {
    /// Returns the raw value under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replaces the value under `key`
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Removes `key`; removing a missing key is not an error
    async fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Lists the keys currently present, sorted
    async fn keys(&self) -> Result<Vec<String>, StoreError>;
}
