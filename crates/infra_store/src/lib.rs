//! Storage Infrastructure Layer
//!
//! The bookkeeping data lives in a flat key/value space, one JSON document per
//! key, exactly like browser local storage. This crate provides:
//!
//! - [`KeyValueStore`]: the raw key/value seam
//! - [`MemoryStore`]: an in-process store for tests and demos
//! - [`FileStore`]: one `<key>.json` file per key inside a data directory
//! - [`JsonCollection`]: a [`core_kernel::CollectionPort`] over any store
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::{FileStore, JsonCollection, keys};
//!
//! let store = Arc::new(FileStore::new("./cloudbook-data"));
//! let customers = JsonCollection::<Customer>::new(store, keys::CUSTOMERS);
//! let all = customers.load().await?;
//! ```

pub mod error;
pub mod keys;
pub mod kv;
pub mod memory;
pub mod file;
pub mod collection;

pub use error::StoreError;
pub use kv::KeyValueStore;
pub use memory::MemoryStore;
pub use file::FileStore;
pub use collection::JsonCollection;
