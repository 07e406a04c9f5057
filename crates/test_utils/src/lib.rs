//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! bookkeeping test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common entities
//! - `builders`: Builder patterns for test data construction
//! - `store`: In-memory and temp-dir backed collections
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod store;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use store::*;
pub use assertions::*;
pub use generators::*;
