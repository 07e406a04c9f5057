//! Ports for externally owned data
//!
//! Views and controllers never touch storage directly. Each persisted
//! collection is reached through a [`CollectionPort`], so browser-style local
//! storage, a JSON data directory, or an in-memory fixture can be swapped in
//! without touching the code that reads or writes records.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ RecordController / reports   │
//! └──────────────┬───────────────┘
//!                │ CollectionPort<T>
//!       ┌────────┴─────────┐
//!       │                  │
//! ┌─────┴──────┐    ┌──────┴──────┐
//! │ MemoryStore│    │  FileStore  │   (infra_store)
//! └────────────┘    └─────────────┘
//! ```

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for port operations
///
/// Every adapter maps its own failures into this type so callers handle
/// in-memory and file-backed collections the same way.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested record was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// A validation error occurred
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// The underlying storage could not be reached
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Stored data could not be decoded or encoded
    #[error("Transformation error: {message}")]
    Transformation {
        message: String,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Creates a Validation error with field information
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a Transformation error
    pub fn transformation(message: impl Into<String>) -> Self {
        PortError::Transformation {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates the record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }

    /// Returns true if stored data was unreadable
    pub fn is_transformation(&self) -> bool {
        matches!(self, PortError::Transformation { .. })
    }
}

/// Marker trait for all ports
///
/// Ports are shared behind `Arc` and used from async code.
pub trait DomainPort: Send + Sync + 'static {}

/// A whole-collection repository for one record type
///
/// Collections are read in full and rewritten in full. There is no partial
/// update, no optimistic concurrency and no conflict detection: two writers
/// racing on the same collection simply overwrite each other.
#[async_trait]
pub trait CollectionPort<T>: DomainPort
where
    T: Send + Sync + 'static,
{
    /// Returns the storage key this collection lives under
    fn key(&self) -> &str;

    /// Loads every record in the collection; a missing collection is empty
    async fn load(&self) -> Result<Vec<T>, PortError>;

    /// Replaces the stored collection with `records`
    async fn save_all(&self, records: &[T]) -> Result<(), PortError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_not_found() {
        let error = PortError::not_found("Customer", "CUS-123");
        assert!(error.is_not_found());
        assert!(error.to_string().contains("Customer"));
        assert!(error.to_string().contains("CUS-123"));
    }

    #[test]
    fn test_port_error_validation_field() {
        let error = PortError::validation_field("name is required", "name");
        match error {
            PortError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("name")),
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn test_transformation_error() {
        let error = PortError::transformation("malformed JSON under key 'estimates'");
        assert!(error.is_transformation());
        assert!(!error.is_not_found());
    }
}
