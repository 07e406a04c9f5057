//! Storage error types

use core_kernel::PortError;
use thiserror::Error;

/// Errors that can occur while reading or writing stored collections
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem access failed
    #[error("I/O error on key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The stored value under a key is not valid JSON for the expected shape
    #[error("Malformed data under key '{key}': {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A collection could not be encoded
    #[error("Failed to encode key '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Key contains characters that cannot map to a file name
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

impl StoreError {
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io { key: key.into(), source }
    }
}

impl From<StoreError> for PortError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Io { key, source } => PortError::Connection {
                message: format!("storage unavailable for key '{}'", key),
                source: Some(Box::new(source)),
            },
            StoreError::Malformed { .. } | StoreError::Encode { .. } => {
                PortError::transformation(err.to_string())
            }
            StoreError::InvalidKey(key) => {
                PortError::validation_field(format!("invalid storage key '{}'", key), "key")
            }
        }
    }
}
