//! Inventory domain errors

use thiserror::Error;

/// Errors that can occur in the inventory domain
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The product has no unit with this name
    #[error("Product {product} has no unit named {unit}")]
    UnknownUnit { product: String, unit: String },

    /// Conversion needs a base unit and none is flagged
    #[error("Product {0} has no base unit")]
    NoBaseUnit(String),

    /// Unit factors must be positive
    #[error("Invalid unit factor for {unit}: {factor}")]
    InvalidFactor { unit: String, factor: String },
}
