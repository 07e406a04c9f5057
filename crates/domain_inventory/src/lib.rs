//! Inventory Domain - Products and Stock Valuation
//!
//! Products are either physical stock or services. Services never hold a
//! quantity; their opening quantity is [`OpeningQuantity::Unbounded`] and
//! they are left out of the stock report entirely.

pub mod product;
pub mod stock_report;
pub mod error;

pub use product::{Product, ProductType, OpeningQuantity, Unit};
pub use stock_report::{StockReport, StockRow, NOT_APPLICABLE};
pub use error::InventoryError;
