//! Core Kernel - Foundational types shared by every bookkeeping module
//!
//! This crate provides the building blocks used across all domain crates:
//! - Money and percentage types with precise decimal arithmetic
//! - Grouped number formatting for report output
//! - Strongly-typed identifiers for persisted records
//! - The collection port that storage adapters implement
//! - A single record controller driving every list/create/edit/delete flow

pub mod money;
pub mod identifiers;
pub mod ports;
pub mod records;

pub use money::{Money, Currency, MoneyError, Rate, NumberGrouping, format_grouped, parse_amount};
pub use identifiers::{
    AccountId, ProductId, CustomerId, EmployeeId,
    EstimateId, SalesOrderId, SalarySetupId,
};
pub use ports::{PortError, DomainPort, CollectionPort};
pub use records::{Record, RecordController, RecordError, ViewState};
