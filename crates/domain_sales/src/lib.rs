//! Sales Domain - Customers, Estimates and Sales Orders
//!
//! All three are plain records kept in named collections and edited through
//! [`core_kernel::RecordController`]. Forms take raw string input the way a
//! user types it. Only the name-like required field can reject a submission:
//! amounts that fail to parse become zero and bad dates are left blank.
//!
//! # Line item arithmetic
//!
//! ```text
//! subtotal = quantity x rate
//! discount = subtotal x discount rate
//! tax      = (subtotal - discount) x tax rate
//! total    = subtotal - discount + tax
//! ```
//!
//! A document's overall total is the sum of its line totals and is always
//! recomputed from the items, never trusted from input.

pub mod customer;
pub mod document;
pub mod estimate;
pub mod sales_order;

pub use customer::{Customer, CustomerForm};
pub use document::{
    committed_total, CustomerRef, DocumentDates, DocumentForm, LineItem, LineItemForm,
    SalesDocument,
};
pub use estimate::Estimate;
pub use sales_order::SalesOrder;
