//! Sales orders

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::SalesOrderId;

use crate::document::{impl_sales_document, CustomerRef, DocumentDates, LineItem};

/// A confirmed customer order awaiting delivery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrder {
    pub id: SalesOrderId,
    pub customer: CustomerRef,
    #[serde(rename = "dateDetails")]
    pub dates: DocumentDates,
    pub items: Vec<LineItem>,
    pub overall_total: Decimal,
    #[serde(default)]
    pub is_draft: bool,
    #[serde(default)]
    pub notes: String,
}

impl_sales_document!(SalesOrder, SalesOrderId, "salesOrders", "Sales order");

impl SalesOrder {
    /// Turns an estimate into a draft order for the same customer and items
    pub fn from_estimate(estimate: &crate::estimate::Estimate) -> Self {
        let mut order = Self::new(
            estimate.customer.clone(),
            estimate.dates.clone(),
            estimate.items.clone(),
        );
        order.dates.reference = estimate.id.to_string();
        order
    }
}
