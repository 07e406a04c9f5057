//! Pieces shared by estimates and sales orders

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;
use tracing::warn;
use validator::{ValidationError, ValidationErrors};

use core_kernel::{parse_amount, CustomerId, Rate};

/// A priced line on a sales document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    pub quantity: Decimal,
    #[serde(default)]
    pub unit: String,
    pub rate: Decimal,
    #[serde(default)]
    pub discount: Rate,
    #[serde(default)]
    pub tax: Rate,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: Decimal, rate: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit: String::new(),
            rate,
            discount: Rate::default(),
            tax: Rate::default(),
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_discount(mut self, discount: Rate) -> Self {
        self.discount = discount;
        self
    }

    pub fn with_tax(mut self, tax: Rate) -> Self {
        self.tax = tax;
        self
    }

    pub fn subtotal(&self) -> Decimal {
        self.quantity * self.rate
    }

    pub fn discount_amount(&self) -> Decimal {
        self.discount.of(self.subtotal())
    }

    /// Tax is charged on the discounted amount
    pub fn tax_amount(&self) -> Decimal {
        self.tax.of(self.subtotal() - self.discount_amount())
    }

    pub fn total(&self) -> Decimal {
        self.subtotal() - self.discount_amount() + self.tax_amount()
    }
}

/// Who a document is addressed to
///
/// The id is absent when the customer was typed in rather than picked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRef {
    #[serde(default)]
    pub id: Option<CustomerId>,
    pub name: String,
}

impl CustomerRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

/// Document dates
///
/// `due_date` is the valid-until date on an estimate and the expected
/// delivery date on a sales order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDates {
    pub issue_date: NaiveDate,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub reference: String,
}

impl DocumentDates {
    pub fn issued(issue_date: NaiveDate) -> Self {
        Self {
            issue_date,
            due_date: None,
            reference: String::new(),
        }
    }
}

/// Behaviour common to estimates and sales orders
pub trait SalesDocument {
    fn customer(&self) -> &CustomerRef;
    fn items(&self) -> &[LineItem];
    fn overall_total(&self) -> Decimal;
    fn is_draft(&self) -> bool;

    /// Recomputes the overall total from the line items
    fn recompute_total(&mut self);

    /// Clears the draft flag
    fn finalize(&mut self);
}

/// Sum of overall totals, skipping drafts
pub fn committed_total<D: SalesDocument>(documents: &[D]) -> Decimal {
    documents
        .iter()
        .filter(|d| !d.is_draft())
        .map(|d| d.overall_total())
        .sum()
}

/// Parses an optional `YYYY-MM-DD` form field
///
/// Unparseable input is logged and treated as left blank.
pub(crate) fn parse_form_date(field: &'static str, value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            warn!(field, value, "ignoring unparseable date");
            None
        }
    }
}

pub(crate) fn items_total(items: &[LineItem]) -> Decimal {
    items.iter().map(LineItem::total).sum()
}

pub(crate) fn validate_customer(customer: &CustomerRef) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if customer.name.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some(Cow::Borrowed("customer name is required"));
        errors.add("customer", error);
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Raw line item input; discount and tax are percentages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineItemForm {
    pub description: String,
    pub quantity: String,
    pub unit: String,
    pub rate: String,
    pub discount: String,
    pub tax: String,
}

impl LineItemForm {
    fn is_blank(&self) -> bool {
        self.description.trim().is_empty() && parse_amount(&self.quantity).is_zero()
    }

    fn build(&self) -> LineItem {
        LineItem {
            description: self.description.trim().to_string(),
            quantity: parse_amount(&self.quantity),
            unit: self.unit.trim().to_string(),
            rate: parse_amount(&self.rate),
            discount: Rate::from_percentage(parse_amount(&self.discount)),
            tax: Rate::from_percentage(parse_amount(&self.tax)),
        }
    }
}

/// Raw estimate or sales order input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentForm {
    pub customer_id: String,
    pub customer_name: String,
    pub issue_date: String,
    pub due_date: String,
    pub reference: String,
    pub notes: String,
    pub items: Vec<LineItemForm>,
    pub is_draft: bool,
}

impl DocumentForm {
    /// Parses the header and items; blank item rows are dropped
    ///
    /// A missing or unparseable issue date means today. A customer id that
    /// does not parse leaves the document addressed by name only.
    pub(crate) fn parts(&self) -> (CustomerRef, DocumentDates, Vec<LineItem>) {
        let id = match self.customer_id.trim() {
            "" => None,
            raw => CustomerId::from_str(raw)
                .map_err(|_| warn!(customer_id = raw, "ignoring unparseable customer id"))
                .ok(),
        };
        let customer = CustomerRef {
            id,
            name: self.customer_name.clone(),
        };

        let issue_date = parse_form_date("issueDate", &self.issue_date)
            .unwrap_or_else(|| Local::now().date_naive());
        let dates = DocumentDates {
            issue_date,
            due_date: parse_form_date("dueDate", &self.due_date),
            reference: self.reference.trim().to_string(),
        };

        let items = self
            .items
            .iter()
            .filter(|item| !item.is_blank())
            .map(LineItemForm::build)
            .collect();

        (customer, dates, items)
    }
}

/// Implements construction, validation and persistence for a document type
macro_rules! impl_sales_document {
    ($doc:ident, $id:ty, $collection:expr, $entity:expr) => {
        impl $doc {
            /// Creates a draft with its total computed from the items
            pub fn new(
                customer: $crate::document::CustomerRef,
                dates: $crate::document::DocumentDates,
                items: Vec<$crate::document::LineItem>,
            ) -> Self {
                let overall_total = $crate::document::items_total(&items);
                Self {
                    id: <$id>::new(),
                    customer,
                    dates,
                    items,
                    overall_total,
                    is_draft: true,
                    notes: String::new(),
                }
            }

            /// Builds a new document from form input
            pub fn from_form(form: &$crate::document::DocumentForm) -> Self {
                let (customer, dates, items) = form.parts();
                let mut document = Self::new(customer, dates, items);
                document.is_draft = form.is_draft;
                document.notes = form.notes.trim().to_string();
                tracing::debug!(
                    entity = $entity,
                    items = document.items.len(),
                    total = %document.overall_total,
                    "document built from form"
                );
                document
            }
        }

        impl $crate::document::SalesDocument for $doc {
            fn customer(&self) -> &$crate::document::CustomerRef {
                &self.customer
            }

            fn items(&self) -> &[$crate::document::LineItem] {
                &self.items
            }

            fn overall_total(&self) -> rust_decimal::Decimal {
                self.overall_total
            }

            fn is_draft(&self) -> bool {
                self.is_draft
            }

            fn recompute_total(&mut self) {
                self.overall_total = $crate::document::items_total(&self.items);
            }

            fn finalize(&mut self) {
                self.is_draft = false;
            }
        }

        impl validator::Validate for $doc {
            fn validate(&self) -> Result<(), validator::ValidationErrors> {
                $crate::document::validate_customer(&self.customer)
            }
        }

        impl core_kernel::Record for $doc {
            type Id = $id;
            const COLLECTION: &'static str = $collection;
            const ENTITY: &'static str = $entity;

            fn id(&self) -> $id {
                self.id
            }

            fn normalize(&mut self) {
                self.customer.name = self.customer.name.trim().to_string();
                $crate::document::SalesDocument::recompute_total(self);
            }
        }
    };
}

pub(crate) use impl_sales_document;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_line_item_discount_then_tax() {
        let item = LineItem::new("Rice", dec!(10), dec!(100))
            .with_discount(Rate::from_percentage(dec!(10)))
            .with_tax(Rate::from_percentage(dec!(15)));

        assert_eq!(item.subtotal(), dec!(1000));
        assert_eq!(item.discount_amount(), dec!(100));
        assert_eq!(item.tax_amount(), dec!(135));
        assert_eq!(item.total(), dec!(1035));
    }

    #[test]
    fn test_form_parts_drop_blank_rows() {
        let form = DocumentForm {
            customer_name: "Karim".to_string(),
            issue_date: "2024-03-01".to_string(),
            items: vec![
                LineItemForm {
                    description: "Paper".to_string(),
                    quantity: "2".to_string(),
                    rate: "480".to_string(),
                    tax: "5".to_string(),
                    ..Default::default()
                },
                LineItemForm::default(),
            ],
            ..Default::default()
        };

        let (customer, dates, items) = form.parts();
        assert_eq!(customer, CustomerRef::named("Karim"));
        assert_eq!(dates.issue_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].total(), dec!(1008));
    }

    #[test]
    fn test_bad_customer_id_falls_back_to_name_only() {
        let form = DocumentForm {
            customer_id: "not-an-id".to_string(),
            customer_name: "Karim".to_string(),
            ..Default::default()
        };
        let (customer, _, _) = form.parts();
        assert_eq!(customer, CustomerRef::named("Karim"));
    }

    #[test]
    fn test_bad_dates_fall_back() {
        let form = DocumentForm {
            customer_name: "Karim".to_string(),
            issue_date: "01/03/2024".to_string(),
            due_date: "soon".to_string(),
            ..Default::default()
        };
        let (_, dates, _) = form.parts();
        assert_eq!(dates.issue_date, Local::now().date_naive());
        assert_eq!(dates.due_date, None);
    }

    #[test]
    fn test_form_date_parsing() {
        assert_eq!(parse_form_date("dueDate", " 2024-06-30 "), NaiveDate::from_ymd_opt(2024, 6, 30));
        assert_eq!(parse_form_date("dueDate", "2024-02-30"), None);
        assert_eq!(parse_form_date("dueDate", ""), None);
    }

    #[test]
    fn test_blank_customer_fails_validation() {
        assert!(validate_customer(&CustomerRef::named("  ")).is_err());
        assert!(validate_customer(&CustomerRef::named("Karim")).is_ok());
    }
}
