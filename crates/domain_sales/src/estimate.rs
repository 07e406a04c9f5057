//! Estimates (quotations)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::EstimateId;

use crate::document::{impl_sales_document, CustomerRef, DocumentDates, LineItem};

/// A priced quotation sent to a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    pub id: EstimateId,
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

impl_sales_document!(Estimate, EstimateId, "estimates", "Estimate");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{committed_total, DocumentForm, LineItemForm, SalesDocument};
    use chrono::NaiveDate;
    use core_kernel::Record;
    use rust_decimal_macros::dec;
    use validator::Validate;

    fn dates() -> DocumentDates {
        DocumentDates::issued(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
    }

    #[test]
    fn test_new_estimate_is_draft_with_total() {
        let estimate = Estimate::new(
            CustomerRef::named("Karim"),
            dates(),
            vec![
                LineItem::new("Paper", dec!(2), dec!(480)),
                LineItem::new("Pens", dec!(10), dec!(15)),
            ],
        );

        assert!(estimate.is_draft());
        assert_eq!(estimate.overall_total(), dec!(1110));
    }

    #[test]
    fn test_normalize_overrides_tampered_total() {
        let mut estimate = Estimate::new(
            CustomerRef::named(" Karim "),
            dates(),
            vec![LineItem::new("Paper", dec!(1), dec!(480))],
        );
        estimate.overall_total = dec!(1);

        estimate.normalize();

        assert_eq!(estimate.overall_total, dec!(480));
        assert_eq!(estimate.customer.name, "Karim");
    }

    #[test]
    fn test_missing_customer_is_rejected() {
        let estimate = Estimate::new(CustomerRef::named(""), dates(), vec![]);
        assert!(estimate.validate().is_err());
    }

    #[test]
    fn test_committed_total_skips_drafts() {
        let draft = Estimate::new(
            CustomerRef::named("A"),
            dates(),
            vec![LineItem::new("x", dec!(1), dec!(100))],
        );
        let mut sent = Estimate::new(
            CustomerRef::named("B"),
            dates(),
            vec![LineItem::new("y", dec!(1), dec!(250))],
        );
        sent.finalize();

        assert_eq!(committed_total(&[draft, sent]), dec!(250));
    }

    #[test]
    fn test_stored_shape_uses_date_details() {
        let estimate = Estimate::new(
            CustomerRef::named("Karim"),
            dates(),
            vec![LineItem::new("Paper", dec!(1), dec!(480))],
        );

        let value = serde_json::to_value(&estimate).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort();

        assert_eq!(
            keys,
            vec!["customer", "dateDetails", "id", "isDraft", "items", "notes", "overallTotal"]
        );
        assert_eq!(value["dateDetails"]["issueDate"], "2024-05-01");

        let back: Estimate = serde_json::from_value(value).unwrap();
        assert_eq!(back, estimate);
    }

    #[test]
    fn test_from_form_carries_draft_flag() {
        let form = DocumentForm {
            customer_name: "Karim".to_string(),
            issue_date: "2024-05-01".to_string(),
            is_draft: true,
            items: vec![LineItemForm {
                description: "Paper".to_string(),
                quantity: "3".to_string(),
                rate: "100".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let estimate = Estimate::from_form(&form);
        assert!(estimate.is_draft);
        assert_eq!(estimate.overall_total, dec!(300));
    }
}
