//! Stock valuation report
//!
//! Only stock products produce rows. Quantity is the opening quantity and
//! value is quantity times costing price. A stock product carrying the
//! unbounded sentinel shows "N/A" and adds nothing to the totals.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use core_kernel::{format_grouped, Currency, Money, NumberGrouping, ProductId};

use crate::product::Product;

/// Placeholder shown for quantities and values that cannot be computed
pub const NOT_APPLICABLE: &str = "N/A";

/// One product line of the stock report
#[derive(Debug, Clone, Serialize)]
pub struct StockRow {
    pub product_id: ProductId,
    pub name: String,
    pub unit: Option<String>,
    pub quantity: Option<Decimal>,
    pub costing_price: Money,
    pub value: Option<Money>,
}

impl StockRow {
    pub fn quantity_display(&self, grouping: NumberGrouping) -> String {
        self.quantity
            .map(|q| format_grouped(q, grouping))
            .unwrap_or_else(|| NOT_APPLICABLE.to_string())
    }

    pub fn value_display(&self, grouping: NumberGrouping) -> String {
        self.value
            .map(|v| format_grouped(v.amount(), grouping))
            .unwrap_or_else(|| NOT_APPLICABLE.to_string())
    }
}

/// Stock report with totals
#[derive(Debug, Clone, Serialize)]
pub struct StockReport {
    pub rows: Vec<StockRow>,
    pub total_quantity: Decimal,
    pub total_value: Money,
}

impl StockReport {
    /// Values every stock product in catalogue order
    pub fn generate(products: &[Product], currency: Currency) -> Self {
        let rows: Vec<StockRow> = products
            .iter()
            .filter(|p| p.is_stock())
            .map(|p| {
                let quantity = p.opening_quantity.finite();
                StockRow {
                    product_id: p.id,
                    name: p.name.clone(),
                    unit: p.base_unit().map(|u| u.name.clone()),
                    quantity,
                    costing_price: Money::new(p.costing_price, currency),
                    value: quantity.map(|q| Money::new(q * p.costing_price, currency)),
                }
            })
            .collect();

        let total_quantity: Decimal = rows.iter().filter_map(|r| r.quantity).sum();
        let total_value: Decimal = rows.iter().filter_map(|r| r.value).map(|v| v.amount()).sum();

        debug!(
            products = products.len(),
            rows = rows.len(),
            %total_value,
            "stock report generated"
        );

        Self {
            rows,
            total_quantity,
            total_value: Money::new(total_value, currency),
        }
    }

    pub fn total_quantity_display(&self, grouping: NumberGrouping) -> String {
        format_grouped(self.total_quantity, grouping)
    }

    pub fn total_value_display(&self, grouping: NumberGrouping) -> String {
        format_grouped(self.total_value.amount(), grouping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{OpeningQuantity, ProductType};
    use rust_decimal_macros::dec;

    #[test]
    fn test_values_stock_products() {
        let products = vec![
            Product::new_stock("Rice", "kg", dec!(62), dec!(70), dec!(1200)),
            Product::new_stock("Oil", "bottle", dec!(780.50), dec!(850), dec!(3)),
        ];

        let report = StockReport::generate(&products, Currency::BDT);

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.total_quantity, dec!(1203));
        assert_eq!(report.total_value.amount(), dec!(76741.50));
        assert_eq!(report.total_value_display(NumberGrouping::Standard), "76,741.50");
        assert_eq!(report.rows[0].quantity_display(NumberGrouping::Standard), "1,200.00");
    }

    #[test]
    fn test_services_are_left_out_even_with_quantity() {
        let mut service = Product::new_service("Delivery", dec!(100));
        service.opening_quantity = OpeningQuantity::Finite(dec!(999));
        service.costing_price = dec!(10);

        let report = StockReport::generate(
            &[service, Product::new_stock("Paper", "ream", dec!(400), dec!(480), dec!(5))],
            Currency::BDT,
        );

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.total_quantity, dec!(5));
        assert_eq!(report.total_value.amount(), dec!(2000));
    }

    #[test]
    fn test_unbounded_stock_product_shows_not_applicable() {
        let mut odd = Product::new_stock("Water", "litre", dec!(1), dec!(2), dec!(0));
        odd.opening_quantity = OpeningQuantity::Unbounded;
        assert_eq!(odd.product_type, ProductType::Stock);

        let report = StockReport::generate(&[odd], Currency::BDT);

        assert_eq!(report.rows[0].quantity_display(NumberGrouping::Standard), NOT_APPLICABLE);
        assert_eq!(report.rows[0].value_display(NumberGrouping::Standard), NOT_APPLICABLE);
        assert!(report.total_value.is_zero());
        assert_eq!(report.total_quantity_display(NumberGrouping::Standard), "0.00");
    }

    #[test]
    fn test_empty_catalogue() {
        let report = StockReport::generate(&[], Currency::USD);
        assert!(report.rows.is_empty());
        assert!(report.total_value.is_zero());
    }
}
