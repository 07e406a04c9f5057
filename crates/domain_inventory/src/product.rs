//! Product and unit-of-measure model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::ProductId;

use crate::error::InventoryError;

/// Kind of product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductType {
    Stock,
    Service,
}

/// Opening quantity of a product
///
/// Stored as a number, or `null` for the unbounded sentinel carried by
/// services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Decimal>", into = "Option<Decimal>")]
pub enum OpeningQuantity {
    Finite(Decimal),
    Unbounded,
}

impl OpeningQuantity {
    /// Returns the quantity when it is finite
    pub fn finite(&self) -> Option<Decimal> {
        match self {
            OpeningQuantity::Finite(qty) => Some(*qty),
            OpeningQuantity::Unbounded => None,
        }
    }
}

impl From<Option<Decimal>> for OpeningQuantity {
    fn from(value: Option<Decimal>) -> Self {
        value.map_or(OpeningQuantity::Unbounded, OpeningQuantity::Finite)
    }
}

impl From<OpeningQuantity> for Option<Decimal> {
    fn from(value: OpeningQuantity) -> Self {
        value.finite()
    }
}

/// A unit of measure; `factor` converts one of this unit into base units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub name: String,
    pub factor: Decimal,
    #[serde(default)]
    pub is_base: bool,
}

impl Unit {
    pub fn base(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            factor: Decimal::ONE,
            is_base: true,
        }
    }

    pub fn derived(name: impl Into<String>, factor: Decimal) -> Self {
        Self {
            name: name.into(),
            factor,
            is_base: false,
        }
    }
}

/// A product in the catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub product_type: ProductType,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub costing_price: Decimal,
    pub sales_price: Decimal,
    pub opening_quantity: OpeningQuantity,
    #[serde(default)]
    pub units: Vec<Unit>,
}

impl Product {
    /// Creates a stock product with a single base unit
    pub fn new_stock(
        name: impl Into<String>,
        unit: impl Into<String>,
        costing_price: Decimal,
        sales_price: Decimal,
        opening_quantity: Decimal,
    ) -> Self {
        Self {
            id: ProductId::new(),
            product_type: ProductType::Stock,
            name: name.into(),
            costing_price,
            sales_price,
            opening_quantity: OpeningQuantity::Finite(opening_quantity),
            units: vec![Unit::base(unit)],
        }
    }

    /// Creates a service; services are always unbounded
    pub fn new_service(name: impl Into<String>, sales_price: Decimal) -> Self {
        Self {
            id: ProductId::new(),
            product_type: ProductType::Service,
            name: name.into(),
            costing_price: Decimal::ZERO,
            sales_price,
            opening_quantity: OpeningQuantity::Unbounded,
            units: Vec::new(),
        }
    }

    /// Adds a unit, rejecting non-positive factors
    pub fn with_unit(mut self, unit: Unit) -> Result<Self, InventoryError> {
        if unit.factor <= Decimal::ZERO {
            return Err(InventoryError::InvalidFactor {
                factor: unit.factor.to_string(),
                unit: unit.name,
            });
        }
        self.units.push(unit);
        Ok(self)
    }

    pub fn is_stock(&self) -> bool {
        self.product_type == ProductType::Stock
    }

    /// The unit flagged as base, if any
    pub fn base_unit(&self) -> Option<&Unit> {
        self.units.iter().find(|u| u.is_base)
    }

    /// Converts a quantity in a named unit into base units
    ///
    /// Unit names match case-insensitively.
    pub fn to_base_quantity(&self, quantity: Decimal, unit_name: &str) -> Result<Decimal, InventoryError> {
        if self.base_unit().is_none() {
            return Err(InventoryError::NoBaseUnit(self.name.clone()));
        }
        let unit = self
            .units
            .iter()
            .find(|u| u.name.eq_ignore_ascii_case(unit_name.trim()))
            .ok_or_else(|| InventoryError::UnknownUnit {
                product: self.name.clone(),
                unit: unit_name.to_string(),
            })?;
        Ok(quantity * unit.factor)
    }

    /// The built-in demonstration catalogue
    pub fn samples() -> Vec<Product> {
        use rust_decimal_macros::dec;

        let rice = Product::new_stock("Miniket Rice", "kg", dec!(62), dec!(70), dec!(1200));
        let rice = Product {
            units: vec![Unit::base("kg"), Unit::derived("Sack", dec!(50))],
            ..rice
        };

        vec![
            rice,
            Product::new_stock("Soybean Oil 5L", "bottle", dec!(780), dec!(850), dec!(150)),
            Product::new_stock("A4 Paper Ream", "ream", dec!(420), dec!(480), dec!(80)),
            Product::new_service("Home Delivery", dec!(100)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unbounded_round_trips_as_null() {
        let service = Product::new_service("Consulting", dec!(500));
        let json = serde_json::to_value(&service).unwrap();
        assert!(json["openingQuantity"].is_null());

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back.opening_quantity, OpeningQuantity::Unbounded);
    }

    #[test]
    fn test_to_base_quantity_uses_factor() {
        let product = Product::new_stock("Rice", "kg", dec!(60), dec!(70), dec!(0))
            .with_unit(Unit::derived("Sack", dec!(50)))
            .unwrap();

        assert_eq!(product.base_unit().map(|u| u.name.as_str()), Some("kg"));
        assert_eq!(product.to_base_quantity(dec!(2), "sack").unwrap(), dec!(100));
        assert_eq!(product.to_base_quantity(dec!(3), "kg").unwrap(), dec!(3));
        assert!(matches!(
            product.to_base_quantity(dec!(1), "crate"),
            Err(InventoryError::UnknownUnit { .. })
        ));
    }

    #[test]
    fn test_conversion_needs_base_unit() {
        let service = Product::new_service("Delivery", dec!(100));
        assert!(matches!(
            service.to_base_quantity(dec!(1), "trip"),
            Err(InventoryError::NoBaseUnit(_))
        ));
    }

    #[test]
    fn test_rejects_non_positive_factor() {
        let product = Product::new_stock("Rice", "kg", dec!(60), dec!(70), dec!(0));
        assert!(product.with_unit(Unit::derived("Sack", dec!(0))).is_err());
    }
}
