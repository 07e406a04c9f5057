//! Test Data Builders
//!
//! Builders let tests name only the accounts, products or items they care
//! about.

use rust_decimal::Decimal;

use core_kernel::{Currency, Rate};
use domain_inventory::{OpeningQuantity, Product};
use domain_ledger::{Account, AccountRegistry, AccountType};
use domain_sales::{CustomerRef, DocumentDates, Estimate, LineItem, SalesDocument};

use crate::fixtures::DateFixtures;

/// Builder for account registries
pub struct TestRegistryBuilder {
    currency: Currency,
    accounts: Vec<Account>,
}

impl Default for TestRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRegistryBuilder {
    pub fn new() -> Self {
        Self {
            currency: Currency::BDT,
            accounts: Vec::new(),
        }
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Adds an account with no category
    pub fn with_account(self, name: &str, account_type: AccountType, balance: Decimal) -> Self {
        self.with_categorized(name, account_type, "", balance)
    }

    pub fn with_categorized(
        mut self,
        name: &str,
        account_type: AccountType,
        category: &str,
        balance: Decimal,
    ) -> Self {
        self.accounts
            .push(Account::new(name, account_type, category, balance));
        self
    }

    pub fn build(self) -> AccountRegistry {
        AccountRegistry::new(self.currency, self.accounts).expect("builder produced invalid registry")
    }
}

/// Builder for products
pub struct TestProductBuilder {
    product: Product,
}

impl TestProductBuilder {
    pub fn stock(name: &str) -> Self {
        Self {
            product: Product::new_stock(name, "pcs", Decimal::ONE, Decimal::ONE, Decimal::ZERO),
        }
    }

    pub fn service(name: &str) -> Self {
        Self {
            product: Product::new_service(name, Decimal::ONE),
        }
    }

    pub fn with_costing_price(mut self, price: Decimal) -> Self {
        self.product.costing_price = price;
        self
    }

    pub fn with_quantity(mut self, quantity: Decimal) -> Self {
        self.product.opening_quantity = OpeningQuantity::Finite(quantity);
        self
    }

    pub fn unbounded(mut self) -> Self {
        self.product.opening_quantity = OpeningQuantity::Unbounded;
        self
    }

    pub fn build(self) -> Product {
        self.product
    }
}

/// Builder for estimates
pub struct TestEstimateBuilder {
    customer: String,
    items: Vec<LineItem>,
    draft: bool,
}

impl Default for TestEstimateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEstimateBuilder {
    pub fn new() -> Self {
        Self {
            customer: "Walk-in Customer".to_string(),
            items: Vec::new(),
            draft: true,
        }
    }

    pub fn with_customer(mut self, name: &str) -> Self {
        self.customer = name.to_string();
        self
    }

    pub fn with_item(mut self, description: &str, quantity: Decimal, rate: Decimal) -> Self {
        self.items.push(LineItem::new(description, quantity, rate));
        self
    }

    /// Adds an item with discount and tax given as percentages
    pub fn with_taxed_item(
        mut self,
        description: &str,
        quantity: Decimal,
        rate: Decimal,
        discount_pct: Decimal,
        tax_pct: Decimal,
    ) -> Self {
        self.items.push(
            LineItem::new(description, quantity, rate)
                .with_discount(Rate::from_percentage(discount_pct))
                .with_tax(Rate::from_percentage(tax_pct)),
        );
        self
    }

    pub fn finalized(mut self) -> Self {
        self.draft = false;
        self
    }

    pub fn build(self) -> Estimate {
        let mut estimate = Estimate::new(
            CustomerRef::named(self.customer),
            DocumentDates::issued(DateFixtures::mid_year()),
            self.items,
        );
        if !self.draft {
            estimate.finalize();
        }
        estimate
    }
}
