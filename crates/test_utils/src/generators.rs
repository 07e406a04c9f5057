//! Property-Based Test Generators
//!
//! Proptest strategies for accounts, products and line items.

use proptest::prelude::*;
use rust_decimal::Decimal;

use domain_inventory::{OpeningQuantity, Product, ProductType};
use domain_ledger::{Account, AccountType};
use domain_sales::LineItem;

/// Strategy for any account type
pub fn account_type_strategy() -> impl Strategy<Value = AccountType> {
    proptest::sample::select(AccountType::ALL.to_vec())
}

/// Signed amounts with two decimal places
pub fn signed_amount_strategy() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Non-negative amounts with two decimal places
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Accounts with unique generated names
pub fn accounts_strategy(max: usize) -> impl Strategy<Value = Vec<Account>> {
    prop::collection::vec((account_type_strategy(), signed_amount_strategy()), 0..max).prop_map(
        |specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (account_type, balance))| {
                    Account::new(&format!("Account {}", i), account_type, "", balance)
                })
                .collect()
        },
    )
}

/// Products of either type, some with the unbounded sentinel
pub fn product_strategy() -> impl Strategy<Value = Product> {
    (
        prop_oneof![Just(ProductType::Stock), Just(ProductType::Service)],
        amount_strategy(),
        prop::option::of(0i64..100_000i64),
    )
        .prop_map(|(product_type, costing_price, quantity)| {
            let mut product = Product::new_stock("Generated", "pcs", costing_price, costing_price, Decimal::ZERO);
            product.product_type = product_type;
            product.opening_quantity = match quantity {
                Some(q) => OpeningQuantity::Finite(Decimal::from(q)),
                None => OpeningQuantity::Unbounded,
            };
            product
        })
}

/// Line items with discount and tax between 0% and 100%
pub fn line_item_strategy() -> impl Strategy<Value = LineItem> {
    (1i64..1000i64, amount_strategy(), 0u32..=100u32, 0u32..=100u32).prop_map(
        |(quantity, rate, discount, tax)| {
            LineItem::new("Generated", Decimal::from(quantity), rate)
                .with_discount(core_kernel::Rate::from_percentage(Decimal::from(discount)))
                .with_tax(core_kernel::Rate::from_percentage(Decimal::from(tax)))
        },
    )
}
