//! Simplified cash flow statement
//!
//! This is a direct-method proxy built from current balances only:
//!
//! - Operating: income minus expenses, with no working-capital adjustment
//! - Investing: every Fixed Asset balance as an outflow, plus the magnitude of
//!   contra-asset accounts named "...Depreciation..." added back
//! - Financing: liability/payable accounts named "...Loan...", plus owner's
//!   capital, minus owner's drawings
//!
//! Beginning cash is the current Cash/Bank total. That stands in for a true
//! opening balance which the registry does not have.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use core_kernel::Money;

use crate::account::{categories, AccountType};
use crate::registry::AccountRegistry;

/// A contributing line in one of the cash flow sections
#[derive(Debug, Clone, Serialize)]
pub struct CashFlowLine {
    pub label: String,
    pub amount: Money,
}

/// Cash flow statement
#[derive(Debug, Clone, Serialize)]
pub struct CashFlowStatement {
    pub operating: Money,
    pub investing: Money,
    pub financing: Money,
    pub investing_lines: Vec<CashFlowLine>,
    pub financing_lines: Vec<CashFlowLine>,
    pub net_change: Money,
    pub beginning_cash: Money,
    pub ending_cash: Money,
}

impl CashFlowStatement {
    /// Builds the statement from a registry
    pub fn generate(registry: &AccountRegistry) -> Self {
        let operating = registry.simple_net_income();

        let mut investing_lines = Vec::new();
        for account in registry.in_category(categories::FIXED_ASSET) {
            investing_lines.push(line(registry, format!("Purchase of {}", account.name), -account.balance));
        }
        for account in registry
            .of_type(AccountType::ContraAsset)
            .filter(|a| a.name_contains("Depreciation"))
        {
            investing_lines.push(line(registry, format!("Add back: {}", account.name), account.balance.abs()));
        }

        let mut financing_lines = Vec::new();
        for account in registry.accounts().iter().filter(|a| {
            (a.account_type == AccountType::Liability || a.has_category(categories::PAYABLE))
                && a.name_contains("Loan")
        }) {
            financing_lines.push(line(registry, format!("Proceeds from {}", account.name), account.balance));
        }

        let capital = registry.balance_named(categories::OWNERS_CAPITAL);
        if !capital.is_zero() {
            financing_lines.push(line(registry, "Owner's capital contributions".to_string(), capital));
        }
        let drawings = registry.balance_named(categories::OWNERS_DRAWINGS).abs();
        if !drawings.is_zero() {
            financing_lines.push(line(registry, "Owner's drawings".to_string(), -drawings));
        }

        let investing = sum(&investing_lines);
        let financing = sum(&financing_lines);
        let net_change = operating + investing + financing;

        let beginning_cash: Decimal = registry
            .accounts()
            .iter()
            .filter(|a| a.has_category(categories::CASH) || a.has_category(categories::BANK))
            .map(|a| a.balance)
            .sum();
        let ending_cash = beginning_cash + net_change;

        debug!(%operating, %investing, %financing, %net_change, "cash flow generated");

        Self {
            operating: registry.money(operating),
            investing: registry.money(investing),
            financing: registry.money(financing),
            investing_lines,
            financing_lines,
            net_change: registry.money(net_change),
            beginning_cash: registry.money(beginning_cash),
            ending_cash: registry.money(ending_cash),
        }
    }
}

fn line(registry: &AccountRegistry, label: String, amount: Decimal) -> CashFlowLine {
    CashFlowLine {
        label,
        amount: registry.money(amount),
    }
}

fn sum(lines: &[CashFlowLine]) -> Decimal {
    lines.iter().map(|l| l.amount.amount()).sum()
}
