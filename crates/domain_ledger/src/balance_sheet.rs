//! Balance sheet
//!
//! Equity includes the current period's earnings from the income statement,
//! since income and expense accounts are never closed into capital. A
//! non-zero difference is reported and logged, never corrected.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use core_kernel::Money;

use crate::account::AccountType;
use crate::income_statement::IncomeStatement;
use crate::registry::AccountRegistry;

/// A line under one of the balance sheet sections
#[derive(Debug, Clone, Serialize)]
pub struct BalanceSheetLine {
    pub name: String,
    pub amount: Money,
}

/// Balance sheet
#[derive(Debug, Clone, Serialize)]
pub struct BalanceSheet {
    pub assets: Vec<BalanceSheetLine>,
    pub liabilities: Vec<BalanceSheetLine>,
    pub equity: Vec<BalanceSheetLine>,
    pub total_assets: Money,
    pub total_liabilities: Money,
    pub total_equity: Money,
}

impl BalanceSheet {
    /// Builds the balance sheet from a registry
    pub fn generate(registry: &AccountRegistry) -> Self {
        let mut assets = Vec::new();
        for account in registry.accounts() {
            match account.account_type {
                AccountType::Asset => assets.push(sheet_line(registry, &account.name, account.balance)),
                AccountType::ContraAsset => {
                    assets.push(sheet_line(registry, &format!("Less: {}", account.name), -account.balance))
                }
                _ => {}
            }
        }

        let liabilities: Vec<_> = registry
            .of_type(AccountType::Liability)
            .map(|a| sheet_line(registry, &a.name, a.balance))
            .collect();

        let mut equity: Vec<_> = registry
            .of_type(AccountType::Equity)
            .map(|a| sheet_line(registry, &a.name, a.balance))
            .collect();
        let earnings = IncomeStatement::generate(registry).net_income;
        equity.push(BalanceSheetLine {
            name: "Current Period Earnings".to_string(),
            amount: earnings,
        });

        let sheet = Self {
            total_assets: registry.money(total(&assets)),
            total_liabilities: registry.money(total(&liabilities)),
            total_equity: registry.money(total(&equity)),
            assets,
            liabilities,
            equity,
        };

        if !sheet.is_balanced() {
            warn!(difference = %sheet.difference(), "balance sheet does not balance");
        }
        sheet
    }

    /// Assets minus liabilities and equity
    pub fn difference(&self) -> Money {
        Money::new(
            self.total_assets.amount()
                - self.total_liabilities.amount()
                - self.total_equity.amount(),
            self.total_assets.currency(),
        )
    }

    /// Returns true when assets equal liabilities plus equity
    pub fn is_balanced(&self) -> bool {
        self.difference().is_zero()
    }
}

fn sheet_line(registry: &AccountRegistry, name: &str, amount: Decimal) -> BalanceSheetLine {
    BalanceSheetLine {
        name: name.to_string(),
        amount: registry.money(amount),
    }
}

fn total(lines: &[BalanceSheetLine]) -> Decimal {
    lines.iter().map(|l| l.amount.amount()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Account;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sample_sheet_balances() {
        let sheet = BalanceSheet::generate(&AccountRegistry::sample(Currency::BDT));

        assert_eq!(sheet.total_assets.amount(), dec!(680000));
        assert_eq!(sheet.total_liabilities.amount(), dec!(282000));
        assert_eq!(sheet.total_equity.amount(), dec!(398000));
        assert!(sheet.is_balanced());
    }

    #[test]
    fn test_unbalanced_sheet_reports_difference() {
        let registry = AccountRegistry::new(
            Currency::BDT,
            vec![
                Account::new("Cash", AccountType::Asset, "Cash", dec!(100)),
                Account::new("Loan", AccountType::Liability, "Payable", dec!(60)),
            ],
        )
        .unwrap();

        let sheet = BalanceSheet::generate(&registry);
        assert!(!sheet.is_balanced());
        assert_eq!(sheet.difference().amount(), dec!(40));
    }
}
