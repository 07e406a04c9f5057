//! The account registry consumed by every report
//!
//! The registry is owned by whoever supplies it (the built-in sample chart, a
//! stored `accounts` collection, or an external ledger). Reports only read it.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashSet;

use core_kernel::{Currency, Money};

use crate::account::{categories, Account, AccountType};
use crate::error::LedgerError;

/// A read-only chart of accounts with current balances
#[derive(Debug, Clone)]
pub struct AccountRegistry {
    currency: Currency,
    accounts: Vec<Account>,
}

impl AccountRegistry {
    /// Creates a registry, rejecting duplicate ids and blank names
    pub fn new(currency: Currency, accounts: Vec<Account>) -> Result<Self, LedgerError> {
        let mut seen = HashSet::new();
        for account in &accounts {
            if account.name.trim().is_empty() {
                return Err(LedgerError::InvalidAccount(format!(
                    "account {} has no name",
                    account.id
                )));
            }
            if !seen.insert(account.id) {
                return Err(LedgerError::DuplicateAccount(account.id.to_string()));
            }
        }
        Ok(Self { currency, accounts })
    }

    /// The built-in demonstration chart of accounts
    ///
    /// Balances are chosen so the trial balance and balance sheet agree.
    pub fn sample(currency: Currency) -> Self {
        use AccountType::*;

        let accounts = vec![
            Account::new("Cash in Hand", Asset, categories::CASH, dec!(50000)),
            Account::new("City Bank Current Account", Asset, categories::BANK, dec!(250000)),
            Account::new("Accounts Receivable", Asset, "Receivable", dec!(80000)),
            Account::new("Inventory", Asset, "Inventory", dec!(120000)),
            Account::new("Office Equipment", Asset, categories::FIXED_ASSET, dec!(150000)),
            Account::new("Furniture & Fixtures", Asset, categories::FIXED_ASSET, dec!(60000)),
            Account::new("Accumulated Depreciation - Equipment", ContraAsset, "Accumulated Depreciation", dec!(30000)),
            Account::new("Accounts Payable", Liability, categories::PAYABLE, dec!(70000)),
            Account::new("Bank Loan", Liability, categories::PAYABLE, dec!(200000)),
            Account::new("VAT Payable", Liability, "Tax", dec!(12000)),
            Account::new(categories::OWNERS_CAPITAL, Equity, "Capital", dec!(313000)),
            Account::new(categories::OWNERS_DRAWINGS, Equity, "Drawings", dec!(-25000)),
            Account::new("Sales Revenue", Income, "Sales", dec!(400000)),
            Account::new("Service Income", Income, "Sales", dec!(60000)),
            Account::new("Sales Returns", ContraIncome, "Sales", dec!(10000)),
            Account::new("Cost of Goods Sold", Expense, "Direct Cost", dec!(180000)),
            Account::new("Salary Expense", Expense, "Payroll", dec!(90000)),
            Account::new("Rent Expense", Expense, "Operating", dec!(36000)),
            Account::new("Utilities Expense", Expense, "Operating", dec!(9000)),
            Account::new("Depreciation Expense", Expense, "Operating", dec!(30000)),
            Account::new("Purchase Returns", ContraExpense, "Direct Cost", dec!(-5000)),
        ];

        Self { currency, accounts }
    }

    /// Registry currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// All accounts in registry order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Accounts of one type, in registry order
    pub fn of_type(&self, account_type: AccountType) -> impl Iterator<Item = &Account> {
        self.accounts.iter().filter(move |a| a.account_type == account_type)
    }

    /// Accounts carrying a category tag (case-insensitive)
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Account> {
        self.accounts.iter().filter(move |a| a.has_category(category))
    }

    /// Signed sum of balances for one account type
    pub fn sum_of_type(&self, account_type: AccountType) -> Decimal {
        self.of_type(account_type).map(|a| a.balance).sum()
    }

    /// Sum of balances of every account whose name matches exactly
    ///
    /// Missing names contribute zero.
    pub fn balance_named(&self, name: &str) -> Decimal {
        self.accounts
            .iter()
            .filter(|a| a.name == name)
            .map(|a| a.balance)
            .sum()
    }

    /// Income minus expenses, without contra adjustments
    pub fn simple_net_income(&self) -> Decimal {
        self.sum_of_type(AccountType::Income) - self.sum_of_type(AccountType::Expense)
    }

    /// Wraps an amount in the registry currency
    pub fn money(&self, amount: Decimal) -> Money {
        Money::new(amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_covers_every_type() {
        let registry = AccountRegistry::sample(Currency::BDT);
        for account_type in AccountType::ALL {
            assert!(
                registry.of_type(account_type).next().is_some(),
                "sample chart has no {} account",
                account_type
            );
        }
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let account = Account::new("Cash", AccountType::Asset, categories::CASH, dec!(1));
        let result = AccountRegistry::new(Currency::BDT, vec![account.clone(), account]);
        assert!(matches!(result, Err(LedgerError::DuplicateAccount(_))));
    }

    #[test]
    fn test_rejects_blank_names() {
        let account = Account::new("  ", AccountType::Asset, categories::CASH, dec!(1));
        let result = AccountRegistry::new(Currency::BDT, vec![account]);
        assert!(matches!(result, Err(LedgerError::InvalidAccount(_))));
    }

    #[test]
    fn test_balance_named_sums_duplicates_and_defaults_to_zero() {
        let registry = AccountRegistry::new(
            Currency::USD,
            vec![
                Account::new(categories::OWNERS_CAPITAL, AccountType::Equity, "", dec!(600)),
                Account::new(categories::OWNERS_CAPITAL, AccountType::Equity, "", dec!(400)),
            ],
        )
        .unwrap();

        assert_eq!(registry.balance_named(categories::OWNERS_CAPITAL), dec!(1000));
        assert_eq!(registry.balance_named(categories::OWNERS_DRAWINGS), Decimal::ZERO);
    }
}
