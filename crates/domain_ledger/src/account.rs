//! Account types for the chart of accounts

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::AccountId;

/// Well-known category tags and account names the reports look for
pub mod categories {
    pub const CASH: &str = "Cash";
    pub const BANK: &str = "Bank";
    pub const FIXED_ASSET: &str = "Fixed Asset";
    pub const PAYABLE: &str = "Payable";

    pub const OWNERS_CAPITAL: &str = "Owner's Capital";
    pub const OWNERS_DRAWINGS: &str = "Owner's Drawings";
}

/// Column in which an account's positive balance appears
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalSide {
    Debit,
    Credit,
}

/// Types of accounts in the chart of accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    Asset,
    Liability,
    Equity,
    Income,
    Expense,
    /// Offsets assets (e.g. accumulated depreciation)
    ContraAsset,
    /// Offsets income (e.g. sales returns)
    ContraIncome,
    /// Offsets expenses (e.g. purchase returns)
    ContraExpense,
}

impl AccountType {
    /// All account types in chart order
    pub const ALL: [AccountType; 8] = [
        AccountType::Asset,
        AccountType::ContraAsset,
        AccountType::Liability,
        AccountType::Equity,
        AccountType::Income,
        AccountType::ContraIncome,
        AccountType::Expense,
        AccountType::ContraExpense,
    ];

    /// Returns the column a positive balance of this type belongs in
    pub fn normal_side(&self) -> NormalSide {
        match self {
            AccountType::Asset
            | AccountType::Expense
            | AccountType::ContraIncome
            | AccountType::ContraExpense => NormalSide::Debit,
            AccountType::Liability
            | AccountType::Equity
            | AccountType::Income
            | AccountType::ContraAsset => NormalSide::Credit,
        }
    }

    /// Returns true if this account type has a debit normal balance
    pub fn is_debit_normal(&self) -> bool {
        self.normal_side() == NormalSide::Debit
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Asset => "Asset",
            AccountType::Liability => "Liability",
            AccountType::Equity => "Equity",
            AccountType::Income => "Income",
            AccountType::Expense => "Expense",
            AccountType::ContraAsset => "Contra-Asset",
            AccountType::ContraIncome => "Contra-Income",
            AccountType::ContraExpense => "Contra-Expense",
        }
    }

    /// Splits a signed balance into `(debit, credit)`; at most one is non-zero
    pub fn classify(&self, balance: Decimal) -> (Decimal, Decimal) {
        let magnitude = balance.abs();
        let negative = balance.is_sign_negative() && !balance.is_zero();
        match (self.normal_side(), negative) {
            (NormalSide::Debit, false) | (NormalSide::Credit, true) => (magnitude, Decimal::ZERO),
            (NormalSide::Credit, false) | (NormalSide::Debit, true) => (Decimal::ZERO, magnitude),
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named ledger bucket with a type and signed balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Free-text tag such as "Cash", "Bank", "Fixed Asset" or "Payable"
    #[serde(default)]
    pub category: String,
    pub balance: Decimal,
}

impl Account {
    /// Creates a new account with a fresh identifier
    pub fn new(
        name: impl Into<String>,
        account_type: AccountType,
        category: impl Into<String>,
        balance: Decimal,
    ) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            account_type,
            category: category.into(),
            balance,
        }
    }

    /// Case-insensitive category match
    pub fn has_category(&self, category: &str) -> bool {
        self.category.trim().eq_ignore_ascii_case(category)
    }

    /// Case-insensitive substring match on the account name
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }

    /// Returns `(debit, credit)` for this account's balance
    pub fn debit_credit(&self) -> (Decimal, Decimal) {
        self.account_type.classify(self.balance)
    }
}
