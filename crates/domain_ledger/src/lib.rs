//! Ledger Domain - Chart of Accounts and Financial Reports
//!
//! Reports here are pure folds over an [`AccountRegistry`]: a read-only list
//! of named accounts, each with a type, a free-text category tag and a signed
//! balance. There are no postings; every figure is re-derived from current
//! balances on each call.
//!
//! # Sign convention
//!
//! A positive balance sits on the account type's normal side:
//! - Debit normal: Asset, Expense, Contra-Income, Contra-Expense
//! - Credit normal: Liability, Equity, Income, Contra-Asset
//!
//! A negative balance moves to the opposite column as a magnitude.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_ledger::{AccountRegistry, TrialBalance};
//!
//! let registry = AccountRegistry::sample(Currency::BDT);
//! let tb = TrialBalance::generate(&registry);
//! if let Some(warning) = tb.imbalance_warning() {
//!     eprintln!("{}", warning);
//! }
//! ```

pub mod account;
pub mod registry;
pub mod trial_balance;
pub mod owners_equity;
pub mod cash_flow;
pub mod income_statement;
pub mod balance_sheet;
pub mod reconciliation;
pub mod error;

pub use account::{Account, AccountType, NormalSide, categories};
pub use registry::AccountRegistry;
pub use trial_balance::{TrialBalance, TrialBalanceRow};
pub use owners_equity::OwnersEquity;
pub use cash_flow::{CashFlowStatement, CashFlowLine};
pub use income_statement::IncomeStatement;
pub use balance_sheet::{BalanceSheet, BalanceSheetLine};
pub use reconciliation::{ReconciliationResult, ReconciliationReport, DifferenceStyle};
pub use error::LedgerError;
