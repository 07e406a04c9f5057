//! Trial balance
//!
//! Every account's signed balance is placed in the debit or credit column by
//! its type. Accounts sharing a name are merged into one row. The grand totals
//! are expected to agree; when they do not, the report carries a warning with
//! the signed difference and nothing is corrected.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use core_kernel::Money;

use crate::account::AccountType;
use crate::registry::AccountRegistry;

/// Trial balance report
#[derive(Debug, Clone, Serialize)]
pub struct TrialBalance {
    /// One row per distinct account name, in first-seen order
    pub rows: Vec<TrialBalanceRow>,
    pub total_debit: Money,
    pub total_credit: Money,
}

/// A single row in the trial balance
#[derive(Debug, Clone, Serialize)]
pub struct TrialBalanceRow {
    pub name: String,
    /// Type of the first account seen with this name
    pub account_type: AccountType,
    pub debit: Money,
    pub credit: Money,
}

impl TrialBalance {
    /// Builds the trial balance from a registry
    pub fn generate(registry: &AccountRegistry) -> Self {
        let mut merged: Vec<(String, AccountType, Decimal, Decimal)> = Vec::new();

        for account in registry.accounts() {
            let (debit, credit) = account.debit_credit();
            match merged.iter_mut().find(|(name, ..)| *name == account.name) {
                Some(row) => {
                    row.2 += debit;
                    row.3 += credit;
                }
                None => merged.push((account.name.clone(), account.account_type, debit, credit)),
            }
        }

        let total_debit: Decimal = merged.iter().map(|r| r.2).sum();
        let total_credit: Decimal = merged.iter().map(|r| r.3).sum();

        let rows = merged
            .into_iter()
            .map(|(name, account_type, debit, credit)| TrialBalanceRow {
                name,
                account_type,
                debit: registry.money(debit),
                credit: registry.money(credit),
            })
            .collect();

        let report = Self {
            rows,
            total_debit: registry.money(total_debit),
            total_credit: registry.money(total_credit),
        };

        debug!(
            rows = report.rows.len(),
            debit = %report.total_debit,
            credit = %report.total_credit,
            "trial balance generated"
        );
        if !report.is_balanced() {
            warn!(difference = %report.difference(), "trial balance does not agree");
        }

        report
    }

    /// Total debits minus total credits
    pub fn difference(&self) -> Money {
        Money::new(
            self.total_debit.amount() - self.total_credit.amount(),
            self.total_debit.currency(),
        )
    }

    /// Returns true when debits equal credits
    pub fn is_balanced(&self) -> bool {
        self.total_debit.amount() == self.total_credit.amount()
    }

    /// Non-blocking warning text for the view when the totals disagree
    pub fn imbalance_warning(&self) -> Option<String> {
        if self.is_balanced() {
            return None;
        }
        Some(format!(
            "Trial balance is out of balance by {} (debits minus credits)",
            self.difference()
        ))
    }
}
