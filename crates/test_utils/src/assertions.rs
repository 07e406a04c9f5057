//! Custom Test Assertions
//!
//! Assertion helpers with messages that show both sides of a report.

use rust_decimal::Decimal;

use core_kernel::Money;
use domain_ledger::{BalanceSheet, TrialBalance};

/// Asserts a Money value equals an amount, ignoring scale
pub fn assert_money_eq(actual: &Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "Expected {} {}, got {}",
        actual.currency().symbol(),
        expected,
        actual
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(
        money.is_zero(),
        "Expected zero money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts the trial balance totals agree
pub fn assert_trial_balance_balanced(tb: &TrialBalance) {
    assert!(
        tb.is_balanced(),
        "Trial balance out by {}: debit={}, credit={}",
        tb.difference(),
        tb.total_debit,
        tb.total_credit
    );
}

/// Asserts every trial balance row has at most one non-zero column
pub fn assert_single_column_rows(tb: &TrialBalance) {
    for row in &tb.rows {
        assert!(
            row.debit.is_zero() || row.credit.is_zero(),
            "Row {} has both debit {} and credit {}",
            row.name,
            row.debit,
            row.credit
        );
    }
}

/// Asserts assets equal liabilities plus equity
pub fn assert_balance_sheet_balanced(sheet: &BalanceSheet) {
    assert!(
        sheet.is_balanced(),
        "Balance sheet out by {}: assets={}, liabilities={}, equity={}",
        sheet.difference(),
        sheet.total_assets,
        sheet.total_liabilities,
        sheet.total_equity
    );
}
