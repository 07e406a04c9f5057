//! Bank reconciliation report
//!
//! Matching statement lines to book entries happens elsewhere; this module
//! only derives the summary figures from a finished result and decides how
//! the difference is styled.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use core_kernel::{format_grouped, Currency, Money, NumberGrouping};

/// Output of an upstream reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciliationResult {
    pub beginning_balance: Decimal,
    pub cleared_deposits: Decimal,
    pub cleared_payments: Decimal,
    pub ending_balance: Decimal,
}

/// How the difference is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DifferenceStyle {
    /// Exactly zero (rendered green)
    Balanced,
    /// Anything else (rendered red)
    OutOfBalance,
}

/// Figures shown on the reconciliation page
#[derive(Debug, Clone, Serialize)]
pub struct ReconciliationReport {
    pub beginning_balance: Money,
    pub cleared_deposits: Money,
    pub cleared_payments: Money,
    pub cleared_balance: Money,
    pub ending_balance: Money,
    pub difference: Money,
    /// Ending balance minus cleared balance before any rounding
    pub exact_difference: Decimal,
    pub style: DifferenceStyle,
}

impl ReconciliationReport {
    /// Derives cleared balance and difference from a result
    pub fn from_result(result: &ReconciliationResult, currency: Currency) -> Self {
        let cleared_balance =
            result.beginning_balance + result.cleared_deposits - result.cleared_payments;
        let difference = result.ending_balance - cleared_balance;
        let style = if difference.is_zero() {
            DifferenceStyle::Balanced
        } else {
            DifferenceStyle::OutOfBalance
        };

        Self {
            beginning_balance: Money::new(result.beginning_balance, currency),
            cleared_deposits: Money::new(result.cleared_deposits, currency),
            cleared_payments: Money::new(result.cleared_payments, currency),
            cleared_balance: Money::new(cleared_balance, currency),
            ending_balance: Money::new(result.ending_balance, currency),
            difference: Money::new(difference, currency),
            exact_difference: difference,
            style,
        }
    }

    /// Difference as printed on the report
    ///
    /// Two places normally. An out-of-balance difference too small to show
    /// at two places is printed with all of its digits so it never reads 0.00.
    pub fn difference_display(&self, grouping: NumberGrouping) -> String {
        let hidden = self
            .exact_difference
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .is_zero();
        if self.style == DifferenceStyle::OutOfBalance && hidden {
            self.exact_difference.normalize().to_string()
        } else {
            format_grouped(self.exact_difference, grouping)
        }
    }
}
