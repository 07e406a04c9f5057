//! Payroll run preparation
//!
//! A run pays every active salary setup once. Figures are recomputed from
//! the components, so a stale stored gross or net never reaches a payslip.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use core_kernel::{Currency, Money, SalarySetupId};

use crate::salary::{PaymentMode, SalarySetup};

/// One employee's line in a payroll run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayslipLine {
    pub setup_id: SalarySetupId,
    pub employee_name: String,
    pub basic: Money,
    pub gross: Money,
    pub deductions: Money,
    pub net: Money,
    pub employer_contribution: Money,
    #[serde(flatten)]
    pub payment_mode: PaymentMode,
}

/// A prepared payroll run with totals
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRun {
    pub lines: Vec<PayslipLine>,
    pub total_gross: Money,
    pub total_deductions: Money,
    pub total_net: Money,
    pub total_employer_contribution: Money,
}

impl PayrollRun {
    /// Prepares a run over the active setups, in stored order
    pub fn prepare(setups: &[SalarySetup], currency: Currency) -> Self {
        let money = |amount: Decimal| Money::new(amount, currency);

        let lines: Vec<PayslipLine> = setups
            .iter()
            .filter(|s| s.is_active)
            .map(|s| PayslipLine {
                setup_id: s.id,
                employee_name: s.employee_name.clone(),
                basic: money(s.basic_salary),
                gross: money(s.gross()),
                deductions: money(s.deductions.total()),
                net: money(s.net()),
                employer_contribution: money(s.employer_contribution.total()),
                payment_mode: s.payment_mode.clone(),
            })
            .collect();

        let sum = |pick: fn(&PayslipLine) -> Money| -> Money {
            money(lines.iter().map(|l| pick(l).amount()).sum())
        };

        let run = Self {
            total_gross: sum(|l| l.gross),
            total_deductions: sum(|l| l.deductions),
            total_net: sum(|l| l.net),
            total_employer_contribution: sum(|l| l.employer_contribution),
            lines,
        };

        info!(
            employees = run.lines.len(),
            skipped = setups.len() - run.lines.len(),
            total_net = %run.total_net,
            "payroll run prepared"
        );
        run
    }

    /// Gross pay plus employer contributions
    pub fn total_cost(&self) -> Money {
        Money::new(
            self.total_gross.amount() + self.total_employer_contribution.amount(),
            self.total_gross.currency(),
        )
    }
}
