//! Income statement
//!
//! Contra balances are signed on their own normal side: a positive
//! contra-income balance reduces revenue, and contra-expense balances add to
//! expenses (a purchase return is therefore stored negative).

use serde::Serialize;

use core_kernel::Money;

use crate::account::AccountType;
use crate::registry::AccountRegistry;

/// Income statement for the current balances
#[derive(Debug, Clone, Serialize)]
pub struct IncomeStatement {
    pub gross_revenue: Money,
    pub contra_income: Money,
    pub net_revenue: Money,
    pub gross_expenses: Money,
    pub contra_expenses: Money,
    pub net_expenses: Money,
    pub net_income: Money,
}

impl IncomeStatement {
    /// Builds the statement from a registry
    pub fn generate(registry: &AccountRegistry) -> Self {
        let gross_revenue = registry.sum_of_type(AccountType::Income);
        let contra_income = registry.sum_of_type(AccountType::ContraIncome);
        let gross_expenses = registry.sum_of_type(AccountType::Expense);
        let contra_expenses = registry.sum_of_type(AccountType::ContraExpense);

        let net_revenue = gross_revenue - contra_income;
        let net_expenses = gross_expenses + contra_expenses;

        Self {
            gross_revenue: registry.money(gross_revenue),
            contra_income: registry.money(contra_income),
            net_revenue: registry.money(net_revenue),
            gross_expenses: registry.money(gross_expenses),
            contra_expenses: registry.money(contra_expenses),
            net_expenses: registry.money(net_expenses),
            net_income: registry.money(net_revenue - net_expenses),
        }
    }
}
