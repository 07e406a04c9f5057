//! Statement of owner's equity
//!
//! Beginning capital is not stored anywhere; it is back-computed from the
//! current capital balance by inverting the roll-forward
//! `ending = beginning + net income - drawings`. The figure is only as good
//! as that assumption, and a periodic ledger would be needed to replace it.

use serde::Serialize;
use tracing::debug;

use core_kernel::Money;

use crate::account::categories;
use crate::registry::AccountRegistry;

/// Owner's equity roll-forward
#[derive(Debug, Clone, Serialize)]
pub struct OwnersEquity {
    pub beginning_capital: Money,
    pub net_income: Money,
    pub drawings: Money,
    pub ending_capital: Money,
}

impl OwnersEquity {
    /// Builds the statement from a registry
    ///
    /// - ending capital: balance of `Owner's Capital`
    /// - drawings: magnitude of `Owner's Drawings` (stored as a debit balance)
    /// - net income: income balances minus expense balances
    pub fn generate(registry: &AccountRegistry) -> Self {
        let ending = registry.balance_named(categories::OWNERS_CAPITAL);
        let drawings = registry.balance_named(categories::OWNERS_DRAWINGS).abs();
        let net_income = registry.simple_net_income();
        let beginning = ending - net_income + drawings;

        debug!(%beginning, %net_income, %drawings, %ending, "owner's equity generated");

        Self {
            beginning_capital: registry.money(beginning),
            net_income: registry.money(net_income),
            drawings: registry.money(drawings),
            ending_capital: registry.money(ending),
        }
    }
}
