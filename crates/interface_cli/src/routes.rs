//! Navigation surface
//!
//! Paths mirror the page list. Section index paths redirect to a default
//! child page before lookup.

use std::fmt;

use crate::error::CliError;

/// A page reachable by path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    TrialBalance,
    BalanceSheet,
    IncomeStatement,
    CashFlow,
    OwnersEquity,
    StockReport,
    BankReconciliation,
    Products,
    Customers,
    Estimates,
    SalesOrders,
    Employees,
    SalarySetups,
    PayrollRun,
}

/// Every page, in menu order
pub const ROUTES: &[(&str, Route)] = &[
    ("/reports/trial-balance", Route::TrialBalance),
    ("/reports/balance-sheet", Route::BalanceSheet),
    ("/reports/income-statement", Route::IncomeStatement),
    ("/reports/cash-flow", Route::CashFlow),
    ("/reports/owners-equity", Route::OwnersEquity),
    ("/reports/stock-report", Route::StockReport),
    ("/banking/reconciliation-report", Route::BankReconciliation),
    ("/inventory/products", Route::Products),
    ("/sales/customers", Route::Customers),
    ("/sales/estimates", Route::Estimates),
    ("/sales/sales-orders", Route::SalesOrders),
    ("/employee/employees", Route::Employees),
    ("/employee/salary-setup", Route::SalarySetups),
    ("/employee/payroll-run", Route::PayrollRun),
];

/// Index paths and the child page they open
pub const REDIRECTS: &[(&str, &str)] = &[
    ("/", "/reports/trial-balance"),
    ("/reports", "/reports/trial-balance"),
    ("/sales", "/sales/estimates"),
    ("/employee", "/employee/employees"),
    ("/inventory", "/inventory/products"),
    ("/banking", "/banking/reconciliation-report"),
];

impl Route {
    /// Canonical path
    pub fn path(&self) -> &'static str {
        ROUTES
            .iter()
            .find(|(_, route)| route == self)
            .map(|(path, _)| *path)
            .unwrap_or("/")
    }

    /// Page heading
    pub fn title(&self) -> &'static str {
        match self {
            Route::TrialBalance => "Trial Balance",
            Route::BalanceSheet => "Balance Sheet",
            Route::IncomeStatement => "Income Statement",
            Route::CashFlow => "Cash Flow Statement",
            Route::OwnersEquity => "Statement of Owner's Equity",
            Route::StockReport => "Stock Report",
            Route::BankReconciliation => "Bank Reconciliation Report",
            Route::Products => "Products",
            Route::Customers => "Customers",
            Route::Estimates => "Estimates",
            Route::SalesOrders => "Sales Orders",
            Route::Employees => "Employees",
            Route::SalarySetups => "Salary Setup",
            Route::PayrollRun => "Payroll Run",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Normalizes a path: lowercase, leading slash, no trailing slash
fn normalize(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/').to_ascii_lowercase();
    if trimmed.starts_with('/') {
        trimmed
    } else {
        format!("/{}", trimmed)
    }
}

/// Follows an index redirect, if any
pub fn redirect(path: &str) -> String {
    let path = normalize(path);
    REDIRECTS
        .iter()
        .find(|(from, _)| *from == path)
        .map(|(_, to)| to.to_string())
        .unwrap_or(path)
}

/// Resolves a path to its page
pub fn resolve(path: &str) -> Result<Route, CliError> {
    let target = redirect(path);
    ROUTES
        .iter()
        .find(|(p, _)| *p == target)
        .map(|(_, route)| *route)
        .ok_or_else(|| CliError::UnknownRoute(path.trim().to_string()))
}
