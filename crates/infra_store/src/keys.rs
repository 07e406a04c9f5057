//! Fixed storage keys, one per persisted collection

pub const CUSTOMERS: &str = "customers";
pub const ESTIMATES: &str = "estimates";
pub const SALES_ORDERS: &str = "salesOrders";
pub const EMPLOYEES: &str = "employees";
pub const SALARY_SETUPS: &str = "salarySetups";
pub const ACCOUNTS: &str = "accounts";
pub const PRODUCTS: &str = "products";
/// Last reconciliation result handed to the report page
pub const RECONCILIATION: &str = "reconciliation";

/// Every key the application reads or writes
pub const ALL: &[&str] = &[
    CUSTOMERS,
    ESTIMATES,
    SALES_ORDERS,
    EMPLOYEES,
    SALARY_SETUPS,
    ACCOUNTS,
    PRODUCTS,
    RECONCILIATION,
];
