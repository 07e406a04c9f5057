//! Pre-built Test Fixtures
//!
//! Ready-to-use records that tests can compare against fixed numbers.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money};
use domain_inventory::Product;
use domain_ledger::{categories, Account, AccountRegistry, AccountType, ReconciliationResult};
use domain_payroll::{Allowances, Deductions, Employee, SalarySetup};
use domain_sales::{Customer, CustomerRef, DocumentDates, Estimate, LineItem, SalesOrder};

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    pub fn bdt(amount: rust_decimal::Decimal) -> Money {
        Money::new(amount, Currency::BDT)
    }

    pub fn bdt_zero() -> Money {
        Money::zero(Currency::BDT)
    }
}

/// Fixture for date test data
pub struct DateFixtures;

impl DateFixtures {
    /// Start of the sample financial year
    pub fn year_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
    }

    pub fn mid_year() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 15).unwrap()
    }
}

/// Fixture for chart-of-accounts data
pub struct AccountFixtures;

impl AccountFixtures {
    /// The built-in sample chart
    pub fn sample_registry() -> AccountRegistry {
        AccountRegistry::sample(Currency::BDT)
    }

    /// Ending capital 1000, income 500, expense 300, drawings 50
    pub fn small_business() -> Vec<Account> {
        vec![
            Account::new("Cash", AccountType::Asset, categories::CASH, dec!(1150)),
            Account::new(categories::OWNERS_CAPITAL, AccountType::Equity, "Capital", dec!(1000)),
            Account::new(categories::OWNERS_DRAWINGS, AccountType::Equity, "Drawings", dec!(-50)),
            Account::new("Sales", AccountType::Income, "Sales", dec!(500)),
            Account::new("Rent", AccountType::Expense, "Operating", dec!(300)),
        ]
    }

    /// Income 500 and expense 300, nothing else
    pub fn income_and_expense_only() -> Vec<Account> {
        vec![
            Account::new("Sales", AccountType::Income, "Sales", dec!(500)),
            Account::new("Wages", AccountType::Expense, "Payroll", dec!(300)),
        ]
    }

    pub fn registry(accounts: Vec<Account>) -> AccountRegistry {
        AccountRegistry::new(Currency::BDT, accounts).unwrap()
    }
}

/// Fixture for reconciliation inputs
pub struct ReconciliationFixtures;

impl ReconciliationFixtures {
    /// Beginning 10,000, deposits 5,000, payments 3,000, statement 12,000
    pub fn balanced() -> ReconciliationResult {
        ReconciliationResult {
            beginning_balance: dec!(10000),
            cleared_deposits: dec!(5000),
            cleared_payments: dec!(3000),
            ending_balance: dec!(12000),
        }
    }

    /// Same as `balanced` but the statement shows 250 more
    pub fn short_by_250() -> ReconciliationResult {
        ReconciliationResult {
            ending_balance: dec!(12250),
            ..Self::balanced()
        }
    }
}

/// Fixture for products
pub struct ProductFixtures;

impl ProductFixtures {
    pub fn rice() -> Product {
        Product::new_stock("Miniket Rice", "kg", dec!(62), dec!(70), dec!(1200))
    }

    pub fn paper() -> Product {
        Product::new_stock("A4 Paper Ream", "ream", dec!(420), dec!(480), dec!(80))
    }

    pub fn delivery() -> Product {
        Product::new_service("Home Delivery", dec!(100))
    }
}

/// Fixture for sales records
pub struct SalesFixtures;

impl SalesFixtures {
    pub fn customer() -> Customer {
        let mut customer = Customer::new("Rahim Traders");
        customer.company_name = "Rahim Traders Ltd".to_string();
        customer.credit_limit = dec!(100000);
        customer.opening_balance = dec!(5000);
        customer.opening_balance_date = Some(DateFixtures::year_start());
        customer
    }

    /// Draft estimate for 2 x 480 + 10 x 15 = 1,110
    pub fn estimate() -> Estimate {
        Estimate::new(
            CustomerRef::named("Rahim Traders"),
            DocumentDates::issued(DateFixtures::mid_year()),
            vec![
                LineItem::new("A4 Paper Ream", dec!(2), dec!(480)),
                LineItem::new("Gel Pen", dec!(10), dec!(15)),
            ],
        )
    }

    /// Finalized order for 1 x 2,000
    pub fn sales_order() -> SalesOrder {
        let mut order = SalesOrder::new(
            CustomerRef::named("Karim Store"),
            DocumentDates::issued(DateFixtures::mid_year()),
            vec![LineItem::new("Printer Toner", dec!(1), dec!(2000))],
        );
        domain_sales::SalesDocument::finalize(&mut order);
        order
    }
}

/// Fixture for payroll records
pub struct PayrollFixtures;

impl PayrollFixtures {
    pub fn employee() -> Employee {
        let mut employee = Employee::new("Salma Akter");
        employee.designation = "Accountant".to_string();
        employee.department = "Finance".to_string();
        employee.joining_date = Some(DateFixtures::year_start());
        employee
    }

    /// Basic 30,000; gross 50,000; net 45,500
    pub fn salary_setup() -> SalarySetup {
        SalarySetup::new("Salma Akter", dec!(30000))
            .with_allowances(Allowances {
                house_rent: dec!(15000),
                medical: dec!(3000),
                festival_bonus: dec!(2000),
                ..Default::default()
            })
            .with_deductions(Deductions {
                provident_fund: dec!(3000),
                income_tax: dec!(1500),
                ..Default::default()
            })
    }
}
