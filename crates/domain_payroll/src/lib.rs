//! Payroll Domain - Employees, Salary Setups and Payroll Runs
//!
//! A salary setup holds one employee's monthly package:
//!
//! ```text
//! gross = basic + house rent + medical + conveyance + food + mobile
//!       + education + overtime + festival bonus + other allowances
//! net   = gross - (provident fund + income tax + loan repayment
//!                  + absence + other deductions)
//! ```
//!
//! The employer's provident fund contribution is tracked separately and does
//! not affect the employee's net pay.

pub mod employee;
pub mod salary;
pub mod payroll_run;
pub mod error;

pub use employee::{Employee, EmployeeForm};
pub use salary::{
    Allowances, Deductions, EmployerContribution, PaymentFields, PaymentMode, SalarySetup,
    SalarySetupForm, SalaryType,
};
pub use payroll_run::{PayrollRun, PayslipLine};
pub use error::PayrollError;
