//! Payroll domain errors

use thiserror::Error;

/// Errors raised while parsing payroll choices
#[derive(Debug, Error)]
pub enum PayrollError {
    #[error("Unknown salary type: {0}")]
    UnknownSalaryType(String),
}
