//! Salary setups
//!
//! Gross and net are stored alongside the components for list views, but
//! they are always recomputed before a setup is saved or paid.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::warn;
use validator::Validate;

use core_kernel::{parse_amount, EmployeeId, Record, SalarySetupId};

use crate::error::PayrollError;

/// How the basic salary is quoted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryType {
    #[default]
    Monthly,
    Daily,
    Hourly,
}

impl FromStr for SalaryType {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "monthly" => Ok(SalaryType::Monthly),
            "daily" => Ok(SalaryType::Daily),
            "hourly" => Ok(SalaryType::Hourly),
            other => Err(PayrollError::UnknownSalaryType(other.to_string())),
        }
    }
}

/// Declares a struct of named salary components with a total and a
/// string-keyed constructor for form input
macro_rules! salary_components {
    ($(#[$meta:meta])* $name:ident, $kind:literal { $($field:ident => $key:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $name {
            $(pub $field: Decimal,)+
        }

        impl $name {
            /// Component keys as stored
            pub const KEYS: &'static [&'static str] = &[$($key),+];

            /// Sum of all components
            pub fn total(&self) -> Decimal {
                Decimal::ZERO $(+ self.$field)+
            }

            /// Parses components from form input
            ///
            /// Missing keys are zero. Unknown keys are logged and skipped.
            pub fn from_inputs(inputs: &BTreeMap<String, String>) -> Self {
                let mut parsed = Self::default();
                for (key, raw) in inputs {
                    match key.as_str() {
                        $($key => parsed.$field = parse_amount(raw),)+
                        other => warn!(kind = $kind, key = other, "ignoring unknown salary component"),
                    }
                }
                parsed
            }
        }
    };
}

salary_components!(
    /// Monthly allowances on top of basic salary
    Allowances, "allowance" {
        house_rent => "houseRent",
        medical => "medical",
        conveyance => "conveyance",
        food => "food",
        mobile => "mobile",
        education => "education",
        overtime => "overtime",
        festival_bonus => "festivalBonus",
        other => "other",
    }
);

salary_components!(
    /// Amounts withheld from gross pay
    Deductions, "deduction" {
        provident_fund => "providentFund",
        income_tax => "incomeTax",
        loan_repayment => "loanRepayment",
        absence => "absence",
        other => "other",
    }
);

salary_components!(
    /// Employer-side contributions, outside the employee's net pay
    EmployerContribution, "employer contribution" {
        provident_fund => "providentFund",
    }
);

/// Where salary is paid
///
/// Stored flat through [`PaymentFields`]: a `paymentMode` tag with the
/// account fields beside it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PaymentFields", into = "PaymentFields")]
pub enum PaymentMode {
    #[default]
    Cash,
    Bank {
        bank_name: String,
        account_number: String,
        branch: String,
    },
    MobileBanking {
        provider: String,
        account_number: String,
    },
}

/// Stored shape of a [`PaymentMode`]
///
/// Fields the mode does not use are left out when saving.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentFields {
    /// `cash`, `bank` or `mobileBanking`
    pub payment_mode: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bank_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub account_number: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub branch: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mobile_provider: String,
}

impl From<PaymentFields> for PaymentMode {
    /// An unrecognised tag falls back to cash
    fn from(fields: PaymentFields) -> Self {
        let PaymentFields {
            payment_mode,
            bank_name,
            account_number,
            branch,
            mobile_provider,
        } = fields;
        match payment_mode.trim().to_ascii_lowercase().as_str() {
            "" | "cash" => PaymentMode::Cash,
            "bank" => PaymentMode::Bank {
                bank_name,
                account_number,
                branch,
            },
            "mobile" | "mobilebanking" | "mobile banking" => PaymentMode::MobileBanking {
                provider: mobile_provider,
                account_number,
            },
            other => {
                warn!(mode = other, "unknown payment mode, paying in cash");
                PaymentMode::Cash
            }
        }
    }
}

impl From<PaymentMode> for PaymentFields {
    fn from(mode: PaymentMode) -> Self {
        match mode {
            PaymentMode::Cash => PaymentFields {
                payment_mode: "cash".to_string(),
                ..Default::default()
            },
            PaymentMode::Bank {
                bank_name,
                account_number,
                branch,
            } => PaymentFields {
                payment_mode: "bank".to_string(),
                bank_name,
                account_number,
                branch,
                ..Default::default()
            },
            PaymentMode::MobileBanking {
                provider,
                account_number,
            } => PaymentFields {
                payment_mode: "mobileBanking".to_string(),
                mobile_provider: provider,
                account_number,
                ..Default::default()
            },
        }
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMode::Cash => write!(f, "Cash"),
            PaymentMode::Bank { bank_name, account_number, .. } => {
                write!(f, "Bank ({} {})", bank_name, account_number)
            }
            PaymentMode::MobileBanking { provider, account_number } => {
                write!(f, "{} {}", provider, account_number)
            }
        }
    }
}

/// One employee's salary package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SalarySetup {
    pub id: SalarySetupId,
    #[serde(default)]
    pub employee_id: Option<EmployeeId>,
    #[validate(length(min = 1, message = "employee name is required"))]
    pub employee_name: String,
    #[serde(default)]
    pub salary_type: SalaryType,
    pub basic_salary: Decimal,
    #[serde(default)]
    pub allowances: Allowances,
    #[serde(default)]
    pub deductions: Deductions,
    #[serde(default)]
    pub employer_contribution: EmployerContribution,
    #[serde(default)]
    pub gross_salary: Decimal,
    #[serde(default)]
    pub net_payable: Decimal,
    #[serde(flatten)]
    pub payment_mode: PaymentMode,
    #[serde(default = "active")]
    pub is_active: bool,
}

fn active() -> bool {
    true
}

impl SalarySetup {
    /// Creates an active cash-paid setup with no allowances or deductions
    pub fn new(employee_name: impl Into<String>, basic_salary: Decimal) -> Self {
        let mut setup = Self {
            id: SalarySetupId::new(),
            employee_id: None,
            employee_name: employee_name.into(),
            salary_type: SalaryType::Monthly,
            basic_salary,
            allowances: Allowances::default(),
            deductions: Deductions::default(),
            employer_contribution: EmployerContribution::default(),
            gross_salary: Decimal::ZERO,
            net_payable: Decimal::ZERO,
            payment_mode: PaymentMode::Cash,
            is_active: true,
        };
        setup.recompute();
        setup
    }

    pub fn with_allowances(mut self, allowances: Allowances) -> Self {
        self.allowances = allowances;
        self.recompute();
        self
    }

    pub fn with_deductions(mut self, deductions: Deductions) -> Self {
        self.deductions = deductions;
        self.recompute();
        self
    }

    /// Basic plus all allowances
    pub fn gross(&self) -> Decimal {
        self.basic_salary + self.allowances.total()
    }

    /// Gross less all deductions
    pub fn net(&self) -> Decimal {
        self.gross() - self.deductions.total()
    }

    /// Refreshes the stored gross and net figures
    pub fn recompute(&mut self) {
        self.gross_salary = self.gross();
        self.net_payable = self.net();
    }
}

impl Record for SalarySetup {
    type Id = SalarySetupId;
    const COLLECTION: &'static str = "salarySetups";
    const ENTITY: &'static str = "Salary setup";

    fn id(&self) -> SalarySetupId {
        self.id
    }

    fn normalize(&mut self) {
        self.employee_name = self.employee_name.trim().to_string();
        self.recompute();
    }
}

/// Raw salary setup input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalarySetupForm {
    pub employee_id: String,
    pub employee_name: String,
    pub salary_type: String,
    pub basic_salary: String,
    pub allowances: BTreeMap<String, String>,
    pub deductions: BTreeMap<String, String>,
    pub employer_contribution: BTreeMap<String, String>,
    /// `cash`, `bank` or `mobile`
    pub payment_mode: String,
    pub bank_name: String,
    pub branch: String,
    pub mobile_provider: String,
    pub account_number: String,
    pub is_active: bool,
}

impl Default for SalarySetupForm {
    fn default() -> Self {
        Self {
            employee_id: String::new(),
            employee_name: String::new(),
            salary_type: String::new(),
            basic_salary: String::new(),
            allowances: BTreeMap::new(),
            deductions: BTreeMap::new(),
            employer_contribution: BTreeMap::new(),
            payment_mode: String::new(),
            bank_name: String::new(),
            branch: String::new(),
            mobile_provider: String::new(),
            account_number: String::new(),
            is_active: true,
        }
    }
}

impl SalarySetupForm {
    /// Builds a setup with gross and net computed from the components
    ///
    /// Only the employee name can make the setup invalid. Anything else
    /// that does not parse falls back: no linked employee, a monthly
    /// salary, cash payment, zero amounts.
    pub fn build(&self) -> SalarySetup {
        let employee_id = match self.employee_id.trim() {
            "" => None,
            raw => EmployeeId::from_str(raw)
                .map_err(|_| warn!(employee_id = raw, "ignoring unparseable employee id"))
                .ok(),
        };
        let salary_type = self.salary_type.parse().unwrap_or_else(|e: PayrollError| {
            warn!(error = %e, "using monthly salary type");
            SalaryType::Monthly
        });

        let mut setup = SalarySetup {
            id: SalarySetupId::new(),
            employee_id,
            employee_name: self.employee_name.clone(),
            salary_type,
            basic_salary: parse_amount(&self.basic_salary),
            allowances: Allowances::from_inputs(&self.allowances),
            deductions: Deductions::from_inputs(&self.deductions),
            employer_contribution: EmployerContribution::from_inputs(&self.employer_contribution),
            gross_salary: Decimal::ZERO,
            net_payable: Decimal::ZERO,
            payment_mode: self.payment_fields().into(),
            is_active: self.is_active,
        };
        setup.recompute();
        setup
    }

    fn payment_fields(&self) -> PaymentFields {
        PaymentFields {
            payment_mode: self.payment_mode.clone(),
            bank_name: self.bank_name.trim().to_string(),
            account_number: self.account_number.trim().to_string(),
            branch: self.branch.trim().to_string(),
            mobile_provider: self.mobile_provider.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn inputs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_gross_and_net() {
        let setup = SalarySetup::new("Salma", dec!(30000))
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
            });

        assert_eq!(setup.gross_salary, dec!(50000));
        assert_eq!(setup.net_payable, dec!(45500));
    }

    #[test]
    fn test_employer_contribution_does_not_touch_net() {
        let mut setup = SalarySetup::new("Salma", dec!(30000));
        setup.employer_contribution.provident_fund = dec!(3000);
        setup.recompute();
        assert_eq!(setup.net_payable, dec!(30000));
    }

    #[test]
    fn test_form_build_recomputes_totals() {
        let form = SalarySetupForm {
            employee_name: "Karim".to_string(),
            basic_salary: "20,000".to_string(),
            allowances: inputs(&[("houseRent", "10000"), ("conveyance", "bad")]),
            deductions: inputs(&[("absence", "500")]),
            payment_mode: "bank".to_string(),
            bank_name: "City Bank".to_string(),
            account_number: "123".to_string(),
            ..Default::default()
        };

        let setup = form.build();

        assert_eq!(setup.gross_salary, dec!(30000));
        assert_eq!(setup.net_payable, dec!(29500));
        assert!(matches!(setup.payment_mode, PaymentMode::Bank { .. }));
        assert!(setup.is_active);
    }

    #[test]
    fn test_form_skips_unknown_component() {
        let form = SalarySetupForm {
            employee_name: "Karim".to_string(),
            basic_salary: "1000".to_string(),
            allowances: inputs(&[("carAllowance", "100"), ("medical", "50")]),
            ..Default::default()
        };
        let setup = form.build();
        assert_eq!(setup.allowances.medical, dec!(50));
        assert_eq!(setup.gross_salary, dec!(1050));
    }

    #[test]
    fn test_form_falls_back_on_unknown_choices() {
        let form = SalarySetupForm {
            employee_id: "nobody".to_string(),
            employee_name: "Karim".to_string(),
            salary_type: "fortnightly".to_string(),
            payment_mode: "cheque".to_string(),
            ..Default::default()
        };
        let setup = form.build();
        assert_eq!(setup.employee_id, None);
        assert_eq!(setup.salary_type, SalaryType::Monthly);
        assert_eq!(setup.payment_mode, PaymentMode::Cash);
    }

    #[test]
    fn test_bank_fields_stored_beside_payment_mode() {
        let setup = SalarySetupForm {
            employee_name: "Karim".to_string(),
            payment_mode: "bank".to_string(),
            bank_name: "City".to_string(),
            account_number: "1".to_string(),
            ..Default::default()
        }
        .build();

        let json = serde_json::to_value(&setup).unwrap();

        assert_eq!(json["paymentMode"], "bank");
        assert_eq!(json["bankName"], "City");
        assert_eq!(json["accountNumber"], "1");
        assert!(json.get("mobileProvider").is_none());

        let back: SalarySetup = serde_json::from_value(json).unwrap();
        assert_eq!(back.payment_mode, setup.payment_mode);
    }

    #[test]
    fn test_mobile_banking_loads_from_flat_fields() {
        let json = r#"{
            "id": "0190c6a4-5b1e-7c3d-8e2f-1a2b3c4d5e6f",
            "employeeName": "Salma",
            "basicSalary": "20000",
            "paymentMode": "mobileBanking",
            "mobileProvider": "bKash",
            "accountNumber": "01700000000"
        }"#;

        let setup: SalarySetup = serde_json::from_str(json).unwrap();

        assert_eq!(
            setup.payment_mode,
            PaymentMode::MobileBanking {
                provider: "bKash".to_string(),
                account_number: "01700000000".to_string(),
            }
        );
        assert!(setup.is_active);
    }

    #[test]
    fn test_missing_payment_mode_loads_as_cash() {
        let json = r#"{"id": "0190c6a4-5b1e-7c3d-8e2f-1a2b3c4d5e6f", "employeeName": "Salma", "basicSalary": "1"}"#;
        let setup: SalarySetup = serde_json::from_str(json).unwrap();
        assert_eq!(setup.payment_mode, PaymentMode::Cash);
    }

    #[test]
    fn test_component_keys() {
        assert_eq!(Allowances::KEYS.len(), 9);
        assert_eq!(Deductions::KEYS.len(), 5);
        assert_eq!(EmployerContribution::KEYS, &["providentFund"]);
    }
}
