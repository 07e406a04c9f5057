//! Employee records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;
use validator::Validate;

use core_kernel::{EmployeeId, Record};

/// An employee on the payroll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub joining_date: Option<NaiveDate>,
    #[serde(default = "active")]
    pub is_active: bool,
}

fn active() -> bool {
    true
}

impl Employee {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EmployeeId::new(),
            name: name.into(),
            designation: String::new(),
            department: String::new(),
            email: String::new(),
            phone: String::new(),
            joining_date: None,
            is_active: true,
        }
    }
}

impl Record for Employee {
    type Id = EmployeeId;
    const COLLECTION: &'static str = "employees";
    const ENTITY: &'static str = "Employee";

    fn id(&self) -> EmployeeId {
        self.id
    }

    fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
    }
}

/// Raw employee form input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeForm {
    pub name: String,
    pub designation: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub joining_date: String,
    pub is_active: bool,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            designation: String::new(),
            department: String::new(),
            email: String::new(),
            phone: String::new(),
            joining_date: String::new(),
            is_active: true,
        }
    }
}

impl EmployeeForm {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            designation: employee.designation.clone(),
            department: employee.department.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            joining_date: employee.joining_date.map(|d| d.to_string()).unwrap_or_default(),
            is_active: employee.is_active,
        }
    }

    /// Builds an employee, keeping `id` when editing
    ///
    /// An unparseable joining date is left blank.
    pub fn build(&self, id: Option<EmployeeId>) -> Employee {
        let joining_date = match self.joining_date.trim() {
            "" => None,
            raw => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| warn!(field = "joiningDate", value = raw, "ignoring unparseable date"))
                .ok(),
        };

        Employee {
            id: id.unwrap_or_default(),
            name: self.name.clone(),
            designation: self.designation.trim().to_string(),
            department: self.department.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            joining_date,
            is_active: self.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_is_active_defaults_to_true() {
        let employee: Employee = serde_json::from_str(
            r#"{"id":"0190b3a0-0000-7000-8000-000000000001","name":"Salma"}"#,
        )
        .unwrap();
        assert!(employee.is_active);
    }

    #[test]
    fn test_build_keeps_id_on_edit() {
        let stored = Employee::new("Salma");
        let mut form = EmployeeForm::from_employee(&stored);
        form.designation = "Accountant".to_string();

        let edited = form.build(Some(stored.id));
        assert_eq!(edited.id, stored.id);
        assert_eq!(edited.designation, "Accountant");
    }

    #[test]
    fn test_bad_joining_date_is_left_blank() {
        let form = EmployeeForm {
            name: "Salma".to_string(),
            designation: "Cashier".to_string(),
            joining_date: "yesterday".to_string(),
            ..Default::default()
        };
        let employee = form.build(None);
        assert_eq!(employee.joining_date, None);
        assert_eq!(employee.designation, "Cashier");
    }

    #[test]
    fn test_whitespace_name_fails_validation() {
        let mut employee = Employee::new(" \t ");
        employee.normalize();
        assert!(employee.validate().is_err());
    }
}
