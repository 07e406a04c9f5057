//! Customer records and the customer form
//!
//! Once a customer exists its id and opening balance are fixed; edits that
//! arrive through [`CustomerForm::apply_to`] or the record controller keep
//! the stored values.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{parse_amount, CustomerId, Record};

use crate::document::parse_form_date;

/// A customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub credit_limit: Decimal,
    #[serde(default)]
    pub opening_balance: Decimal,
    #[serde(default)]
    pub opening_balance_date: Option<NaiveDate>,
}

impl Customer {
    /// Creates a customer with only a name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: CustomerId::new(),
            display_name: name.clone(),
            name,
            company_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            credit_limit: Decimal::ZERO,
            opening_balance: Decimal::ZERO,
            opening_balance_date: None,
        }
    }

    /// Name shown in lists
    pub fn label(&self) -> &str {
        if self.display_name.trim().is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }
}

impl Record for Customer {
    type Id = CustomerId;
    const COLLECTION: &'static str = "customers";
    const ENTITY: &'static str = "Customer";

    fn id(&self) -> CustomerId {
        self.id
    }

    fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.display_name = self.display_name.trim().to_string();
    }

    fn preserve_on_edit(&mut self, stored: &Self) {
        self.id = stored.id;
        self.opening_balance = stored.opening_balance;
        self.opening_balance_date = stored.opening_balance_date;
    }
}

/// Raw customer form input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerForm {
    pub name: String,
    pub display_name: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub credit_limit: String,
    pub opening_balance: String,
    pub opening_balance_date: String,
}

impl CustomerForm {
    /// Prefills the form from a stored customer
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            display_name: customer.display_name.clone(),
            company_name: customer.company_name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            address: customer.address.clone(),
            credit_limit: customer.credit_limit.to_string(),
            opening_balance: customer.opening_balance.to_string(),
            opening_balance_date: customer
                .opening_balance_date
                .map(|d| d.to_string())
                .unwrap_or_default(),
        }
    }

    /// Builds a new customer with a fresh id
    ///
    /// The required name is checked on save, not here.
    pub fn build(&self) -> Customer {
        let display_name = if self.display_name.trim().is_empty() {
            self.name.clone()
        } else {
            self.display_name.clone()
        };

        Customer {
            id: CustomerId::new(),
            name: self.name.clone(),
            display_name,
            company_name: self.company_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            credit_limit: parse_amount(&self.credit_limit),
            opening_balance: parse_amount(&self.opening_balance),
            opening_balance_date: parse_form_date("openingBalanceDate", &self.opening_balance_date),
        }
    }

    /// Applies the editable fields to an existing customer
    ///
    /// Opening balance fields in the form are ignored.
    pub fn apply_to(&self, existing: &Customer) -> Customer {
        Customer {
            id: existing.id,
            name: self.name.clone(),
            display_name: self.display_name.clone(),
            company_name: self.company_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            credit_limit: parse_amount(&self.credit_limit),
            opening_balance: existing.opening_balance,
            opening_balance_date: existing.opening_balance_date,
        }
    }
}
