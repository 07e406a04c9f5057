//! Strongly-typed identifiers for persisted records
//!
//! Every record kept in a collection carries one of these UUID newtypes, so a
//! customer id can never be handed to the estimate collection by mistake.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new time-ordered identifier
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Wraps an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Returns the display prefix
            pub fn prefix() -> &'static str {
                $prefix
            }

            /// Short form used in list views (prefix plus the last 8 hex digits)
            pub fn short(&self) -> String {
                let simple = self.0.simple().to_string();
                format!("{}-{}", $prefix, &simple[simple.len() - 8..])
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid_str = s.trim();
                let uuid_str = uuid_str
                    .strip_prefix(concat!($prefix, "-"))
                    .unwrap_or(uuid_str);
                Ok(Self(Uuid::parse_str(uuid_str)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

// Chart of accounts and inventory
define_id!(AccountId, "ACC");
define_id!(ProductId, "PRD");

// Sales
define_id!(CustomerId, "CUS");
define_id!(EstimateId, "EST");
define_id!(SalesOrderId, "SO");

// Payroll
define_id!(EmployeeId, "EMP");
define_id!(SalarySetupId, "SAL");
