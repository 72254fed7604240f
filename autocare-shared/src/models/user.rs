use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum::EnumIter;

/// Account role assigned by the backend.
///
/// The backend reports roles with a `ROLE_` prefix; the bare names are
/// accepted on input as well. Matching is case-sensitive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, EnumIter)]
pub enum Role {
    /// A customer booking services for their own vehicles.
    #[serde(rename = "ROLE_CUSTOMER", alias = "CUSTOMER")]
    Customer,
    /// Service-center staff.
    #[serde(rename = "ROLE_EMPLOYEE", alias = "EMPLOYEE")]
    Employee,
    /// Administrator managing employee accounts.
    #[serde(rename = "ROLE_ADMIN", alias = "ADMIN")]
    Admin,
}

impl Role {
    /// Return the canonical wire representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "ROLE_CUSTOMER",
            Self::Employee => "ROLE_EMPLOYEE",
            Self::Admin => "ROLE_ADMIN",
        }
    }

    /// Human-readable name used for badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Employee => "Employee",
            Self::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ROLE_CUSTOMER" | "CUSTOMER" => Ok(Self::Customer),
            "ROLE_EMPLOYEE" | "EMPLOYEE" => Ok(Self::Employee),
            "ROLE_ADMIN" | "ADMIN" => Ok(Self::Admin),
            _ => Err("unknown user role"),
        }
    }
}

/// Account profile as returned by `GET /users/me` and the employee listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Backend identifier.
    pub id: i64,

    /// Given name.
    pub first_name: String,

    /// Family name.
    pub last_name: String,

    /// Login email; immutable from the client.
    pub email: String,

    /// Account role.
    pub role: Role,

    /// Whether the account may sign in.
    pub enabled: bool,
}

impl UserRecord {
    /// First and last name joined by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
