//! User entity representing an account of the pizza delivery system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

pub const MAX_EMAIL_LENGTH: usize = 255;

/// Role of a user, which decides what they may do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, including order status changes and user creation
    Admin,
    /// Staff member who can see every order
    Employee,
    /// Self-registered customer
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
            Role::Customer => "customer",
        }
    }

    /// Whether this role may see orders placed by other users
    pub fn can_view_all_orders(&self) -> bool {
        matches!(self, Role::Admin | Role::Employee)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "employee" => Ok(Role::Employee),
            "customer" => Ok(Role::Customer),
            _ => Err(ValidationError::InvalidRole {
                value: s.to_string(),
            }),
        }
    }
}

/// User entity
///
/// `id` is assigned by the store on insert; a freshly built user carries `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    /// Unique, stored lowercase
    pub email: String,

    /// bcrypt hash, never the plain password
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    pub role: Role,

    pub is_active: bool,

    /// Whether the email address has been confirmed
    pub is_verified: bool,

    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new, active user that has not been persisted yet
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>, role: Role) -> Self {
        Self {
            id: 0,
            email: email.into(),
            password_hash: password_hash.into(),
            role,
            is_active: true,
            is_verified: false,
            created_at: Utc::now(),
        }
    }

    /// Marks the email address as confirmed
    pub fn verified(mut self) -> Self {
        self.is_verified = true;
        self
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
