//! Configuration for the authentication service

use pd_shared::config::{AppConfig, EmailConfig};

use crate::domain::entities::user::Role;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Base URL of the frontend serving the verification and reset pages
    pub frontend_url: String,
    /// Role given to self-registered accounts
    pub registration_role: Role,
    /// Role given to accounts created by an admin
    pub created_user_role: Role,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            frontend_url: EmailConfig::default().frontend_url,
            registration_role: Role::Customer,
            created_user_role: Role::Employee,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl From<&AppConfig> for AuthServiceConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            frontend_url: config.email.frontend_url.clone(),
            bcrypt_cost: config.auth.bcrypt_cost,
            ..Self::default()
        }
    }
}

impl AuthServiceConfig {
    /// Link the user follows to confirm their email address
    pub fn verification_link(&self, token: &str) -> String {
        format!("{}/verify-email?token={}", self.base_url(), token)
    }

    /// Link the user follows to choose a new password
    pub fn reset_password_link(&self, token: &str) -> String {
        format!("{}/reset-password?token={}", self.base_url(), token)
    }

    fn base_url(&self) -> &str {
        self.frontend_url.trim_end_matches('/')
    }
}
