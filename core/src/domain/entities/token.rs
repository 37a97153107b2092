//! Claims carried by the signed tokens the service issues.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::Role;

/// What a token may be used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenPurpose {
    /// Bearer credential, subject is the user id
    Access,
    /// Pending sign-up, subject is the email address
    Registration,
    /// Password reset, subject is the email address
    ResetPassword,
}

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id for access tokens, email otherwise)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// JWT ID
    pub jti: String,

    pub purpose: TokenPurpose,

    /// Password hash of a pending registration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,

    /// Role of a pending registration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl Claims {
    fn base(sub: String, purpose: TokenPurpose, lifetime_minutes: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(lifetime_minutes);
        Self {
            sub,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            jti: Uuid::new_v4().to_string(),
            purpose,
            password_hash: None,
            role: None,
        }
    }

    pub fn access(user_id: i64, lifetime_minutes: i64) -> Self {
        Self::base(user_id.to_string(), TokenPurpose::Access, lifetime_minutes)
    }

    pub fn registration(
        email: &str,
        password_hash: &str,
        role: Role,
        lifetime_minutes: i64,
    ) -> Self {
        let mut claims = Self::base(
            email.to_string(),
            TokenPurpose::Registration,
            lifetime_minutes,
        );
        claims.password_hash = Some(password_hash.to_string());
        claims.role = Some(role);
        claims
    }

    pub fn reset_password(email: &str, lifetime_minutes: i64) -> Self {
        Self::base(
            email.to_string(),
            TokenPurpose::ResetPassword,
            lifetime_minutes,
        )
    }

    /// Subject parsed as a user id; only meaningful for access tokens
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}
