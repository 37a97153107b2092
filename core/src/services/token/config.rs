//! Configuration for the token service

use jsonwebtoken::Algorithm;
use pd_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,
    /// Registration token expiry in minutes
    pub verification_token_expiry_minutes: i64,
    /// Password reset token expiry in minutes
    pub reset_token_expiry_minutes: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self::from(&JwtConfig::default())
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            // Unknown names fall back to HS256; asymmetric algorithms are rejected by the service
            algorithm: config.algorithm.parse().unwrap_or(Algorithm::HS256),
            access_token_expiry_minutes: config.access_token_expire_minutes,
            verification_token_expiry_minutes: config.verification_token_expire_minutes,
            reset_token_expiry_minutes: config.reset_token_expire_minutes,
        }
    }
}

impl TokenServiceConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Self::default()
        }
    }

    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry_minutes = minutes;
        self
    }
}
