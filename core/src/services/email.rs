//! Outbound email seam used by the authentication flows

use async_trait::async_trait;

/// Trait for email delivery integration
///
/// Implementations receive the fully built link; they only decide how the
/// message is worded and delivered.
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Send the link that confirms a pending registration
    async fn send_verification_email(&self, to: &str, link: &str) -> Result<(), String>;

    /// Send the link that lets the user choose a new password
    async fn send_password_reset_email(&self, to: &str, link: &str) -> Result<(), String>;
}
