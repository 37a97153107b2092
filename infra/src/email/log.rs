//! Email service that only writes to the log
//!
//! Used in development so the verification and reset links can be copied
//! straight from the server output.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

use pd_core::services::EmailServiceTrait;

use super::templates::{EmailKind, RenderedEmail};

#[derive(Clone, Default)]
pub struct LogEmailService {
    /// Number of messages logged so far
    message_count: Arc<AtomicU64>,
}

impl LogEmailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of messages logged
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    fn log(&self, kind: EmailKind, to: &str, link: &str) {
        let email = RenderedEmail::render(kind, link);
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            target: "email_service",
            provider = "log",
            kind = kind.as_str(),
            to = %to,
            subject = %email.subject,
            link = %link,
            count,
            "Email logged instead of sent"
        );
    }
}

#[async_trait]
impl EmailServiceTrait for LogEmailService {
    async fn send_verification_email(&self, to: &str, link: &str) -> Result<(), String> {
        self.log(EmailKind::Verification, to, link);
        Ok(())
    }

    async fn send_password_reset_email(&self, to: &str, link: &str) -> Result<(), String> {
        self.log(EmailKind::PasswordReset, to, link);
        Ok(())
    }
}
