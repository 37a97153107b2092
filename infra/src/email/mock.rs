//! Mock Email Service Implementation
//!
//! Records every message in memory instead of sending it, so tests can
//! pull the verification or reset link back out.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use pd_core::services::EmailServiceTrait;

use super::templates::EmailKind;

/// A message captured by [`MockEmailService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub kind: EmailKind,
    pub to: String,
    pub link: String,
}

impl SentMessage {
    /// The `token` query parameter of the link, if present
    pub fn token(&self) -> Option<&str> {
        self.link
            .split_once("token=")
            .map(|(_, rest)| rest.split('&').next().unwrap_or(rest))
    }
}

#[derive(Clone, Default)]
pub struct MockEmailService {
    sent: Arc<Mutex<Vec<SentMessage>>>,
    /// Whether to simulate failures
    simulate_failure: Arc<AtomicBool>,
}

impl MockEmailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose sends always fail
    pub fn failing() -> Self {
        let service = Self::new();
        service.set_simulate_failure(true);
        service
    }

    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    /// All messages recorded so far, oldest first
    pub fn sent_messages(&self) -> Vec<SentMessage> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// The most recent message sent to `to`
    pub fn last_sent_to(&self, to: &str) -> Option<SentMessage> {
        self.sent_messages().into_iter().rev().find(|m| m.to == to)
    }

    pub fn get_message_count(&self) -> usize {
        self.sent.lock().map(|s| s.len()).unwrap_or(0)
    }

    fn record(&self, kind: EmailKind, to: &str, link: &str) -> Result<(), String> {
        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(kind = kind.as_str(), to = %to, "Mock email service simulating failure");
            return Err("Simulated email sending failure".to_string());
        }

        let message = SentMessage {
            kind,
            to: to.to_string(),
            link: link.to_string(),
        };
        self.sent
            .lock()
            .map_err(|_| "Mock email store poisoned".to_string())?
            .push(message);

        info!(target: "email_service", provider = "mock", kind = kind.as_str(), to = %to, "Email recorded");
        Ok(())
    }
}

#[async_trait]
impl EmailServiceTrait for MockEmailService {
    async fn send_verification_email(&self, to: &str, link: &str) -> Result<(), String> {
        self.record(EmailKind::Verification, to, link)
    }

    async fn send_password_reset_email(&self, to: &str, link: &str) -> Result<(), String> {
        self.record(EmailKind::PasswordReset, to, link)
    }
}
