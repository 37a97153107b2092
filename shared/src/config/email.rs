//! Outbound email configuration
//!
//! Controls which delivery backend is used and where the links embedded in
//! verification and password reset emails point.

use serde::{Deserialize, Serialize};

/// Email delivery backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    /// Deliver through an SMTP relay
    Smtp,
    /// Only log the message, nothing is sent
    Log,
}

impl std::str::FromStr for EmailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "smtp" => Ok(EmailProvider::Smtp),
            "log" | "mock" => Ok(EmailProvider::Log),
            _ => Err(format!("Invalid email provider: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    pub provider: EmailProvider,

    /// SMTP relay host
    pub smtp_host: String,

    /// SMTP relay port (STARTTLS)
    pub smtp_port: u16,

    #[serde(default)]
    pub smtp_username: Option<String>,

    #[serde(default)]
    pub smtp_password: Option<String>,

    /// Sender address, e.g. `Pizza Delivery <noreply@example.com>`
    pub from_address: String,

    /// Base URL of the frontend that serves the verification and reset pages
    #[serde(default = "default_frontend_url")]
    pub frontend_url: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: EmailProvider::Log,
            smtp_host: String::from("localhost"),
            smtp_port: 587,
            smtp_username: None,
            smtp_password: None,
            from_address: String::from("Pizza Delivery <noreply@example.com>"),
            frontend_url: default_frontend_url(),
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: std::env::var("EMAIL_PROVIDER")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.provider),
            smtp_host: std::env::var("SMTP_HOST").unwrap_or(defaults.smtp_host),
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.smtp_port),
            smtp_username: std::env::var("SMTP_USERNAME").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
            from_address: std::env::var("EMAIL_FROM").unwrap_or(defaults.from_address),
            frontend_url: std::env::var("FRONTEND_URL").unwrap_or(defaults.frontend_url),
        }
    }
}

fn default_frontend_url() -> String {
    String::from("http://localhost:5173")
}
