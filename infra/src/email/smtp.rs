//! SMTP email delivery through lettre

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{error, info};

use pd_core::services::EmailServiceTrait;
use pd_shared::config::EmailConfig;

use super::templates::{EmailKind, RenderedEmail};
use crate::InfrastructureError;

/// Email service backed by an SMTP relay
#[derive(Clone)]
pub struct SmtpEmailService {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpEmailService {
    /// Build the STARTTLS transport described by `config`
    ///
    /// Credentials are only attached when both username and password are set.
    pub fn new(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        let from: Mailbox = config.from_address.parse().map_err(|_| {
            InfrastructureError::Config(format!(
                "Invalid sender address: {}",
                config.from_address
            ))
        })?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| InfrastructureError::Email(e.to_string()))?
            .port(config.smtp_port);

        if let (Some(username), Some(password)) = (&config.smtp_username, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            mailer: builder.build(),
            from,
        })
    }

    /// Build the multipart message with plain text and HTML alternatives
    pub(crate) fn build_message(
        &self,
        to: &str,
        email: &RenderedEmail,
    ) -> Result<Message, InfrastructureError> {
        let to: Mailbox = to
            .parse()
            .map_err(|_| InfrastructureError::Email(format!("Invalid email address: {}", to)))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(email.subject.clone())
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(email.text.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(email.html.clone()),
                    ),
            )
            .map_err(|e| InfrastructureError::Email(format!("Failed to build message: {}", e)))
    }

    async fn send(&self, kind: EmailKind, to: &str, link: &str) -> Result<(), InfrastructureError> {
        let email = RenderedEmail::render(kind, link);
        let message = self.build_message(to, &email)?;

        self.mailer.send(message).await.map_err(|e| {
            error!(kind = kind.as_str(), to = %to, error = %e, "SMTP delivery failed");
            InfrastructureError::Email(format!("SMTP error: {}", e))
        })?;

        info!(kind = kind.as_str(), to = %to, subject = %email.subject, "Email sent successfully");
        Ok(())
    }
}

#[async_trait]
impl EmailServiceTrait for SmtpEmailService {
    async fn send_verification_email(&self, to: &str, link: &str) -> Result<(), String> {
        self.send(EmailKind::Verification, to, link)
            .await
            .map_err(|e| e.to_string())
    }

    async fn send_password_reset_email(&self, to: &str, link: &str) -> Result<(), String> {
        self.send(EmailKind::PasswordReset, to, link)
            .await
            .map_err(|e| e.to_string())
    }
}
