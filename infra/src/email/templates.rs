//! Subjects and bodies of the transactional emails

/// The kinds of email the backend sends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailKind {
    Verification,
    PasswordReset,
}

impl EmailKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailKind::Verification => "verification",
            EmailKind::PasswordReset => "password_reset",
        }
    }

    pub fn subject(&self) -> &'static str {
        match self {
            EmailKind::Verification => "Verify your email",
            EmailKind::PasswordReset => "Reset your password",
        }
    }
}

/// A rendered email, ready to hand to a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl RenderedEmail {
    /// Render the email of the given kind around `link`
    pub fn render(kind: EmailKind, link: &str) -> Self {
        let (intro, action, outro) = match kind {
            EmailKind::Verification => (
                "Thanks for signing up for Pizza Delivery.",
                "Confirm your email address",
                "If you did not create an account, you can ignore this email.",
            ),
            EmailKind::PasswordReset => (
                "We received a request to reset your Pizza Delivery password.",
                "Choose a new password",
                "If you did not ask for a reset, you can ignore this email.",
            ),
        };

        let text = format!("{}\n\n{}:\n{}\n\n{}\n", intro, action, link, outro);
        let html = format!(
            "<p>{}</p>\n<p><a href=\"{}\">{}</a></p>\n<p>{}</p>\n",
            intro,
            escape_html(link),
            action,
            outro
        );

        Self {
            subject: kind.subject().to_string(),
            text,
            html,
        }
    }
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
