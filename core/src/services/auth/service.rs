//! Main authentication service implementation

use serde::Serialize;
use std::sync::Arc;

use pd_shared::utils::validation::{is_valid_email, normalize_email};

use crate::domain::entities::token::TokenPurpose;
use crate::domain::entities::user::{Role, User, MAX_EMAIL_LENGTH};
use crate::domain::entities::validate_length;
use crate::errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
use crate::repositories::UserRepository;
use crate::services::email::EmailServiceTrait;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::password::PasswordHasher;

/// Bearer credential handed out by a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
}

impl AccessToken {
    fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Result of consuming a registration token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyEmailOutcome {
    /// The account was created from the token
    Registered(User),
    /// An account with this email already existed; nothing was created
    AlreadyRegistered,
}

/// Authentication service for the account flows
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
    /// Outbound email for verification and reset links
    email_service: Arc<dyn EmailServiceTrait>,
    password_hasher: PasswordHasher,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_service` - Service for JWT token management
    /// * `email_service` - Sender for verification and reset emails
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        email_service: Arc<dyn EmailServiceTrait>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            email_service,
            password_hasher: PasswordHasher::new(config.bcrypt_cost),
            config,
        }
    }

    /// Start a registration
    ///
    /// No user row is written here. The pending account (email, password hash,
    /// role) travels inside a signed registration token that is emailed to the
    /// address; the account is created when the token comes back through
    /// [`verify_email`](Self::verify_email).
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Verification email dispatched (delivery failures are only logged)
    /// * `Err(DomainError::Conflict)` - Email already registered
    pub async fn register(&self, email: &str, password: &str) -> DomainResult<()> {
        let email = validated_email(email)?;
        require_password(password)?;

        if self.user_repository.find_by_email(&email).await?.is_some() {
            return Err(DomainError::conflict("Email already registered"));
        }

        let password_hash = self.password_hasher.hash_blocking(password).await?;
        let token = self.token_service.issue_registration_token(
            &email,
            &password_hash,
            self.config.registration_role,
        )?;
        let link = self.config.verification_link(&token);

        if let Err(e) = self.email_service.send_verification_email(&email, &link).await {
            tracing::warn!(error = %e, "Failed to send verification email");
        }

        tracing::info!("Registration started, verification email dispatched");
        Ok(())
    }

    /// Consume a registration token and create the account
    ///
    /// Idempotent: a token for an email that already has an account reports
    /// [`VerifyEmailOutcome::AlreadyRegistered`]. The very first account in
    /// the system is promoted to admin.
    pub async fn verify_email(&self, token: &str) -> DomainResult<VerifyEmailOutcome> {
        let claims = self.token_service.verify(token, TokenPurpose::Registration)?;
        let (password_hash, role) = match (claims.password_hash, claims.role) {
            (Some(hash), Some(role)) if !claims.sub.is_empty() => (hash, role),
            _ => return Err(DomainError::Token(TokenError::InvalidToken)),
        };
        let email = claims.sub;

        if self.user_repository.find_by_email(&email).await?.is_some() {
            return Ok(VerifyEmailOutcome::AlreadyRegistered);
        }

        let role = if self.user_repository.count().await? == 0 {
            Role::Admin
        } else {
            role
        };

        match self
            .user_repository
            .create(User::new(email, password_hash, role).verified())
            .await
        {
            Ok(user) => {
                tracing::info!(user_id = user.id, role = %user.role, "User registered");
                Ok(VerifyEmailOutcome::Registered(user))
            }
            // Lost a race with a concurrent verification of the same token
            Err(DomainError::Conflict { .. }) => Ok(VerifyEmailOutcome::AlreadyRegistered),
            Err(e) => Err(e),
        }
    }

    /// Check credentials and issue an access token
    ///
    /// # Returns
    ///
    /// * `Ok(AccessToken)` - Token whose subject is the user id
    /// * `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AccessToken> {
        let email = normalize_email(email);
        let user = self
            .user_repository
            .find_by_email(&email)
            .await?
            .ok_or(DomainError::Auth(AuthError::InvalidCredentials))?;

        if !self
            .password_hasher
            .verify_blocking(password, &user.password_hash)
            .await
        {
            tracing::info!(user_id = user.id, "Login rejected: wrong password");
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }
        if !user.is_active {
            return Err(DomainError::Auth(AuthError::InactiveUser));
        }

        let token = self.token_service.issue_access_token(user.id)?;
        tracing::info!(user_id = user.id, "User logged in");
        Ok(AccessToken::bearer(token))
    }

    /// Replace the password of the authenticated user
    ///
    /// # Returns
    ///
    /// * `Err(AuthError::IncorrectOldPassword)` - `old_password` does not match
    pub async fn change_password(
        &self,
        user_id: i64,
        old_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        require_password(new_password)?;
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        if !self
            .password_hasher
            .verify_blocking(old_password, &user.password_hash)
            .await
        {
            return Err(DomainError::Auth(AuthError::IncorrectOldPassword));
        }

        let password_hash = self.password_hasher.hash_blocking(new_password).await?;
        self.user_repository
            .update_password(user.id, &password_hash)
            .await?;

        tracing::info!(user_id = user.id, "Password changed");
        Ok(())
    }

    /// Email a password reset link
    ///
    /// # Returns
    ///
    /// * `Err(DomainError::NotFound)` - No account with that email
    pub async fn forgot_password(&self, email: &str) -> DomainResult<()> {
        let email = normalize_email(email);
        let user = self
            .user_repository
            .find_by_email(&email)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        let token = self.token_service.issue_reset_token(&user.email)?;
        let link = self.config.reset_password_link(&token);

        if let Err(e) = self
            .email_service
            .send_password_reset_email(&user.email, &link)
            .await
        {
            tracing::warn!(user_id = user.id, error = %e, "Failed to send password reset email");
        }

        tracing::info!(user_id = user.id, "Password reset requested");
        Ok(())
    }

    /// Consume a reset token and overwrite the password
    pub async fn reset_password(&self, token: &str, new_password: &str) -> DomainResult<()> {
        require_password(new_password)?;
        let claims = self.token_service.verify(token, TokenPurpose::ResetPassword)?;

        let user = self
            .user_repository
            .find_by_email(&claims.sub)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        let password_hash = self.password_hasher.hash_blocking(new_password).await?;
        self.user_repository
            .update_password(user.id, &password_hash)
            .await?;

        tracing::info!(user_id = user.id, "Password reset");
        Ok(())
    }

    /// Create an account directly, without email verification
    ///
    /// While the system has no users anyone may call this and the account
    /// becomes admin. Afterwards the caller must be an admin.
    ///
    /// # Returns
    ///
    /// * `Err(DomainError::Forbidden)` - Users exist and the caller is not an admin
    /// * `Err(DomainError::Conflict)` - Email already registered
    pub async fn create_user(
        &self,
        caller: Option<&User>,
        email: &str,
        password: &str,
    ) -> DomainResult<User> {
        let email = validated_email(email)?;
        require_password(password)?;

        let role = if self.user_repository.count().await? == 0 {
            Role::Admin
        } else {
            match caller {
                Some(user) if user.is_admin() => self.config.created_user_role,
                _ => {
                    return Err(DomainError::Forbidden {
                        message: "Only admins can create users".to_string(),
                    })
                }
            }
        };

        if self.user_repository.find_by_email(&email).await?.is_some() {
            return Err(DomainError::conflict("Email already registered"));
        }

        let password_hash = self.password_hasher.hash_blocking(password).await?;
        let user = self
            .user_repository
            .create(User::new(email, password_hash, role).verified())
            .await?;

        tracing::info!(
            user_id = user.id,
            role = %user.role,
            created_by = caller.map(|c| c.id),
            "User created"
        );
        Ok(user)
    }

    /// Load the active user behind an authenticated request
    ///
    /// A user that no longer exists is reported as `Unauthorized`, the same
    /// as an invalid token.
    pub async fn current_user(&self, user_id: i64) -> DomainResult<User> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Unauthorized)?;

        if !user.is_active {
            return Err(DomainError::Auth(AuthError::InactiveUser));
        }
        Ok(user)
    }

    /// Resolve a bearer token to the active user it was issued for
    pub async fn authenticate(&self, token: &str) -> DomainResult<User> {
        let user_id = self
            .token_service
            .verify_access_token(token)
            .map_err(|_| DomainError::Unauthorized)?;
        self.current_user(user_id).await
    }
}

fn validated_email(email: &str) -> DomainResult<String> {
    let email = normalize_email(email);
    if !is_valid_email(&email) {
        return Err(ValidationError::InvalidEmail.into());
    }
    validate_length("email", &email, MAX_EMAIL_LENGTH)?;
    Ok(email)
}

fn require_password(password: &str) -> DomainResult<()> {
    if password.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "password".to_string(),
        }
        .into());
    }
    Ok(())
}
