//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, TokenPurpose};
use crate::domain::entities::user::Role;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service for issuing and verifying signed tokens
///
/// Pure and CPU-bound; the only state is the signing key.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or an error if the configured algorithm is not
    /// an HMAC algorithm usable with a shared secret
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        if !matches!(
            config.algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(DomainError::internal(format!(
                "Unsupported JWT algorithm {:?}, expected an HMAC algorithm",
                config.algorithm
            )));
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = true;
        validation.leeway = 0;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Lifetime of access tokens in seconds
    pub fn access_token_expires_in(&self) -> i64 {
        self.config.access_token_expiry_minutes * 60
    }

    /// Issues an access token whose subject is the user id
    pub fn issue_access_token(&self, user_id: i64) -> Result<String, DomainError> {
        let claims = Claims::access(user_id, self.config.access_token_expiry_minutes);
        self.encode_jwt(&claims)
    }

    /// Issues a registration token embedding the pending account
    pub fn issue_registration_token(
        &self,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<String, DomainError> {
        let claims = Claims::registration(
            email,
            password_hash,
            role,
            self.config.verification_token_expiry_minutes,
        );
        self.encode_jwt(&claims)
    }

    /// Issues a password reset token whose subject is the email address
    pub fn issue_reset_token(&self, email: &str) -> Result<String, DomainError> {
        let claims = Claims::reset_password(email, self.config.reset_token_expiry_minutes);
        self.encode_jwt(&claims)
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies a token and checks that it was issued for `purpose`
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError::InvalidToken)` - Bad signature, expired, malformed,
    ///   or issued for another purpose
    pub fn verify(&self, token: &str, purpose: TokenPurpose) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token rejected");
                DomainError::Token(TokenError::InvalidToken)
            })?;

        if token_data.claims.purpose != purpose {
            return Err(DomainError::Token(TokenError::InvalidToken));
        }

        Ok(token_data.claims)
    }

    /// Verifies an access token and returns the user id it was issued for
    pub fn verify_access_token(&self, token: &str) -> Result<i64, DomainError> {
        self.verify(token, TokenPurpose::Access)?
            .user_id()
            .ok_or(DomainError::Token(TokenError::InvalidToken))
    }
}
