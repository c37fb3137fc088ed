use std::sync::Arc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::SigningKey;
use crate::jwt::TokenIssuer;
use crate::jwt::TokenPrincipal;
use crate::jwt::TokenVerifier;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token handling.
///
/// Issuer and verifier share one [`SigningKey`], so a token issued here is
/// verifiable here.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    token_verifier: TokenVerifier,
}

/// Result of successful authentication.
#[derive(Debug)]
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `signing_key` - Key material for token signing and verification
    /// * `issuer` - Issuer written into and required from every token
    pub fn new(signing_key: SigningKey, issuer: impl Into<String>) -> Self {
        let signing_key = Arc::new(signing_key);
        let issuer = issuer.into();

        Self {
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(Arc::clone(&signing_key), issuer.clone()),
            token_verifier: TokenVerifier::new(signing_key, issuer),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token for the principal.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `principal` - Identity to embed in the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is malformed
    /// * `JwtError` - Token issuance failed (e.g. key unavailable)
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        principal: &TokenPrincipal,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_issuer.issue(principal)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Spend the password work of a login for an account that does not exist.
    ///
    /// Performs the same verification as [`Authenticator::authenticate`] so
    /// both failures take comparable time. The caller reports the failure.
    pub fn reject_unknown(&self, password: &str) {
        self.password_hasher.verify_decoy(password);
    }

    /// Issue a token without password verification.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn generate_token(&self, principal: &TokenPrincipal) -> Result<String, JwtError> {
        self.token_issuer.issue(principal)
    }

    /// Validate a token and decode its claims.
    ///
    /// # Errors
    /// * `JwtError` - Token validation or decoding failed
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.token_verifier.verify(token)
    }

    /// Confirm the signing key can be loaded.
    ///
    /// # Errors
    /// * `KeyUnavailable` - Key material is missing or empty
    pub fn check_signing_key(&self) -> Result<(), JwtError> {
        // Issuing a throwaway token exercises the same path as a real login.
        self.token_issuer
            .issue(&TokenPrincipal::new("startup-check", "startup-check"))
            .map(|_| ())
    }
}
