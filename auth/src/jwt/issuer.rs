use std::sync::Arc;

use chrono::DateTime;
use chrono::Utc;
use jsonwebtoken::encode;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::claims::TokenPrincipal;
use super::errors::JwtError;
use super::key::SigningKey;
use super::ALGORITHM;

/// Issues signed identity tokens.
///
/// Tokens are HS256 JWS strings whose claims embed the principal snapshot,
/// the configured issuer and a one-week expiry.
pub struct TokenIssuer {
    key: Arc<SigningKey>,
    issuer: String,
}

impl TokenIssuer {
    /// Create a new issuer.
    ///
    /// # Arguments
    /// * `key` - Shared signing key material
    /// * `issuer` - Value written to the `iss` claim
    pub fn new(key: Arc<SigningKey>, issuer: impl Into<String>) -> Self {
        Self {
            key,
            issuer: issuer.into(),
        }
    }

    /// Issue a token for the principal, valid from now.
    ///
    /// # Errors
    /// * `KeyUnavailable` - Signing key cannot be obtained; no token is produced
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, principal: &TokenPrincipal) -> Result<String, JwtError> {
        self.issue_at(principal, Utc::now())
    }

    /// Issue a token as if it had been issued at `issued_at`.
    pub fn issue_at(
        &self,
        principal: &TokenPrincipal,
        issued_at: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        let claims = Claims::for_principal(principal, self.issuer.as_str(), issued_at);
        self.sign(&claims)
    }

    /// Sign prepared claims.
    pub fn sign(&self, claims: &Claims) -> Result<String, JwtError> {
        let secret = self.key.material()?;
        let header = Header::new(ALGORITHM);

        encode(&header, claims, &EncodingKey::from_secret(&secret))
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }
}
