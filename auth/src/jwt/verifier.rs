use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::decode;
use jsonwebtoken::errors::Error as JsonWebTokenError;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;
use serde::Deserialize;

use super::claims::Claims;
use super::errors::JwtError;
use super::key::SigningKey;
use super::ALGORITHM;
use super::ALGORITHM_NAME;

/// Verifies presented identity tokens.
///
/// Checks run in order: presence, structure, algorithm, signature, expiry,
/// issuer. The first failing check determines the error. Verification never
/// consults a user directory and holds no mutable state.
pub struct TokenVerifier {
    key: Arc<SigningKey>,
    issuer: String,
}

#[derive(Deserialize)]
struct RawHeader {
    alg: String,
}

impl TokenVerifier {
    /// Create a new verifier.
    ///
    /// # Arguments
    /// * `key` - Shared signing key material (same as the issuer's)
    /// * `issuer` - The only `iss` value accepted
    pub fn new(key: Arc<SigningKey>, issuer: impl Into<String>) -> Self {
        Self {
            key,
            issuer: issuer.into(),
        }
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    /// * `MissingToken` - Input is empty
    /// * `MalformedToken` - Token structure or claims cannot be decoded
    /// * `UnsupportedAlgorithm` - Header names any algorithm other than HS256
    /// * `InvalidSignature` - Signature does not match the key material
    /// * `Expired` - Expiry is in the past
    /// * `InvalidIssuer` - Issuer is not the configured one
    /// * `KeyUnavailable` - Key material cannot be obtained
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(JwtError::MissingToken);
        }

        let algorithm = Self::declared_algorithm(token)?;
        if algorithm != ALGORITHM_NAME {
            return Err(JwtError::UnsupportedAlgorithm(algorithm));
        }

        let secret = self.key.material()?;

        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;
        validation.set_issuer(&[self.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "iss"]);

        // Signature is checked before expiry and issuer.
        let token_data = decode::<Claims>(token, &DecodingKey::from_secret(&secret), &validation)
            .map_err(Self::classify)?;

        let claims = token_data.claims;
        if !claims.is_consistent() {
            return Err(JwtError::MalformedToken(
                "subject does not match embedded user".to_string(),
            ));
        }

        Ok(claims)
    }

    /// Read the `alg` header field without trusting anything else in the token.
    fn declared_algorithm(token: &str) -> Result<String, JwtError> {
        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != 3 {
            return Err(JwtError::MalformedToken(format!(
                "expected 3 segments, found {}",
                segments.len()
            )));
        }

        let header = URL_SAFE_NO_PAD
            .decode(segments[0])
            .map_err(|e| JwtError::MalformedToken(format!("header encoding: {}", e)))?;

        serde_json::from_slice::<RawHeader>(&header)
            .map(|header| header.alg)
            .map_err(|e| JwtError::MalformedToken(format!("header: {}", e)))
    }

    fn classify(err: JsonWebTokenError) -> JwtError {
        match err.kind() {
            ErrorKind::InvalidSignature => JwtError::InvalidSignature,
            ErrorKind::ExpiredSignature => JwtError::Expired,
            ErrorKind::InvalidIssuer => JwtError::InvalidIssuer,
            ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                JwtError::UnsupportedAlgorithm(err.to_string())
            }
            _ => JwtError::MalformedToken(err.to_string()),
        }
    }
}
