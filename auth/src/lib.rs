//! Authentication utilities library
//!
//! Provides the credential and token core used by the identity service:
//! - Password hashing (Argon2id, fixed work factor)
//! - Signing key material loaded from memory or a file
//! - Signed identity token issuance and verification (HS256 only)
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Tokens
//! ```
//! use std::sync::Arc;
//!
//! use auth::{SigningKey, TokenIssuer, TokenPrincipal, TokenVerifier};
//!
//! let key = Arc::new(SigningKey::from_secret(b"secret_key_at_least_32_bytes_long!"));
//! let issuer = TokenIssuer::new(Arc::clone(&key), "development.api.example");
//! let verifier = TokenVerifier::new(key, "development.api.example");
//!
//! let principal = TokenPrincipal::new("user123", "alice@example.com");
//! let token = issuer.issue(&principal).unwrap();
//! let claims = verifier.verify(&token).unwrap();
//! assert_eq!(claims.subject(), "user123");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, SigningKey, TokenPrincipal};
//!
//! let auth = Authenticator::new(
//!     SigningKey::from_secret(b"secret_key_at_least_32_bytes_long!"),
//!     "development.api.example",
//! );
//!
//! // Provisioning: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let principal = TokenPrincipal::new("user123", "alice@example.com");
//! let result = auth.authenticate("password123", &hash, &principal).unwrap();
//!
//! // Protected request: validate token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.user.email, "alice@example.com");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::SigningKey;
pub use jwt::TokenIssuer;
pub use jwt::TokenPrincipal;
pub use jwt::TokenVerifier;
pub use password::PasswordError;
pub use password::PasswordHasher;
