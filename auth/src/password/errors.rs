use thiserror::Error;

/// Error type for password hashing and verification.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    /// Salt generation or hash computation failed. Only expected when the
    /// OS entropy source is broken.
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// The stored hash could not be parsed.
    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
