use thiserror::Error;

/// Error type for token issuance and verification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("No token provided")]
    MissingToken,

    #[error("Malformed token: {0}")]
    MalformedToken(String),

    #[error("Unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token issuer is not accepted")]
    InvalidIssuer,

    #[error("Signing key unavailable: {0}")]
    KeyUnavailable(String),

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),
}
