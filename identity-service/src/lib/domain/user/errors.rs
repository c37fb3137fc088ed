use auth::JwtError;
use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("User ID must not be empty")]
    Empty,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for login and request authorization.
///
/// Variants fall into three classes: input validation, authentication
/// (deliberately low-detail), and infrastructure.
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Validation errors
    #[error("Invalid user ID: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid password")]
    MissingPassword,

    // Authentication errors
    #[error("Login failed")]
    LoginFailed,

    #[error("No token set in headers")]
    MissingToken,

    #[error("Invalid token: {0}")]
    InvalidToken(JwtError),

    #[error("Token subject not found: {0}")]
    UnknownSubject(String),

    // Infrastructure errors
    #[error("Signing key unavailable: {0}")]
    KeyUnavailable(String),

    #[error("Password error: {0}")]
    Password(String),

    #[error("Directory unavailable: {0}")]
    DirectoryUnavailable(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl UserError {
    /// Whether the failure lies with the server rather than the caller.
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            UserError::KeyUnavailable(_)
                | UserError::Password(_)
                | UserError::DirectoryUnavailable(_)
                | UserError::Unknown(_)
        )
    }
}

impl From<JwtError> for UserError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::MissingToken => UserError::MissingToken,
            JwtError::KeyUnavailable(msg) => UserError::KeyUnavailable(msg),
            JwtError::EncodingFailed(msg) => UserError::Unknown(msg),
            other => UserError::InvalidToken(other),
        }
    }
}
