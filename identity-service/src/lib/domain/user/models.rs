use std::fmt;
use std::str::FromStr;

use auth::TokenPrincipal;

use crate::user::errors::EmailError;
use crate::user::errors::UserError;
use crate::user::errors::UserIdError;

/// Principal known to the user directory.
///
/// `password_hash` never leaves the domain: `User` is not serializable and
/// its `Debug` output redacts the hash.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub password_hash: String,
}

impl User {
    /// Snapshot of the public identity fields embedded in issued tokens.
    pub fn token_principal(&self) -> TokenPrincipal {
        TokenPrincipal::new(self.id.as_str(), self.email.as_str())
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// Opaque, stable user identifier; the subject of issued tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Wrap a raw identifier.
    ///
    /// # Errors
    /// * `Empty` - Identifier is empty
    pub fn new(id: impl Into<String>) -> Result<Self, UserIdError> {
        let id = id.into();
        if id.is_empty() {
            return Err(UserIdError::Empty);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated login credentials.
///
/// Exists only for the duration of a login request. The password is never
/// printed.
pub struct LoginCommand {
    pub email: EmailAddress,
    password: String,
}

impl LoginCommand {
    /// Validate raw credentials.
    ///
    /// The password is checked first, then the email syntax. Neither check
    /// touches the user directory.
    ///
    /// # Errors
    /// * `MissingPassword` - Password is empty
    /// * `InvalidEmail` - Email does not conform to RFC 5322
    pub fn new(email: String, password: String) -> Result<Self, UserError> {
        if password.is_empty() {
            return Err(UserError::MissingPassword);
        }

        let email = EmailAddress::new(email)?;

        Ok(Self { email, password })
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
