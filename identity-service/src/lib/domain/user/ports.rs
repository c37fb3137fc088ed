use async_trait::async_trait;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for authentication operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and issue an access token.
    ///
    /// # Arguments
    /// * `command` - Validated email and password
    ///
    /// # Returns
    /// Signed access token
    ///
    /// # Errors
    /// * `LoginFailed` - Unknown email or wrong password (indistinguishable)
    /// * `KeyUnavailable` - Signing key could not be loaded
    /// * `Password` - Stored hash is malformed
    /// * `DirectoryUnavailable` - Directory lookup failed
    async fn login(&self, command: LoginCommand) -> Result<String, UserError>;

    /// Resolve the principal behind a presented token.
    ///
    /// Performs exactly one directory lookup when the token verifies.
    ///
    /// # Arguments
    /// * `token` - Bearer token as presented
    ///
    /// # Returns
    /// The principal named by the token subject
    ///
    /// # Errors
    /// * `MissingToken` - Token is empty
    /// * `InvalidToken` - Token failed verification
    /// * `InvalidUserId` / `UnknownSubject` - Subject does not resolve
    /// * `KeyUnavailable` / `DirectoryUnavailable` - Infrastructure failure
    async fn authorize(&self, token: &str) -> Result<User, UserError>;
}

/// Read-only lookup of provisioned principals.
///
/// Both lookups are exact-match. `Ok(None)` means no such principal;
/// `Err` means the directory itself failed.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Retrieve user by email address.
    ///
    /// # Errors
    /// * `DirectoryUnavailable` - Backing store failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Errors
    /// * `DirectoryUnavailable` - Backing store failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
}
