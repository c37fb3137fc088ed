use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserDirectory;

/// Domain service implementation for login and request authorization.
///
/// Holds no mutable state; safe to share across concurrent requests.
pub struct AuthService<UD>
where
    UD: UserDirectory,
{
    directory: Arc<UD>,
    authenticator: Arc<Authenticator>,
}

impl<UD> AuthService<UD>
where
    UD: UserDirectory,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `directory` - Principal lookup implementation
    /// * `authenticator` - Password and token handling
    pub fn new(directory: Arc<UD>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            directory,
            authenticator,
        }
    }
}

#[async_trait]
impl<UD> AuthServicePort for AuthService<UD>
where
    UD: UserDirectory,
{
    async fn login(&self, command: LoginCommand) -> Result<String, UserError> {
        let Some(user) = self.directory.find_by_email(&command.email).await? else {
            self.authenticator.reject_unknown(command.password());
            tracing::warn!(reason = "unknown_email", "Login failed");
            return Err(UserError::LoginFailed);
        };

        let result = self
            .authenticator
            .authenticate(
                command.password(),
                &user.password_hash,
                &user.token_principal(),
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::warn!(user_id = %user.id, reason = "wrong_password", "Login failed");
                    UserError::LoginFailed
                }
                AuthenticationError::PasswordError(err) => UserError::Password(err.to_string()),
                AuthenticationError::JwtError(err) => UserError::from(err),
            })?;

        tracing::info!(user_id = %user.id, "Login succeeded");

        Ok(result.access_token)
    }

    async fn authorize(&self, token: &str) -> Result<User, UserError> {
        let claims = self.authenticator.validate_token(token)?;

        let user_id = UserId::new(claims.sub)?;

        let user = self
            .directory
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| UserError::UnknownSubject(user_id.to_string()))?;

        tracing::debug!(user_id = %user.id, "Request authorized");

        Ok(user)
    }
}
