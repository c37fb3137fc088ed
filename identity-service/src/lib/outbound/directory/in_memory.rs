use async_trait::async_trait;
use auth::PasswordHasher;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserDirectory;

/// Accounts provisioned by [`InMemoryUserDirectory::seeded`]: id, email, password.
const SEED_ACCOUNTS: [(&str, &str, &str); 2] = [
    ("fceb-adse-dffa-ewop", "fake-email@email.you", "fake-pwd"),
    (
        "3adf-32ff-vx0d-pol2",
        "one-more-fake-email@email.you",
        "one-more-fake-pwd",
    ),
];

/// Fixed, read-only user directory held in memory.
///
/// Stand-in for a persistent store. Lookups are linear scans with exact
/// matching on email and id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    users: Vec<User>,
}

impl InMemoryUserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Build the directory with the built-in demo accounts.
    ///
    /// # Errors
    /// * `Password` - Password hashing failed; treat as a startup error
    pub fn seeded(hasher: &PasswordHasher) -> Result<Self, UserError> {
        let users = SEED_ACCOUNTS
            .iter()
            .map(|(id, email, password)| -> Result<User, UserError> {
                Ok(User {
                    id: UserId::new(*id)?,
                    email: EmailAddress::new(email.to_string())?,
                    password_hash: hasher
                        .hash(password)
                        .map_err(|e| UserError::Password(e.to_string()))?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(users))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        Ok(self.users.iter().find(|user| &user.email == email).cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.iter().find(|user| &user.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(value: &str) -> EmailAddress {
        EmailAddress::new(value.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_seeded_accounts() {
        let hasher = PasswordHasher::new();
        let directory = InMemoryUserDirectory::seeded(&hasher).expect("Failed to seed");

        assert_eq!(directory.len(), 2);

        let user = directory
            .find_by_email(&email("fake-email@email.you"))
            .await
            .unwrap()
            .expect("Seeded user missing");

        assert_eq!(user.id.as_str(), "fceb-adse-dffa-ewop");
        assert!(hasher.verify("fake-pwd", &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let directory = InMemoryUserDirectory::seeded(&PasswordHasher::new()).unwrap();

        let user = directory
            .find_by_id(&UserId::new("3adf-32ff-vx0d-pol2").unwrap())
            .await
            .unwrap()
            .expect("Seeded user missing");

        assert_eq!(user.email.as_str(), "one-more-fake-email@email.you");
    }

    #[tokio::test]
    async fn test_lookups_are_exact() {
        let directory = InMemoryUserDirectory::new(vec![User {
            id: UserId::new("fceb-adse-dffa-ewop").unwrap(),
            email: email("fake-email@email.you"),
            password_hash: "hash".to_string(),
        }]);

        assert!(directory
            .find_by_email(&email("FAKE-EMAIL@email.you"))
            .await
            .unwrap()
            .is_none());
        assert!(directory
            .find_by_id(&UserId::new("fceb-adse").unwrap())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_empty_directory() {
        let directory = InMemoryUserDirectory::default();

        assert!(directory.is_empty());
        assert!(directory
            .find_by_email(&email("fake-email@email.you"))
            .await
            .unwrap()
            .is_none());
    }
}
