use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Lifetime of every issued token.
pub fn token_lifetime() -> Duration {
    Duration::days(7)
}

/// Snapshot of the authenticated principal embedded in a token.
///
/// Carries only public identity fields; password material never enters a token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenPrincipal {
    pub id: String,
    pub email: String,
}

impl TokenPrincipal {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
        }
    }
}

/// Claims carried by an identity token.
///
/// `sub` always equals `user.id`; tokens where the two disagree are rejected
/// by the verifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (principal identifier)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Issuer
    pub iss: String,

    /// Embedded principal snapshot
    pub user: TokenPrincipal,
}

impl Claims {
    /// Build claims for a principal issued at the given instant.
    ///
    /// # Arguments
    /// * `principal` - Identity to embed
    /// * `issuer` - Deployment-identifying issuer string
    /// * `issued_at` - Issuance instant; expiry is this plus [`token_lifetime`]
    ///
    /// # Returns
    /// Claims with sub, exp, iat, iss, and user set
    pub fn for_principal(
        principal: &TokenPrincipal,
        issuer: impl Into<String>,
        issued_at: DateTime<Utc>,
    ) -> Self {
        let expiration = issued_at + token_lifetime();

        Self {
            sub: principal.id.clone(),
            exp: expiration.timestamp(),
            iat: issued_at.timestamp(),
            iss: issuer.into(),
            user: principal.clone(),
        }
    }

    pub fn subject(&self) -> &str {
        &self.sub
    }

    pub fn principal(&self) -> &TokenPrincipal {
        &self.user
    }

    /// Whether the subject and the embedded principal name the same identity.
    pub fn is_consistent(&self) -> bool {
        self.sub == self.user.id
    }
}
