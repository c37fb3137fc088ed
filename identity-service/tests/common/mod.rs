use std::path::PathBuf;
use std::sync::Arc;

use auth::Authenticator;
use auth::PasswordHasher;
use auth::SigningKey;
use auth::TokenIssuer;
use identity_service::domain::user::service::AuthService;
use identity_service::inbound::http::router::create_router;
use identity_service::outbound::directory::InMemoryUserDirectory;

pub const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const ISSUER: &str = "test.api.identity-service";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub token_issuer: TokenIssuer,
}

impl TestApp {
    /// Spawn the application with an in-memory signing key
    pub async fn spawn() -> Self {
        Self::spawn_with_key(SigningKey::from_secret(SECRET)).await
    }

    /// Spawn the application with the given signing key
    pub async fn spawn_with_key(signing_key: SigningKey) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let directory = Arc::new(
            InMemoryUserDirectory::seeded(&PasswordHasher::new())
                .expect("Failed to seed user directory"),
        );
        let authenticator = Arc::new(Authenticator::new(signing_key, ISSUER));
        let auth_service = Arc::new(AuthService::new(directory, authenticator));

        let router = create_router(auth_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        let token_issuer = TokenIssuer::new(Arc::new(SigningKey::from_secret(SECRET)), ISSUER);

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            token_issuer,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Log in and return the response
    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/v1/auth/login")
            .json(&serde_json::json!({
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// Unique path under the system temp directory
pub fn temp_key_path() -> PathBuf {
    std::env::temp_dir().join(format!("identity-service-key-{}", uuid::Uuid::new_v4()))
}
