use std::sync::Arc;

use anyhow::Context;
use auth::Authenticator;
use auth::PasswordHasher;
use auth::SigningKey;
use identity_service::config::Config;
use identity_service::domain::user::service::AuthService;
use identity_service::inbound::http::router::create_router;
use identity_service::outbound::directory::InMemoryUserDirectory;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "identity_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "identity-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_key_path = %config.jwt.key_path,
        jwt_issuer = %config.jwt.issuer,
        "Configuration loaded"
    );

    let authenticator = Arc::new(Authenticator::new(
        SigningKey::from_file(&config.jwt.key_path),
        config.jwt.issuer.clone(),
    ));

    if config.jwt.validate_key_on_startup {
        authenticator
            .check_signing_key()
            .context("signing key validation failed")?;
        tracing::info!(jwt_key_path = %config.jwt.key_path, "Signing key loaded");
    }

    let directory = Arc::new(
        InMemoryUserDirectory::seeded(&PasswordHasher::new())
            .context("could not provision user directory")?,
    );
    anyhow::ensure!(!directory.is_empty(), "user directory has no accounts");
    tracing::info!(users = directory.len(), "User directory provisioned");

    let auth_service = Arc::new(AuthService::new(directory, Arc::clone(&authenticator)));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(auth_service)).await?;

    tracing::info!("Server exited successfully");

    Ok(())
}
