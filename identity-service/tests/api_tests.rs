mod common;

use std::sync::Arc;

use auth::SigningKey;
use auth::TokenIssuer;
use auth::TokenPrincipal;
use chrono::Duration;
use chrono::Utc;
use common::TestApp;
use reqwest::StatusCode;

async fn token_for(app: &TestApp, email: &str, password: &str) -> String {
    let response = app.login(email, password).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    body["data"]["token"]
        .as_str()
        .expect("Token missing from response")
        .to_string()
}

#[tokio::test]
async fn test_login_table() {
    let app = TestApp::spawn().await;

    let cases = [
        ("fake-email@email.you", "fake-pwd", StatusCode::OK, None),
        (
            "fake-email@email.you",
            "bad-pwd",
            StatusCode::BAD_REQUEST,
            Some("Login failed"),
        ),
        (
            "unknown_user@email.unknown",
            "dev",
            StatusCode::BAD_REQUEST,
            Some("Login failed"),
        ),
        ("", "dev", StatusCode::BAD_REQUEST, Some("Invalid email")),
        (
            "one-more-fake-email@email.you",
            "one-more-fake-pwd",
            StatusCode::OK,
            None,
        ),
        ("asdfas.net", "dev", StatusCode::BAD_REQUEST, Some("Invalid email")),
        ("fakemail@.", "dev", StatusCode::BAD_REQUEST, Some("Invalid email")),
        (
            "fake-email@email.you",
            "",
            StatusCode::BAD_REQUEST,
            Some("Invalid password"),
        ),
    ];

    for (email, password, expected_status, expected_message) in cases {
        let response = app.login(email, password).await;
        assert_eq!(response.status(), expected_status, "{} / {}", email, password);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        match expected_message {
            Some(message) => assert_eq!(body["data"]["message"], message, "{}", email),
            None => assert!(!body["data"]["token"].as_str().unwrap().is_empty()),
        }
    }
}

#[tokio::test]
async fn test_unknown_account_and_wrong_password_are_indistinguishable() {
    let app = TestApp::spawn().await;

    let wrong_password = app.login("fake-email@email.you", "bad-pwd").await;
    let unknown_account = app.login("unknown_user@email.unknown", "bad-pwd").await;

    assert_eq!(wrong_password.status(), unknown_account.status());

    let wrong_password: serde_json::Value = wrong_password.json().await.unwrap();
    let unknown_account: serde_json::Value = unknown_account.json().await.unwrap();
    assert_eq!(wrong_password, unknown_account);
}

#[tokio::test]
async fn test_login_password_is_not_trimmed() {
    let app = TestApp::spawn().await;

    for password in [" fake-pwd ", "fake-pwd\t"] {
        let response = app.login("fake-email@email.you", password).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{:?}", password);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["data"]["message"], "Login failed");
    }
}

#[tokio::test]
async fn test_me_returns_principal() {
    let app = TestApp::spawn().await;

    for (email, password) in [
        ("fake-email@email.you", "fake-pwd"),
        ("one-more-fake-email@email.you", "one-more-fake-pwd"),
    ] {
        let token = token_for(&app, email, password).await;

        let response = app
            .get_authenticated("/v1/users/me", &token)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.text().await.expect("Failed to read response");
        assert!(body.contains(email));
        assert!(!body.contains(password));
        assert!(!body.contains("argon2"));
    }
}

#[tokio::test]
async fn test_me_accepts_bare_token() {
    let app = TestApp::spawn().await;
    let token = token_for(&app, "fake-email@email.you", "fake-pwd").await;

    let response = app
        .get("/v1/users/me")
        .header("Authorization", token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["id"], "fceb-adse-dffa-ewop");
}

#[tokio::test]
async fn test_me_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/v1/users/me")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["message"], "No token set in headers");
}

#[tokio::test]
async fn test_me_with_garbage_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get_authenticated("/v1/users/me", "invalid.token.here")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_me_with_expired_token() {
    let app = TestApp::spawn().await;

    let token = app
        .token_issuer
        .issue_at(
            &TokenPrincipal::new("fceb-adse-dffa-ewop", "fake-email@email.you"),
            Utc::now() - Duration::days(8),
        )
        .unwrap();

    let response = app
        .get_authenticated("/v1/users/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_token_from_other_key() {
    let app = TestApp::spawn().await;

    let token = TokenIssuer::new(
        Arc::new(SigningKey::from_secret(b"another-secret-key-at-least-32-bytes")),
        common::ISSUER,
    )
    .issue(&TokenPrincipal::new(
        "fceb-adse-dffa-ewop",
        "fake-email@email.you",
    ))
    .unwrap();

    let response = app
        .get_authenticated("/v1/users/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_unknown_subject() {
    let app = TestApp::spawn().await;

    let token = app
        .token_issuer
        .issue(&TokenPrincipal::new("ghost", "ghost@email.you"))
        .unwrap();

    let response = app
        .get_authenticated("/v1/users/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["message"], "Could not identify the user");
}

#[tokio::test]
async fn test_login_with_file_key() {
    let path = common::temp_key_path();
    std::fs::write(&path, common::SECRET).unwrap();

    let app = TestApp::spawn_with_key(SigningKey::from_file(&path)).await;
    let token = token_for(&app, "fake-email@email.you", "fake-pwd").await;

    let response = app
        .get_authenticated("/v1/users/me", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    std::fs::remove_file(&path).unwrap();
}

#[tokio::test]
async fn test_login_without_key_is_server_error() {
    let path = common::temp_key_path();
    let app = TestApp::spawn_with_key(SigningKey::from_file(&path)).await;

    let response = app.login("fake-email@email.you", "fake-pwd").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.text().await.unwrap();
    assert!(body.contains("Internal server error"));
    assert!(!body.contains(path.to_str().unwrap()));
    assert!(!body.contains("jwt key"));
}

#[tokio::test]
async fn test_login_malformed_body() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/v1/auth/login")
        .header("Content-Type", "application/json")
        .body("{\"email\":")
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_client_error());
}
