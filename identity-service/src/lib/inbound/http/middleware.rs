use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::user::models::User;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// Request-scoped binding of a verified token to its principal.
///
/// Inserted into request extensions by [`authenticate`]; dropped with the request.
#[derive(Debug, Clone)]
pub struct AuthenticatedContext {
    pub user: User,
}

/// Middleware that resolves the bearer token to a principal.
///
/// No token → 401; token fails verification → 401; subject not in the
/// directory → 401; otherwise the principal is attached and the request
/// proceeds. Exactly one directory lookup per request that reaches it.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?.to_string();

    let user = state.auth_service.authorize(&token).await?;

    req.extensions_mut().insert(AuthenticatedContext { user });

    Ok(next.run(req).await)
}

/// Accepts `Bearer <token>` as well as a bare token.
fn extract_token_from_header(req: &Request) -> Result<&str, UserError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            UserError::MissingToken
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        tracing::warn!("Authorization header is not visible ASCII");
        UserError::InvalidToken(auth::JwtError::MalformedToken(
            "authorization header is not visible ASCII".to_string(),
        ))
    })?;

    let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str).trim();
    if token.is_empty() {
        tracing::warn!("Empty Authorization header");
        return Err(UserError::MissingToken);
    }

    Ok(token)
}
