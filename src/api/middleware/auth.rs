//! Session authentication middleware.
//!
//! The token is read from the `Authorization` cookie set at login. Clients
//! that cannot keep cookies may send `Authorization: Bearer <token>` instead;
//! the cookie wins when both are present.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::User;
use crate::state::AppState;

/// Cookie carrying the session token
pub const AUTH_COOKIE: &str = "Authorization";

/// Authenticated caller, inserted into request extensions.
///
/// Extract it in handlers with `Extension<AuthUser>`.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub user: User,
}

fn extract_token(jar: &CookieJar, headers: &HeaderMap) -> Option<String> {
    if let Some(cookie) = jar.get(AUTH_COOKIE)
        && !cookie.value().is_empty()
    {
        return Some(cookie.value().to_string());
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Rejects the request unless it carries a valid token for a live user.
///
/// # Errors
/// - 401 when the token is missing, malformed, mis-signed or expired
/// - 404 when the token's user no longer exists
pub async fn auth_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_token(&jar, request.headers())
        .ok_or_else(|| AppError::unauthorized("Missing authorization token"))?;

    let user = state.services.auth.authenticate(&token).await?;
    tracing::debug!(user_id = %user.id, "Request authenticated");

    request.extensions_mut().insert(AuthUser {
        user_id: user.id,
        user,
    });

    Ok(next.run(request).await)
}
