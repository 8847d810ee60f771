//! Authentication handlers: login, registration and logout.

use axum::{Json, extract::State};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::AUTH_TAG;
use crate::api::dto::{ApiResponse, ErrorResponse, LoginRequest, RegisterRequest, UserResponse};
use crate::api::middleware::AUTH_COOKIE;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::ValidatedJson;

/// Creates the public authentication routes
///
/// # Routes
/// - `POST /login` - Check credentials and set the session cookie
/// - `POST /register` - Create an account
/// - `POST /logout` - Expire the session cookie
pub fn auth_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(login))
        .routes(routes!(register))
        .routes(routes!(logout))
}

fn session_cookie(token: String, max_age_secs: i64, secure: bool) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(time::Duration::seconds(max_age_secs))
        .build()
}

/// POST /login - Authenticate user
///
/// Returns the token in `data` and sets it as the `Authorization` cookie.
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<String>),
        (status = 401, description = "Wrong password", body = ErrorResponse),
        (status = 404, description = "Unknown username", body = ErrorResponse)
    )
)]
async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<(CookieJar, ApiResponse<String>)> {
    let token = state
        .services
        .auth
        .login(&payload.username, &payload.password)
        .await?;

    let cookie = session_cookie(
        token.clone(),
        state.services.auth.token_lifetime_secs(),
        state.cookie_secure,
    );

    Ok((jar.add(cookie), ApiResponse::ok("Login successful", token)))
}

/// POST /register - Register new user
#[utoipa::path(
    post,
    path = "/register",
    tag = AUTH_TAG,
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = ApiResponse<UserResponse>),
        (status = 400, description = "Invalid username or password", body = ErrorResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse)
    )
)]
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<ApiResponse<UserResponse>> {
    let user = state
        .services
        .auth
        .register(payload.username, payload.password)
        .await?;

    Ok(ApiResponse::created("User registered", user.into()))
}

/// POST /logout - Expire the session cookie
///
/// The token itself stays valid until it expires.
#[utoipa::path(
    post,
    path = "/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cookie cleared")
    )
)]
async fn logout(jar: CookieJar) -> (CookieJar, ApiResponse<()>) {
    let mut cookie = Cookie::from(AUTH_COOKIE);
    cookie.set_path("/");
    (jar.remove(cookie), ApiResponse::empty("Logged out"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("abc".to_string(), 3600, true);
        assert_eq!(cookie.name(), "Authorization");
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(time::Duration::hours(1)));
    }
}
