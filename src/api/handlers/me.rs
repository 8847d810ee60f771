//! Current user (me) endpoint.

use axum::Extension;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::AUTH_TAG;
use crate::api::dto::{ApiResponse, ErrorResponse, UserResponse};
use crate::api::middleware::AuthUser;
use crate::state::AppState;

pub fn me_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(get_me))
}

/// GET /me - The user the session token belongs to
#[utoipa::path(
    get,
    path = "/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user information", body = ApiResponse<UserResponse>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("cookieAuth" = []), ("bearerAuth" = []))
)]
async fn get_me(Extension(auth_user): Extension<AuthUser>) -> ApiResponse<UserResponse> {
    ApiResponse::ok("Current user", auth_user.user.into())
}
