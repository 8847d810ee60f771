//! User CRUD request handlers.

use axum::extract::{Path, Query, State};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use uuid::Uuid;

use crate::api::doc::USER_TAG;
use crate::api::dto::{
    ApiResponse, CreateUserRequest, ErrorResponse, ListParams, UpdateUserRequest,
    UserListResponse, UserResponse,
};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::ValidatedJson;

/// Creates user-related routes.
///
/// Routes:
/// - POST /users         - Create a user
/// - GET /users          - List users
/// - PUT /users          - Update the user named by `id` in the body
/// - GET /users/{id}     - Get user by ID
/// - DELETE /users/{id}  - Soft-delete user by ID
pub fn user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_user, list_users, update_user))
        .routes(routes!(get_user, delete_user))
}

#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserResponse>),
        (status = 400, description = "Invalid request data", body = ErrorResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse)
    )
)]
async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<ApiResponse<UserResponse>> {
    let user = state
        .services
        .users
        .create_user(payload.into_new_user())
        .await?;
    Ok(ApiResponse::created("User successfully created", user.into()))
}

#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Page of users", body = ApiResponse<UserListResponse>),
        (status = 400, description = "Invalid offset or limit", body = ErrorResponse)
    )
)]
async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<ApiResponse<UserListResponse>> {
    let page = params.resolve(&state.pagination)?;
    let page = state.services.users.list_users(page).await?;
    Ok(ApiResponse::ok(
        "Users",
        UserListResponse {
            count: page.count,
            users: page.items.into_iter().map(UserResponse::from).collect(),
        },
    ))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = ApiResponse<UserResponse>),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse<UserResponse>> {
    let user = state.services.users.get_user(id).await?;
    Ok(ApiResponse::ok("User", user.into()))
}

#[utoipa::path(
    put,
    path = "/users",
    tag = USER_TAG,
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserResponse>),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse)
    )
)]
async fn update_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<ApiResponse<UserResponse>> {
    let (id, changes) = payload.into_changes();
    let user = state.services.users.update_user(id, changes).await?;
    Ok(ApiResponse::ok("User successfully updated", user.into()))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse<()>> {
    state.services.users.delete_user(id).await?;
    Ok(ApiResponse::empty("User successfully deleted"))
}
