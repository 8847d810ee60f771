//! Authentication-related Data Transfer Objects

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Login request payload
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "alice1")]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "secret123", format = "password")]
    pub password: String,
}

/// Register request payload
///
/// Shape rules (letter first, 6-30 of `[A-Za-z0-9_]`, password of at
/// least 7 characters) are enforced by the user service.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "alice1", min_length = 6, max_length = 30)]
    pub username: String,
    #[schema(example = "secret123", format = "password", min_length = 7)]
    pub password: String,
}
