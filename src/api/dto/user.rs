//! User-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::format_timestamp;
use crate::models::{NewUser, User, UserChanges};

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new user.
///
/// Username and password follow the registration rules.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateUserRequest {
    #[validate(length(max = 100))]
    pub first_name: Option<String>,
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: Option<i32>,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    pub picture: Option<String>,
    #[schema(example = "alice1", min_length = 6, max_length = 30)]
    pub username: String,
    #[schema(format = "password", min_length = 7)]
    pub password: String,
    #[validate(length(max = 32))]
    pub card_no: Option<String>,
}

impl CreateUserRequest {
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
            phone: self.phone,
            picture: self.picture,
            username: self.username,
            password: self.password,
            card_no: self.card_no,
        }
    }
}

/// Request body for updating a user; omitted fields are left unchanged.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateUserRequest {
    pub id: Uuid,
    #[validate(length(max = 100))]
    pub first_name: Option<String>,
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: Option<i32>,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    pub picture: Option<String>,
    pub username: Option<String>,
    #[schema(format = "password")]
    pub password: Option<String>,
    #[validate(length(max = 32))]
    pub card_no: Option<String>,
}

impl UpdateUserRequest {
    pub fn into_changes(self) -> (Uuid, UserChanges) {
        (
            self.id,
            UserChanges {
                first_name: self.first_name,
                last_name: self.last_name,
                age: self.age,
                phone: self.phone,
                picture: self.picture,
                username: self.username,
                password: self.password,
                card_no: self.card_no,
            },
        )
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// User data as returned to clients; the password hash is never included.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub phone: Option<String>,
    pub picture: Option<String>,
    pub username: String,
    pub card_no: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            created_at: format_timestamp(&user.created_at),
            updated_at: format_timestamp(&user.updated_at),
            first_name: user.first_name,
            last_name: user.last_name,
            age: user.age,
            phone: user.phone,
            picture: user.picture,
            username: user.username,
            card_no: user.card_no,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserListResponse {
    pub count: i64,
    pub users: Vec<UserResponse>,
}
