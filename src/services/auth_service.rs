//! Session issuance and validation.
//!
//! Tokens are stateless: nothing is stored server-side, so a token stays
//! valid until it expires or the signing secret changes.

use crate::error::{AppError, AppResult};
use crate::models::{NewUser, User};
use crate::services::UserService;
use crate::utils::JwtManager;

#[derive(Clone)]
pub struct AuthService {
    users: UserService,
    jwt: JwtManager,
}

impl AuthService {
    pub fn new(users: UserService, jwt: JwtManager) -> Self {
        Self { users, jwt }
    }

    /// Seconds a freshly issued token stays valid.
    pub fn token_lifetime_secs(&self) -> i64 {
        self.jwt.lifetime_secs()
    }

    pub async fn register(&self, username: String, password: String) -> AppResult<User> {
        self.users
            .create_user(NewUser {
                first_name: None,
                last_name: None,
                age: None,
                phone: None,
                picture: None,
                username,
                password,
                card_no: None,
            })
            .await
    }

    /// Checks credentials and issues a token for the matching user.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<String> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found("user", "username", username))?;

        if !self.users.verify_password(&user, password).await? {
            tracing::warn!(username = %username, "Login rejected: wrong password");
            return Err(AppError::unauthorized("Invalid username or password"));
        }

        let token = self.jwt.issue(user.id)?;
        tracing::info!(user_id = %user.id, "User logged in");
        Ok(token)
    }

    /// Resolves a token to a live user.
    ///
    /// A token whose subject has since been deleted is `NotFound`, not `Unauthorized`.
    pub async fn authenticate(&self, token: &str) -> AppResult<User> {
        let claims = self.jwt.validate(token)?;
        self.users.get_user(claims.user_id).await
    }
}
