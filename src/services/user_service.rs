//! User service for business logic operations.
//!
//! Owns the credential rules: username shape, password length, uniqueness
//! among live users, and hashing before anything reaches storage.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{NewUser, Page, PageRequest, Resource, User, UserChanges};
use crate::repositories::UserRepository;
use crate::utils::PasswordHasher;

pub const USERNAME_MIN_LEN: usize = 6;
pub const USERNAME_MAX_LEN: usize = 30;
pub const PASSWORD_MIN_LEN: usize = 7;

/// Starts with an ASCII letter, then letters, digits or underscores; 6 to 30 long.
pub fn validate_username(username: &str) -> AppResult<()> {
    let starts_with_letter = username
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic());
    let allowed = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_');
    let len = username.chars().count();

    if !starts_with_letter || !allowed || !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
        return Err(AppError::validation(
            "username",
            format!(
                "must start with a letter and contain {USERNAME_MIN_LEN}-{USERNAME_MAX_LEN} letters, digits or underscores"
            ),
        ));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> AppResult<()> {
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(AppError::validation(
            "password",
            format!("must be at least {PASSWORD_MIN_LEN} characters"),
        ));
    }
    Ok(())
}

/// User service for handling user-related business logic.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>, hasher: PasswordHasher) -> Self {
        Self { repo, hasher }
    }

    fn not_found(id: Uuid) -> AppError {
        AppError::not_found(User::NAME, User::ID_FIELD, id)
    }

    async fn ensure_username_free(&self, username: &str, owner: Option<Uuid>) -> AppResult<()> {
        match self.repo.find_by_username(username).await? {
            Some(existing) if Some(existing.id) != owner => Err(AppError::Duplicate {
                entity: User::NAME.to_string(),
                field: "username".to_string(),
                value: username.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Creates a user. `new_user.password` carries the plaintext password
    /// and is replaced by its hash before storage.
    pub async fn create_user(&self, mut new_user: NewUser) -> AppResult<User> {
        validate_username(&new_user.username)?;
        validate_password(&new_user.password)?;
        self.ensure_username_free(&new_user.username, None).await?;

        new_user.password = self.hasher.hash_async(new_user.password).await?;
        let user = self.repo.create(&new_user).await?;
        tracing::info!(user_id = %user.id, username = %user.username, "User created");
        Ok(user)
    }

    pub async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.repo.find_by_username(username).await
    }

    pub async fn list_users(&self, page: PageRequest) -> AppResult<Page<User>> {
        self.repo.list(page).await
    }

    /// Applies a partial update. A new username is re-checked for shape and
    /// uniqueness; a new password (plaintext) is re-hashed.
    pub async fn update_user(&self, id: Uuid, mut changes: UserChanges) -> AppResult<User> {
        if let Some(ref username) = changes.username {
            validate_username(username)?;
            self.ensure_username_free(username, Some(id)).await?;
        }
        if let Some(password) = changes.password.take() {
            validate_password(&password)?;
            changes.password = Some(self.hasher.hash_async(password).await?);
        }

        self.repo
            .update(id, &changes)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    pub async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        if !self.repo.soft_delete(id).await? {
            return Err(Self::not_found(id));
        }
        tracing::info!(user_id = %id, "User soft-deleted");
        Ok(())
    }

    pub async fn verify_password(&self, user: &User, password: &str) -> AppResult<bool> {
        self.hasher
            .verify_async(password.to_string(), user.password.clone())
            .await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::PasswordConfig;
    use crate::repositories::memory::MemoryRepository;
    use proptest::prelude::*;

    pub(crate) fn test_hasher() -> PasswordHasher {
        PasswordHasher::new(&PasswordConfig {
            memory_cost_kib: 8,
            iterations: 1,
            parallelism: 1,
        })
        .unwrap()
    }

    pub(crate) fn new_user(username: &str, password: &str) -> NewUser {
        NewUser {
            first_name: None,
            last_name: None,
            age: None,
            phone: None,
            picture: None,
            username: username.to_string(),
            password: password.to_string(),
            card_no: None,
        }
    }

    fn service() -> (UserService, Arc<MemoryRepository<User>>) {
        let repo = Arc::new(MemoryRepository::<User>::default());
        (UserService::new(repo.clone(), test_hasher()), repo)
    }

    #[tokio::test]
    async fn test_create_hashes_password() {
        let (service, _) = service();
        let user = service
            .create_user(new_user("alice1", "secret123"))
            .await
            .unwrap();

        assert_ne!(user.password, "secret123");
        assert!(user.password.starts_with("$argon2id$"));
        assert!(service.verify_password(&user, "secret123").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let (service, repo) = service();
        service
            .create_user(new_user("alice1", "secret123"))
            .await
            .unwrap();

        let second = service.create_user(new_user("alice1", "other1234")).await;
        assert!(matches!(second, Err(AppError::Duplicate { field, .. }) if field == "username"));
        assert_eq!(repo.stored_rows(), 1);
    }

    #[tokio::test]
    async fn test_invalid_credentials_store_nothing() {
        let (service, repo) = service();
        for (username, password) in [
            ("bob", "secret123"),
            ("1alice", "secret123"),
            ("alice-1", "secret123"),
            ("alice1", "short"),
        ] {
            assert!(matches!(
                service.create_user(new_user(username, password)).await,
                Err(AppError::Validation { .. })
            ));
        }
        assert_eq!(repo.stored_rows(), 0);
    }

    #[tokio::test]
    async fn test_update_rehashes_password_and_checks_username() {
        let (service, _) = service();
        let alice = service
            .create_user(new_user("alice1", "secret123"))
            .await
            .unwrap();
        service
            .create_user(new_user("bobby1", "secret123"))
            .await
            .unwrap();

        let taken = service
            .update_user(
                alice.id,
                UserChanges {
                    username: Some("bobby1".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(taken, Err(AppError::Duplicate { .. })));

        let updated = service
            .update_user(
                alice.id,
                UserChanges {
                    username: Some("alice1".to_string()),
                    password: Some("newsecret1".to_string()),
                    age: Some(30),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.age, Some(30));
        assert!(service.verify_password(&updated, "newsecret1").await.unwrap());
        assert!(!service.verify_password(&updated, "secret123").await.unwrap());
    }

    #[tokio::test]
    async fn test_deleted_username_can_be_reused() {
        let (service, _) = service();
        let first = service
            .create_user(new_user("alice1", "secret123"))
            .await
            .unwrap();
        service.delete_user(first.id).await.unwrap();

        assert!(matches!(
            service.get_user(first.id).await,
            Err(AppError::NotFound { .. })
        ));
        assert!(
            service
                .create_user(new_user("alice1", "secret123"))
                .await
                .is_ok()
        );
    }

    proptest! {
        #[test]
        fn prop_well_formed_usernames_pass(username in "[A-Za-z][A-Za-z0-9_]{5,29}") {
            prop_assert!(validate_username(&username).is_ok());
        }

        #[test]
        fn prop_short_or_long_usernames_fail(username in "[A-Za-z][A-Za-z0-9_]{0,4}|[A-Za-z][A-Za-z0-9_]{30,40}") {
            prop_assert!(validate_username(&username).is_err());
        }

        #[test]
        fn prop_leading_non_letter_fails(username in "[0-9_][A-Za-z0-9_]{5,29}") {
            prop_assert!(validate_username(&username).is_err());
        }

        #[test]
        fn prop_short_passwords_fail(password in ".{0,6}") {
            prop_assert!(validate_password(&password).is_err());
        }
    }
}
