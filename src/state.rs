//! Application state for Axum web framework.
//!
//! Contains shared services and the request-level configuration handlers
//! need. Cloning is cheap since services share their repositories behind `Arc`.

use crate::config::{PaginationConfig, Settings, UploadConfig};
use crate::db::AsyncDbPool;
use crate::error::AppResult;
use crate::repositories::Repositories;
use crate::services::Services;
use crate::utils::{JwtManager, PasswordHasher};

#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Mark the session cookie `Secure`
    pub cookie_secure: bool,
    /// Defaults and bounds for list queries
    pub pagination: PaginationConfig,
    /// Upload target directory and size limit
    pub upload: UploadConfig,
}

impl AppState {
    pub fn new(services: Services, settings: &Settings) -> Self {
        Self {
            services,
            cookie_secure: settings.jwt.cookie_secure,
            pagination: settings.pagination.clone(),
            upload: settings.upload.clone(),
        }
    }

    /// Wires the PostgreSQL repositories and the auth helpers into a state.
    ///
    /// # Errors
    /// Fails when the password hashing parameters are invalid.
    pub fn from_pool(pool: AsyncDbPool, settings: &Settings) -> AppResult<Self> {
        let repos = Repositories::new(pool);
        let hasher = PasswordHasher::new(&settings.password)?;
        let jwt = JwtManager::new(&settings.jwt);
        Ok(Self::new(Services::new(repos, hasher, jwt), settings))
    }
}
