//! User repository for async database operations.

use async_trait::async_trait;
use diesel::dsl::now;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use super::{ResourceRepository, UserRepository};
use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{NewUser, Page, PageRequest, User, UserChanges};
use crate::schema::users;

/// User repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: AsyncDbPool,
}

impl PgUserRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResourceRepository<User> for PgUserRepository {
    async fn create(&self, new_user: &NewUser) -> AppResult<User> {
        let mut conn = self.pool.get().await?;

        diesel::insert_into(users::table)
            .values(new_user)
            .returning(User::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_by_id(&self, user_id: Uuid) -> AppResult<Option<User>> {
        let mut conn = self.pool.get().await?;

        users::table
            .filter(users::id.eq(user_id))
            .filter(users::is_deleted.eq(false))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn list(&self, page: PageRequest) -> AppResult<Page<User>> {
        let mut conn = self.pool.get().await?;

        let count: i64 = users::table
            .filter(users::is_deleted.eq(false))
            .count()
            .get_result(&mut conn)
            .await?;

        let items = users::table
            .filter(users::is_deleted.eq(false))
            .order((users::created_at.asc(), users::id.asc()))
            .offset(page.offset)
            .limit(page.limit)
            .select(User::as_select())
            .load(&mut conn)
            .await?;

        Ok(Page { count, items })
    }

    async fn update(&self, user_id: Uuid, changes: &UserChanges) -> AppResult<Option<User>> {
        let mut conn = self.pool.get().await?;

        diesel::update(
            users::table
                .filter(users::id.eq(user_id))
                .filter(users::is_deleted.eq(false)),
        )
        .set((changes, users::updated_at.eq(now)))
        .returning(User::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(AppError::from)
    }

    async fn soft_delete(&self, user_id: Uuid) -> AppResult<bool> {
        let mut conn = self.pool.get().await?;

        let affected = diesel::update(
            users::table
                .filter(users::id.eq(user_id))
                .filter(users::is_deleted.eq(false)),
        )
        .set((users::is_deleted.eq(true), users::updated_at.eq(now)))
        .execute(&mut conn)
        .await?;

        Ok(affected > 0)
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_username(&self, name: &str) -> AppResult<Option<User>> {
        let mut conn = self.pool.get().await?;

        users::table
            .filter(users::username.eq(name))
            .filter(users::is_deleted.eq(false))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }
}
