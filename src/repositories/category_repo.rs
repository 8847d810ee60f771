//! Category repository for async database operations.

use async_trait::async_trait;
use diesel::dsl::now;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use super::ResourceRepository;
use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Category, CategoryChanges, NewCategory, Page, PageRequest};
use crate::schema::categories;

#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: AsyncDbPool,
}

impl PgCategoryRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResourceRepository<Category> for PgCategoryRepository {
    async fn create(&self, new_row: &NewCategory) -> AppResult<Category> {
        let mut conn = self.pool.get().await?;

        diesel::insert_into(categories::table)
            .values(new_row)
            .returning(Category::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_by_id(&self, category_id: Uuid) -> AppResult<Option<Category>> {
        let mut conn = self.pool.get().await?;

        categories::table
            .filter(categories::id.eq(category_id))
            .filter(categories::is_deleted.eq(false))
            .select(Category::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn list(&self, page: PageRequest) -> AppResult<Page<Category>> {
        let mut conn = self.pool.get().await?;

        let count: i64 = categories::table
            .filter(categories::is_deleted.eq(false))
            .count()
            .get_result(&mut conn)
            .await?;

        let items = categories::table
            .filter(categories::is_deleted.eq(false))
            .order((categories::created_at.asc(), categories::id.asc()))
            .offset(page.offset)
            .limit(page.limit)
            .select(Category::as_select())
            .load(&mut conn)
            .await?;

        Ok(Page { count, items })
    }

    async fn update(&self, category_id: Uuid, changes: &CategoryChanges) -> AppResult<Option<Category>> {
        let mut conn = self.pool.get().await?;

        diesel::update(
            categories::table
                .filter(categories::id.eq(category_id))
                .filter(categories::is_deleted.eq(false)),
        )
        .set((changes, categories::updated_at.eq(now)))
        .returning(Category::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(AppError::from)
    }

    async fn soft_delete(&self, category_id: Uuid) -> AppResult<bool> {
        let mut conn = self.pool.get().await?;

        let affected = diesel::update(
            categories::table
                .filter(categories::id.eq(category_id))
                .filter(categories::is_deleted.eq(false)),
        )
        .set((categories::is_deleted.eq(true), categories::updated_at.eq(now)))
        .execute(&mut conn)
        .await?;

        Ok(affected > 0)
    }
}
