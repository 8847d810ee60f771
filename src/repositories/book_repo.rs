//! Book repository for async database operations.

use async_trait::async_trait;
use diesel::dsl::now;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use super::ResourceRepository;
use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Book, BookChanges, NewBook, Page, PageRequest};
use crate::schema::books;

#[derive(Clone)]
pub struct PgBookRepository {
    pool: AsyncDbPool,
}

impl PgBookRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResourceRepository<Book> for PgBookRepository {
    async fn create(&self, new_row: &NewBook) -> AppResult<Book> {
        let mut conn = self.pool.get().await?;

        diesel::insert_into(books::table)
            .values(new_row)
            .returning(Book::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_by_id(&self, book_id: Uuid) -> AppResult<Option<Book>> {
        let mut conn = self.pool.get().await?;

        books::table
            .filter(books::id.eq(book_id))
            .filter(books::is_deleted.eq(false))
            .select(Book::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn list(&self, page: PageRequest) -> AppResult<Page<Book>> {
        let mut conn = self.pool.get().await?;

        let count: i64 = books::table
            .filter(books::is_deleted.eq(false))
            .count()
            .get_result(&mut conn)
            .await?;

        let items = books::table
            .filter(books::is_deleted.eq(false))
            .order((books::created_at.asc(), books::id.asc()))
            .offset(page.offset)
            .limit(page.limit)
            .select(Book::as_select())
            .load(&mut conn)
            .await?;

        Ok(Page { count, items })
    }

    async fn update(&self, book_id: Uuid, changes: &BookChanges) -> AppResult<Option<Book>> {
        let mut conn = self.pool.get().await?;

        diesel::update(
            books::table
                .filter(books::id.eq(book_id))
                .filter(books::is_deleted.eq(false)),
        )
        .set((changes, books::updated_at.eq(now)))
        .returning(Book::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(AppError::from)
    }

    async fn soft_delete(&self, book_id: Uuid) -> AppResult<bool> {
        let mut conn = self.pool.get().await?;

        let affected = diesel::update(
            books::table
                .filter(books::id.eq(book_id))
                .filter(books::is_deleted.eq(false)),
        )
        .set((books::is_deleted.eq(true), books::updated_at.eq(now)))
        .execute(&mut conn)
        .await?;

        Ok(affected > 0)
    }
}
