//! Order repository for async database operations.

use async_trait::async_trait;
use diesel::dsl::now;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use super::ResourceRepository;
use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{NewOrder, Order, OrderChanges, Page, PageRequest};
use crate::schema::orders;

#[derive(Clone)]
pub struct PgOrderRepository {
    pool: AsyncDbPool,
}

impl PgOrderRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResourceRepository<Order> for PgOrderRepository {
    async fn create(&self, new_row: &NewOrder) -> AppResult<Order> {
        let mut conn = self.pool.get().await?;

        diesel::insert_into(orders::table)
            .values(new_row)
            .returning(Order::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_by_id(&self, order_id: Uuid) -> AppResult<Option<Order>> {
        let mut conn = self.pool.get().await?;

        orders::table
            .filter(orders::id.eq(order_id))
            .filter(orders::is_deleted.eq(false))
            .select(Order::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn list(&self, page: PageRequest) -> AppResult<Page<Order>> {
        let mut conn = self.pool.get().await?;

        let count: i64 = orders::table
            .filter(orders::is_deleted.eq(false))
            .count()
            .get_result(&mut conn)
            .await?;

        let items = orders::table
            .filter(orders::is_deleted.eq(false))
            .order((orders::created_at.asc(), orders::id.asc()))
            .offset(page.offset)
            .limit(page.limit)
            .select(Order::as_select())
            .load(&mut conn)
            .await?;

        Ok(Page { count, items })
    }

    async fn update(&self, order_id: Uuid, changes: &OrderChanges) -> AppResult<Option<Order>> {
        let mut conn = self.pool.get().await?;

        diesel::update(
            orders::table
                .filter(orders::id.eq(order_id))
                .filter(orders::is_deleted.eq(false)),
        )
        .set((changes, orders::updated_at.eq(now)))
        .returning(Order::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(AppError::from)
    }

    async fn soft_delete(&self, order_id: Uuid) -> AppResult<bool> {
        let mut conn = self.pool.get().await?;

        let affected = diesel::update(
            orders::table
                .filter(orders::id.eq(order_id))
                .filter(orders::is_deleted.eq(false)),
        )
        .set((orders::is_deleted.eq(true), orders::updated_at.eq(now)))
        .execute(&mut conn)
        .await?;

        Ok(affected > 0)
    }
}
