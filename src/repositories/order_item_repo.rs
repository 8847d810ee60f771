//! Order item repository for async database operations.

use async_trait::async_trait;
use diesel::dsl::now;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use super::ResourceRepository;
use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{NewOrderItem, OrderItem, OrderItemChanges, Page, PageRequest};
use crate::schema::order_items;

#[derive(Clone)]
pub struct PgOrderItemRepository {
    pool: AsyncDbPool,
}

impl PgOrderItemRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResourceRepository<OrderItem> for PgOrderItemRepository {
    async fn create(&self, new_row: &NewOrderItem) -> AppResult<OrderItem> {
        let mut conn = self.pool.get().await?;

        diesel::insert_into(order_items::table)
            .values(new_row)
            .returning(OrderItem::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_by_id(&self, item_id: Uuid) -> AppResult<Option<OrderItem>> {
        let mut conn = self.pool.get().await?;

        order_items::table
            .filter(order_items::id.eq(item_id))
            .filter(order_items::is_deleted.eq(false))
            .select(OrderItem::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn list(&self, page: PageRequest) -> AppResult<Page<OrderItem>> {
        let mut conn = self.pool.get().await?;

        let count: i64 = order_items::table
            .filter(order_items::is_deleted.eq(false))
            .count()
            .get_result(&mut conn)
            .await?;

        let items = order_items::table
            .filter(order_items::is_deleted.eq(false))
            .order((order_items::created_at.asc(), order_items::id.asc()))
            .offset(page.offset)
            .limit(page.limit)
            .select(OrderItem::as_select())
            .load(&mut conn)
            .await?;

        Ok(Page { count, items })
    }

    async fn update(&self, item_id: Uuid, changes: &OrderItemChanges) -> AppResult<Option<OrderItem>> {
        let mut conn = self.pool.get().await?;

        diesel::update(
            order_items::table
                .filter(order_items::id.eq(item_id))
                .filter(order_items::is_deleted.eq(false)),
        )
        .set((changes, order_items::updated_at.eq(now)))
        .returning(OrderItem::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(AppError::from)
    }

    async fn soft_delete(&self, item_id: Uuid) -> AppResult<bool> {
        let mut conn = self.pool.get().await?;

        let affected = diesel::update(
            order_items::table
                .filter(order_items::id.eq(item_id))
                .filter(order_items::is_deleted.eq(false)),
        )
        .set((order_items::is_deleted.eq(true), order_items::updated_at.eq(now)))
        .execute(&mut conn)
        .await?;

        Ok(affected > 0)
    }
}
