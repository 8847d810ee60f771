//! Repository layer for data access operations.
//!
//! Every table is soft-deleted: reads never return rows with
//! `is_deleted = TRUE`, and updates or deletes never touch them.

mod book_repo;
mod category_repo;
mod order_item_repo;
mod order_repo;
mod user_repo;

#[cfg(test)]
pub(crate) mod memory;

pub use book_repo::PgBookRepository;
pub use category_repo::PgCategoryRepository;
pub use order_item_repo::PgOrderItemRepository;
pub use order_repo::PgOrderRepository;
pub use user_repo::PgUserRepository;

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::AppResult;
use crate::models::{Book, Category, Order, OrderItem, Page, PageRequest, Resource, User};

/// Create/read/update/delete/list against one soft-deletable table.
#[async_trait]
pub trait ResourceRepository<E: Resource>: Send + Sync {
    /// Inserts a row and returns it as stored, in a single statement.
    async fn create(&self, new: &E::New) -> AppResult<E>;

    /// Finds a live row by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<E>>;

    /// Returns the total number of live rows plus the requested slice,
    /// ordered by `(created_at, id)`.
    async fn list(&self, page: PageRequest) -> AppResult<Page<E>>;

    /// Applies a partial update to a live row, touching `updated_at`.
    /// Returns `None` when no live row has this id.
    async fn update(&self, id: Uuid, changes: &E::Changes) -> AppResult<Option<E>>;

    /// Marks a live row deleted. Returns `false` when no live row has this id.
    async fn soft_delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Users additionally resolve by their unique username.
#[async_trait]
pub trait UserRepository: ResourceRepository<User> {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
}

/// Aggregates all repositories for convenient access.
///
/// Trait objects keep services independent of the storage backend.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub books: Arc<dyn ResourceRepository<Book>>,
    pub categories: Arc<dyn ResourceRepository<Category>>,
    pub orders: Arc<dyn ResourceRepository<Order>>,
    pub order_items: Arc<dyn ResourceRepository<OrderItem>>,
}

impl Repositories {
    /// Creates PostgreSQL-backed repositories sharing one pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            books: Arc::new(PgBookRepository::new(pool.clone())),
            categories: Arc::new(PgCategoryRepository::new(pool.clone())),
            orders: Arc::new(PgOrderRepository::new(pool.clone())),
            order_items: Arc::new(PgOrderItemRepository::new(pool)),
        }
    }
}
