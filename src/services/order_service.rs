//! Orders and order items, which must point at live rows.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{
    Book, NewOrder, NewOrderItem, Order, OrderChanges, OrderItem, OrderItemChanges, Page,
    PageRequest, Resource, User,
};
use crate::repositories::{ResourceRepository, UserRepository};
use crate::services::CrudService;

async fn ensure_exists<E: Resource>(
    repo: &dyn ResourceRepository<E>,
    field: &str,
    id: Uuid,
) -> AppResult<()> {
    match repo.find_by_id(id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::not_found(E::NAME, field, id)),
    }
}

#[derive(Clone)]
pub struct OrderService {
    orders: CrudService<Order>,
    users: Arc<dyn UserRepository>,
}

impl OrderService {
    pub fn new(orders: Arc<dyn ResourceRepository<Order>>, users: Arc<dyn UserRepository>) -> Self {
        Self {
            orders: CrudService::new(orders),
            users,
        }
    }

    async fn ensure_user(&self, user_id: Uuid) -> AppResult<()> {
        match self.users.find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found(User::NAME, "user_id", user_id)),
        }
    }

    pub async fn create(&self, new: NewOrder) -> AppResult<Order> {
        self.ensure_user(new.user_id).await?;
        self.orders.create(new).await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Order> {
        self.orders.get(id).await
    }

    pub async fn list(&self, page: PageRequest) -> AppResult<Page<Order>> {
        self.orders.list(page).await
    }

    pub async fn update(&self, id: Uuid, changes: OrderChanges) -> AppResult<Order> {
        if let Some(user_id) = changes.user_id {
            self.ensure_user(user_id).await?;
        }
        self.orders.update(id, changes).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.orders.delete(id).await
    }
}

#[derive(Clone)]
pub struct OrderItemService {
    items: CrudService<OrderItem>,
    orders: Arc<dyn ResourceRepository<Order>>,
    books: Arc<dyn ResourceRepository<Book>>,
}

impl OrderItemService {
    pub fn new(
        items: Arc<dyn ResourceRepository<OrderItem>>,
        orders: Arc<dyn ResourceRepository<Order>>,
        books: Arc<dyn ResourceRepository<Book>>,
    ) -> Self {
        Self {
            items: CrudService::new(items),
            orders,
            books,
        }
    }

    pub async fn create(&self, new: NewOrderItem) -> AppResult<OrderItem> {
        ensure_exists(self.orders.as_ref(), "order_id", new.order_id).await?;
        ensure_exists(self.books.as_ref(), "book_id", new.book_id).await?;
        self.items.create(new).await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<OrderItem> {
        self.items.get(id).await
    }

    pub async fn list(&self, page: PageRequest) -> AppResult<Page<OrderItem>> {
        self.items.list(page).await
    }

    pub async fn update(&self, id: Uuid, changes: OrderItemChanges) -> AppResult<OrderItem> {
        if let Some(order_id) = changes.order_id {
            ensure_exists(self.orders.as_ref(), "order_id", order_id).await?;
        }
        if let Some(book_id) = changes.book_id {
            ensure_exists(self.books.as_ref(), "book_id", book_id).await?;
        }
        self.items.update(id, changes).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.items.delete(id).await
    }
}
