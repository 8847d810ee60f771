//! In-memory repositories for service and router tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use jiff_diesel::ToDiesel;
use uuid::Uuid;

use super::{Repositories, ResourceRepository, UserRepository};
use crate::error::AppResult;
use crate::models::{
    Book, BookChanges, Category, CategoryChanges, NewBook, NewCategory, NewOrder, NewOrderItem,
    NewUser, Order, OrderChanges, OrderItem, OrderItemChanges, Page, PageRequest, Resource, User,
    UserChanges,
};

/// How a row is built from its insert payload and patched by its changeset.
pub(crate) trait MemoryEntity: Resource {
    fn build(new: &Self::New) -> Self;
    fn apply(&mut self, changes: &Self::Changes);
    fn touch(&mut self);
}

/// Rows kept in insertion order, each with its soft-delete flag.
pub(crate) struct MemoryRepository<E> {
    rows: Mutex<Vec<(E, bool)>>,
}

impl<E> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
        }
    }
}

impl<E: MemoryEntity> MemoryRepository<E> {
    /// Number of stored rows, deleted ones included.
    pub(crate) fn stored_rows(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl<E: MemoryEntity> ResourceRepository<E> for MemoryRepository<E> {
    async fn create(&self, new: &E::New) -> AppResult<E> {
        let row = E::build(new);
        self.rows.lock().unwrap().push((row.clone(), false));
        Ok(row)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<E>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|(row, deleted)| !deleted && row.id() == id)
            .map(|(row, _)| row.clone()))
    }

    async fn list(&self, page: PageRequest) -> AppResult<Page<E>> {
        let rows = self.rows.lock().unwrap();
        let live: Vec<&E> = rows.iter().filter(|(_, d)| !d).map(|(r, _)| r).collect();
        Ok(Page {
            count: live.len() as i64,
            items: live
                .into_iter()
                .skip(page.offset as usize)
                .take(page.limit as usize)
                .cloned()
                .collect(),
        })
    }

    async fn update(&self, id: Uuid, changes: &E::Changes) -> AppResult<Option<E>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows
            .iter_mut()
            .find(|(row, deleted)| !deleted && row.id() == id)
            .map(|(row, _)| {
                row.apply(changes);
                row.touch();
                row.clone()
            }))
    }

    async fn soft_delete(&self, id: Uuid) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows
            .iter_mut()
            .find(|(row, deleted)| !deleted && row.id() == id)
        {
            Some((row, deleted)) => {
                *deleted = true;
                row.touch();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl UserRepository for MemoryRepository<User> {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|(row, deleted)| !deleted && row.username == username)
            .map(|(row, _)| row.clone()))
    }
}

fn now() -> jiff_diesel::Timestamp {
    jiff::Timestamp::now().to_diesel()
}

fn patch<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

fn patch_opt<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
    if value.is_some() {
        *target = value.clone();
    }
}

impl MemoryEntity for User {
    fn build(new: &NewUser) -> Self {
        User {
            id: Uuid::new_v4(),
            first_name: new.first_name.clone(),
            last_name: new.last_name.clone(),
            age: new.age,
            phone: new.phone.clone(),
            picture: new.picture.clone(),
            username: new.username.clone(),
            password: new.password.clone(),
            card_no: new.card_no.clone(),
            created_at: now(),
            updated_at: now(),
        }
    }

    fn apply(&mut self, changes: &UserChanges) {
        patch_opt(&mut self.first_name, &changes.first_name);
        patch_opt(&mut self.last_name, &changes.last_name);
        patch_opt(&mut self.age, &changes.age);
        patch_opt(&mut self.phone, &changes.phone);
        patch_opt(&mut self.picture, &changes.picture);
        patch(&mut self.username, &changes.username);
        patch(&mut self.password, &changes.password);
        patch_opt(&mut self.card_no, &changes.card_no);
    }

    fn touch(&mut self) {
        self.updated_at = now();
    }
}

impl MemoryEntity for Book {
    fn build(new: &NewBook) -> Self {
        Book {
            id: Uuid::new_v4(),
            title: new.title.clone(),
            author: new.author.clone(),
            publisher: new.publisher.clone(),
            category: new.category.clone(),
            num_pages: new.num_pages,
            lang: new.lang.clone(),
            created_at: now(),
            updated_at: now(),
        }
    }

    fn apply(&mut self, changes: &BookChanges) {
        patch(&mut self.title, &changes.title);
        patch(&mut self.author, &changes.author);
        patch_opt(&mut self.publisher, &changes.publisher);
        patch_opt(&mut self.category, &changes.category);
        patch(&mut self.num_pages, &changes.num_pages);
        patch_opt(&mut self.lang, &changes.lang);
    }

    fn touch(&mut self) {
        self.updated_at = now();
    }
}

impl MemoryEntity for Category {
    fn build(new: &NewCategory) -> Self {
        Category {
            id: Uuid::new_v4(),
            name: new.name.clone(),
            kind: new.kind.clone(),
            picture: new.picture.clone(),
            created_at: now(),
            updated_at: now(),
        }
    }

    fn apply(&mut self, changes: &CategoryChanges) {
        patch(&mut self.name, &changes.name);
        patch_opt(&mut self.kind, &changes.kind);
        patch_opt(&mut self.picture, &changes.picture);
    }

    fn touch(&mut self) {
        self.updated_at = now();
    }
}

impl MemoryEntity for Order {
    fn build(new: &NewOrder) -> Self {
        Order {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            created_at: now(),
            updated_at: now(),
        }
    }

    fn apply(&mut self, changes: &OrderChanges) {
        patch(&mut self.user_id, &changes.user_id);
    }

    fn touch(&mut self) {
        self.updated_at = now();
    }
}

impl MemoryEntity for OrderItem {
    fn build(new: &NewOrderItem) -> Self {
        OrderItem {
            id: Uuid::new_v4(),
            order_id: new.order_id,
            book_id: new.book_id,
            created_at: now(),
            updated_at: now(),
        }
    }

    fn apply(&mut self, changes: &OrderItemChanges) {
        patch(&mut self.order_id, &changes.order_id);
        patch(&mut self.book_id, &changes.book_id);
    }

    fn touch(&mut self) {
        self.updated_at = now();
    }
}

/// Concrete handles kept next to the trait objects so tests can inspect storage.
#[derive(Clone, Default)]
pub(crate) struct MemoryStore {
    pub users: Arc<MemoryRepository<User>>,
    pub books: Arc<MemoryRepository<Book>>,
    pub categories: Arc<MemoryRepository<Category>>,
    pub orders: Arc<MemoryRepository<Order>>,
    pub order_items: Arc<MemoryRepository<OrderItem>>,
}

impl MemoryStore {
    pub(crate) fn repositories(&self) -> Repositories {
        Repositories {
            users: self.users.clone(),
            books: self.books.clone(),
            categories: self.categories.clone(),
            orders: self.orders.clone(),
            order_items: self.order_items.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_book(title: &str) -> NewBook {
        NewBook {
            title: title.to_string(),
            author: "Author".to_string(),
            publisher: None,
            category: None,
            num_pages: 100,
            lang: None,
        }
    }

    #[tokio::test]
    async fn test_soft_deleted_rows_are_invisible() {
        let repo = MemoryRepository::<Book>::default();
        let kept = repo.create(&new_book("kept")).await.unwrap();
        let gone = repo.create(&new_book("gone")).await.unwrap();

        assert!(repo.soft_delete(gone.id).await.unwrap());
        assert!(!repo.soft_delete(gone.id).await.unwrap());

        assert!(repo.find_by_id(gone.id).await.unwrap().is_none());
        let page = repo.list(PageRequest::new(0, 10)).await.unwrap();
        assert_eq!(page.count, 1);
        assert_eq!(page.items[0].id, kept.id);
        assert!(repo
            .update(gone.id, &BookChanges::default())
            .await
            .unwrap()
            .is_none());
        assert_eq!(repo.stored_rows(), 2);
    }

    #[tokio::test]
    async fn test_offset_past_end_keeps_count() {
        let repo = MemoryRepository::<Book>::default();
        for i in 0..3 {
            repo.create(&new_book(&format!("book {i}"))).await.unwrap();
        }

        let page = repo.list(PageRequest::new(3, 10)).await.unwrap();
        assert_eq!(page.count, 3);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn test_page_is_capped_at_limit_while_count_is_total() {
        let repo = MemoryRepository::<Book>::default();
        for i in 0..12 {
            repo.create(&new_book(&format!("book {i}"))).await.unwrap();
        }

        let first = repo.list(PageRequest::new(0, 10)).await.unwrap();
        assert_eq!(first.count, 12);
        assert_eq!(first.items.len(), 10);

        let second = repo.list(PageRequest::new(10, 10)).await.unwrap();
        assert_eq!(second.count, 12);
        assert_eq!(second.items.len(), 2);

        let mut ids: Vec<_> = first.items.iter().chain(&second.items).map(|b| b.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 12);
    }
}
