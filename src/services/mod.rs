//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers.

mod auth_service;
mod crud_service;
mod order_service;
pub(crate) mod user_service;

pub use auth_service::AuthService;
pub use crud_service::CrudService;
pub use order_service::{OrderItemService, OrderService};
pub use user_service::UserService;

use crate::models::{Book, Category};
use crate::repositories::Repositories;
use crate::utils::{JwtManager, PasswordHasher};

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since repositories are shared behind `Arc`.
#[derive(Clone)]
pub struct Services {
    pub auth: AuthService,
    pub users: UserService,
    pub books: CrudService<Book>,
    pub categories: CrudService<Category>,
    pub orders: OrderService,
    pub order_items: OrderItemService,
}

impl Services {
    pub fn new(repos: Repositories, hasher: PasswordHasher, jwt: JwtManager) -> Self {
        let users = UserService::new(repos.users.clone(), hasher);
        Self {
            auth: AuthService::new(users.clone(), jwt),
            users,
            books: CrudService::new(repos.books.clone()),
            categories: CrudService::new(repos.categories),
            orders: OrderService::new(repos.orders.clone(), repos.users),
            order_items: OrderItemService::new(repos.order_items, repos.orders, repos.books),
        }
    }
}
