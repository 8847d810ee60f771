//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `response` - The `{status, description, data}` envelope
//! - `pagination` - `offset`/`limit` query parameters
//! - `auth`, `user`, `book`, `category`, `order` - Resource payloads

mod auth;
mod book;
mod category;
mod order;
mod pagination;
mod response;
mod user;

pub use auth::{LoginRequest, RegisterRequest};
pub use book::{BookListResponse, BookResponse, CreateBookRequest, UpdateBookRequest};
pub use category::{
    CategoryListResponse, CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest,
};
pub use order::{
    CreateOrderItemRequest, CreateOrderRequest, OrderItemListResponse, OrderItemResponse,
    OrderListResponse, OrderResponse, UpdateOrderItemRequest, UpdateOrderRequest,
};
pub use pagination::ListParams;
pub use response::{ApiResponse, ErrorData, ErrorResponse};
pub use user::{CreateUserRequest, UpdateUserRequest, UserListResponse, UserResponse};

/// RFC 3339 rendering of a stored timestamp.
pub(crate) fn format_timestamp(timestamp: &jiff_diesel::Timestamp) -> String {
    timestamp.to_jiff().to_string()
}
