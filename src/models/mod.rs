mod book;
mod category;
mod order;
mod order_item;
mod pagination;
mod user;

pub use book::{Book, BookChanges, NewBook};
pub use category::{Category, CategoryChanges, NewCategory};
pub use order::{NewOrder, Order, OrderChanges};
pub use order_item::{NewOrderItem, OrderItem, OrderItemChanges};
pub use pagination::{Page, PageRequest};
pub use user::{NewUser, User, UserChanges};

use uuid::Uuid;

/// A soft-deletable table exposed through the generic CRUD surface.
///
/// `New` is the insert payload and `Changes` the partial update payload;
/// both are produced by the service layer after validation.
pub trait Resource: Clone + Send + Sync + 'static {
    /// Entity name used in logs and `NotFound` errors
    const NAME: &'static str;
    /// Name of the identifier field as exposed to clients
    const ID_FIELD: &'static str = "id";

    type New: Send + Sync + 'static;
    type Changes: Send + Sync + 'static;

    fn id(&self) -> Uuid;
}
