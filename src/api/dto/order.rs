//! Order and order item DTOs.
//!
//! Orders are identified by `order_id` and items by `item_id` on the wire.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::format_timestamp;
use crate::models::{NewOrder, NewOrderItem, Order, OrderChanges, OrderItem, OrderItemChanges};

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateOrderRequest {
    pub user_id: Uuid,
}

impl CreateOrderRequest {
    pub fn into_new_order(self) -> NewOrder {
        NewOrder {
            user_id: self.user_id,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateOrderRequest {
    pub order_id: Uuid,
    pub user_id: Option<Uuid>,
}

impl UpdateOrderRequest {
    pub fn into_changes(self) -> (Uuid, OrderChanges) {
        (
            self.order_id,
            OrderChanges {
                user_id: self.user_id,
            },
        )
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub order_id: Uuid,
    pub user_id: Uuid,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            order_id: order.id,
            user_id: order.user_id,
            created_at: format_timestamp(&order.created_at),
            updated_at: format_timestamp(&order.updated_at),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderListResponse {
    pub count: i64,
    pub orders: Vec<OrderResponse>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateOrderItemRequest {
    pub order_id: Uuid,
    pub book_id: Uuid,
}

impl CreateOrderItemRequest {
    pub fn into_new_item(self) -> NewOrderItem {
        NewOrderItem {
            order_id: self.order_id,
            book_id: self.book_id,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateOrderItemRequest {
    pub item_id: Uuid,
    pub order_id: Option<Uuid>,
    pub book_id: Option<Uuid>,
}

impl UpdateOrderItemRequest {
    pub fn into_changes(self) -> (Uuid, OrderItemChanges) {
        (
            self.item_id,
            OrderItemChanges {
                order_id: self.order_id,
                book_id: self.book_id,
            },
        )
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemResponse {
    pub item_id: Uuid,
    pub order_id: Uuid,
    pub book_id: Uuid,
    pub created_at: String,
    pub updated_at: String,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            item_id: item.id,
            order_id: item.order_id,
            book_id: item.book_id,
            created_at: format_timestamp(&item.created_at),
            updated_at: format_timestamp(&item.updated_at),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemListResponse {
    pub count: i64,
    pub order_items: Vec<OrderItemResponse>,
}
