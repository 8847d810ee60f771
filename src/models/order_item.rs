use super::Resource;
use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::order_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub book_id: Uuid,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::order_items)]
pub struct NewOrderItem {
    pub order_id: Uuid,
    pub book_id: Uuid,
}

#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::order_items)]
pub struct OrderItemChanges {
    pub order_id: Option<Uuid>,
    pub book_id: Option<Uuid>,
}

impl Resource for OrderItem {
    const NAME: &'static str = "order_item";
    const ID_FIELD: &'static str = "item_id";
    type New = NewOrderItem;
    type Changes = OrderItemChanges;

    fn id(&self) -> Uuid {
        self.id
    }
}
