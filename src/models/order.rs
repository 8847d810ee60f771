use super::Resource;
use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder {
    pub user_id: Uuid,
}

#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::orders)]
pub struct OrderChanges {
    pub user_id: Option<Uuid>,
}

impl Resource for Order {
    const NAME: &'static str = "order";
    const ID_FIELD: &'static str = "order_id";
    type New = NewOrder;
    type Changes = OrderChanges;

    fn id(&self) -> Uuid {
        self.id
    }
}
