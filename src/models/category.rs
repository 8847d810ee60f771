use super::Resource;
use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    /// Stored in the `type` column
    #[diesel(column_name = type_)]
    pub kind: Option<String>,
    pub picture: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory {
    pub name: String,
    #[diesel(column_name = type_)]
    pub kind: Option<String>,
    pub picture: Option<String>,
}

#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::categories)]
pub struct CategoryChanges {
    pub name: Option<String>,
    #[diesel(column_name = type_)]
    pub kind: Option<String>,
    pub picture: Option<String>,
}

impl Resource for Category {
    const NAME: &'static str = "category";
    type New = NewCategory;
    type Changes = CategoryChanges;

    fn id(&self) -> Uuid {
        self.id
    }
}
