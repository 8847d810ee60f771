use super::Resource;
use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

/// Credential record plus profile fields.
///
/// `password` always holds an Argon2 PHC string, never plaintext.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub phone: Option<String>,
    pub picture: Option<String>,
    pub username: String,
    pub password: String,
    pub card_no: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub phone: Option<String>,
    pub picture: Option<String>,
    pub username: String,
    pub password: String,
    pub card_no: Option<String>,
}

/// Partial update; `None` leaves the column untouched
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::users)]
pub struct UserChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub phone: Option<String>,
    pub picture: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub card_no: Option<String>,
}

impl Resource for User {
    const NAME: &'static str = "user";
    type New = NewUser;
    type Changes = UserChanges;

    fn id(&self) -> Uuid {
        self.id
    }
}
