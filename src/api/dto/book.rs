use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::format_timestamp;
use crate::models::{Book, BookChanges, NewBook};

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateBookRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    #[schema(example = "Dune")]
    pub title: String,
    #[validate(length(min = 1, max = 255, message = "Author must be between 1 and 255 characters"))]
    #[schema(example = "Frank Herbert")]
    pub author: String,
    pub publisher: Option<String>,
    pub category: Option<String>,
    #[validate(range(min = 1, message = "Page count must be positive"))]
    #[schema(example = 412)]
    pub num_pages: i32,
    #[validate(length(max = 16))]
    #[schema(example = "en")]
    pub lang: Option<String>,
}

impl CreateBookRequest {
    pub fn into_new_book(self) -> NewBook {
        NewBook {
            title: self.title,
            author: self.author,
            publisher: self.publisher,
            category: self.category,
            num_pages: self.num_pages,
            lang: self.lang,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateBookRequest {
    pub id: Uuid,
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 255, message = "Author must be between 1 and 255 characters"))]
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub category: Option<String>,
    #[validate(range(min = 1, message = "Page count must be positive"))]
    pub num_pages: Option<i32>,
    #[validate(length(max = 16))]
    pub lang: Option<String>,
}

impl UpdateBookRequest {
    pub fn into_changes(self) -> (Uuid, BookChanges) {
        (
            self.id,
            BookChanges {
                title: self.title,
                author: self.author,
                publisher: self.publisher,
                category: self.category,
                num_pages: self.num_pages,
                lang: self.lang,
            },
        )
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookResponse {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub publisher: Option<String>,
    pub category: Option<String>,
    pub num_pages: i32,
    pub lang: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            created_at: format_timestamp(&book.created_at),
            updated_at: format_timestamp(&book.updated_at),
            title: book.title,
            author: book.author,
            publisher: book.publisher,
            category: book.category,
            num_pages: book.num_pages,
            lang: book.lang,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookListResponse {
    pub count: i64,
    pub books: Vec<BookResponse>,
}
