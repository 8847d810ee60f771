use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::format_timestamp;
use crate::models::{Category, CategoryChanges, NewCategory};

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    #[schema(example = "Science Fiction")]
    pub name: String,
    /// Free-form category type
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub picture: Option<String>,
}

impl CreateCategoryRequest {
    pub fn into_new_category(self) -> NewCategory {
        NewCategory {
            name: self.name,
            kind: self.kind,
            picture: self.picture,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateCategoryRequest {
    pub id: Uuid,
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub picture: Option<String>,
}

impl UpdateCategoryRequest {
    pub fn into_changes(self) -> (Uuid, CategoryChanges) {
        (
            self.id,
            CategoryChanges {
                name: self.name,
                kind: self.kind,
                picture: self.picture,
            },
        )
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub picture: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            created_at: format_timestamp(&category.created_at),
            updated_at: format_timestamp(&category.updated_at),
            name: category.name,
            kind: category.kind,
            picture: category.picture,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryListResponse {
    pub count: i64,
    pub categories: Vec<CategoryResponse>,
}
