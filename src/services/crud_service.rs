//! Generic CRUD service shared by resources without extra business rules.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Page, PageRequest, Resource};
use crate::repositories::ResourceRepository;

/// Maps repository `Option`/`bool` results onto `NotFound` errors that name
/// the resource and its client-facing id field.
pub struct CrudService<E: Resource> {
    repo: Arc<dyn ResourceRepository<E>>,
}

impl<E: Resource> Clone for CrudService<E> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

impl<E: Resource> CrudService<E> {
    pub fn new(repo: Arc<dyn ResourceRepository<E>>) -> Self {
        Self { repo }
    }

    pub(crate) fn not_found(id: Uuid) -> AppError {
        AppError::not_found(E::NAME, E::ID_FIELD, id)
    }

    pub async fn create(&self, new: E::New) -> AppResult<E> {
        let created = self.repo.create(&new).await?;
        tracing::info!(entity = E::NAME, id = %created.id(), "Created");
        Ok(created)
    }

    pub async fn get(&self, id: Uuid) -> AppResult<E> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    /// Returns `true` when a live row with this id exists.
    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.repo.find_by_id(id).await?.is_some())
    }

    pub async fn list(&self, page: PageRequest) -> AppResult<Page<E>> {
        self.repo.list(page).await
    }

    pub async fn update(&self, id: Uuid, changes: E::Changes) -> AppResult<E> {
        self.repo
            .update(id, &changes)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.repo.soft_delete(id).await? {
            return Err(Self::not_found(id));
        }
        tracing::info!(entity = E::NAME, %id, "Soft-deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryChanges, NewCategory, Order};
    use crate::repositories::memory::MemoryRepository;

    fn service() -> CrudService<Category> {
        CrudService::new(Arc::new(MemoryRepository::<Category>::default()))
    }

    fn new_category(name: &str) -> NewCategory {
        NewCategory {
            name: name.to_string(),
            kind: Some("genre".to_string()),
            picture: None,
        }
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let id = Uuid::new_v4();
        match service().get(id).await {
            Err(AppError::NotFound {
                entity,
                field,
                value,
            }) => {
                assert_eq!(entity, "category");
                assert_eq!(field, "id");
                assert_eq!(value, id.to_string());
            }
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_applies_partial_changes() {
        let service = service();
        let created = service.create(new_category("Fiction")).await.unwrap();

        let updated = service
            .update(
                created.id,
                CategoryChanges {
                    picture: Some("uploads/fiction.png".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Fiction");
        assert_eq!(updated.kind.as_deref(), Some("genre"));
        assert_eq!(updated.picture.as_deref(), Some("uploads/fiction.png"));
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let service = service();
        let created = service.create(new_category("Poetry")).await.unwrap();

        service.delete(created.id).await.unwrap();
        assert!(matches!(
            service.delete(created.id).await,
            Err(AppError::NotFound { .. })
        ));
        assert!(!service.exists(created.id).await.unwrap());
    }

    #[test]
    fn test_not_found_uses_resource_id_field() {
        match CrudService::<Order>::not_found(Uuid::nil()) {
            AppError::NotFound { entity, field, .. } => {
                assert_eq!(entity, "order");
                assert_eq!(field, "order_id");
            }
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }
}
