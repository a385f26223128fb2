//! Category service.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Category, CreateCategory, UpdateCategory};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait CategoryService: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Category>>;

    /// Look up by slug, falling back to id
    async fn get(&self, slug_or_id: &str) -> AppResult<Category>;

    async fn create(&self, payload: CreateCategory) -> AppResult<Category>;

    async fn update(&self, id: Uuid, payload: UpdateCategory) -> AppResult<Category>;

    async fn delete(&self, id: Uuid) -> AppResult<Category>;
}

pub struct CategoryManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CategoryManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CategoryService for CategoryManager<U> {
    async fn list(&self) -> AppResult<Vec<Category>> {
        self.uow.categories().list().await
    }

    async fn get(&self, slug_or_id: &str) -> AppResult<Category> {
        let categories = self.uow.categories();
        if let Some(category) = categories.find_by_slug(slug_or_id).await? {
            return Ok(category);
        }

        match Uuid::parse_str(slug_or_id) {
            Ok(id) => categories.find_by_id(id).await?.ok_or_not_found("Category"),
            Err(_) => None.ok_or_not_found("Category"),
        }
    }

    async fn create(&self, payload: CreateCategory) -> AppResult<Category> {
        let category = self.uow.categories().create(payload.into_new()?).await?;
        tracing::info!(category_id = %category.id, slug = %category.slug, "Category created");
        Ok(category)
    }

    async fn update(&self, id: Uuid, payload: UpdateCategory) -> AppResult<Category> {
        let category = self
            .uow
            .categories()
            .update(id, payload.into_changes()?)
            .await?;
        tracing::info!(category_id = %category.id, "Category updated");
        Ok(category)
    }

    async fn delete(&self, id: Uuid) -> AppResult<Category> {
        let category = self.uow.categories().delete(id).await?;
        tracing::info!(category_id = %category.id, "Category deleted");
        Ok(category)
    }
}
