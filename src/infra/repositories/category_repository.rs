//! Category repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::category::{self, ActiveModel, Entity as CategoryEntity};
use crate::domain::{Category, CategoryChanges, CategoryRef, NewCategory};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories, alphabetically
    async fn list(&self) -> AppResult<Vec<Category>>;

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Category>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>>;

    /// `{id, name}` of every category in `ids` that still exists
    async fn refs(&self, ids: Vec<Uuid>) -> AppResult<Vec<CategoryRef>>;

    /// Fails with `Conflict` when the name or slug is taken
    async fn create(&self, category: NewCategory) -> AppResult<Category>;

    async fn update(&self, id: Uuid, changes: CategoryChanges) -> AppResult<Category>;

    /// Hard delete, returning the removed record
    async fn delete(&self, id: Uuid) -> AppResult<Category>;
}

pub struct CategoryStore {
    db: DatabaseConnection,
}

impl CategoryStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for CategoryStore {
    async fn list(&self) -> AppResult<Vec<Category>> {
        let models = CategoryEntity::find()
            .order_by_asc(category::Column::Name)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Category::from).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Category>> {
        let result = CategoryEntity::find()
            .filter(category::Column::Slug.eq(slug))
            .one(&self.db)
            .await?;

        Ok(result.map(Category::from))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>> {
        let result = CategoryEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Category::from))
    }

    async fn refs(&self, ids: Vec<Uuid>) -> AppResult<Vec<CategoryRef>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = CategoryEntity::find()
            .filter(category::Column::Id.is_in(ids))
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(CategoryRef::from).collect())
    }

    async fn create(&self, category: NewCategory) -> AppResult<Category> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(category.name),
            slug: Set(category.slug),
            description: Set(category.description),
            image: Set(category.image),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, "Category"))?;
        Ok(Category::from(model))
    }

    async fn update(&self, id: Uuid, changes: CategoryChanges) -> AppResult<Category> {
        let existing = CategoryEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found("Category")?;

        let mut active: ActiveModel = existing.into();
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(slug) = changes.slug {
            active.slug = Set(slug);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(image) = changes.image {
            active.image = Set(Some(image));
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, "Category"))?;
        Ok(Category::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<Category> {
        let existing = CategoryEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found("Category")?;

        CategoryEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(Category::from(existing))
    }
}
