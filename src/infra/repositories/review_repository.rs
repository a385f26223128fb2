//! Review repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::entities::review::{self, ActiveModel, Entity as ReviewEntity};
use crate::domain::{CreateReview, Review, UpdateReview};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::types::PageRequest;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// One page of active reviews, newest first, plus the active total
    async fn list_active(&self, page: PageRequest) -> AppResult<(Vec<Review>, u64)>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Review>>;

    async fn create(&self, review: CreateReview) -> AppResult<Review>;

    async fn update(&self, id: Uuid, changes: UpdateReview) -> AppResult<Review>;

    async fn delete(&self, id: Uuid) -> AppResult<Review>;
}

pub struct ReviewStore {
    db: DatabaseConnection,
}

impl ReviewStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: Uuid) -> AppResult<review::Model> {
        ReviewEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found("Review")
    }
}

#[async_trait]
impl ReviewRepository for ReviewStore {
    async fn list_active(&self, page: PageRequest) -> AppResult<(Vec<Review>, u64)> {
        let count = ReviewEntity::find()
            .filter(review::Column::IsActive.eq(true))
            .count(&self.db);
        let rows = ReviewEntity::find()
            .filter(review::Column::IsActive.eq(true))
            .order_by_desc(review::Column::CreatedAt)
            .order_by_asc(review::Column::Id)
            .offset(page.offset())
            .limit(page.limit)
            .all(&self.db);

        let (total, rows) = tokio::try_join!(count, rows)?;
        Ok((rows.into_iter().map(Review::from).collect(), total))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Review>> {
        let result = ReviewEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Review::from))
    }

    async fn create(&self, review: CreateReview) -> AppResult<Review> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            customer_name: Set(review.customer_name),
            rating: Set(review.rating),
            review_text: Set(review.review_text),
            is_active: Set(review.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Review::from(model))
    }

    async fn update(&self, id: Uuid, changes: UpdateReview) -> AppResult<Review> {
        let mut active: ActiveModel = self.find_model(id).await?.into();

        if let Some(customer_name) = changes.customer_name {
            active.customer_name = Set(customer_name);
        }
        if let Some(rating) = changes.rating {
            active.rating = Set(rating);
        }
        if let Some(review_text) = changes.review_text {
            active.review_text = Set(review_text);
        }
        if let Some(is_active) = changes.is_active {
            active.is_active = Set(is_active);
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Review::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<Review> {
        let existing = self.find_model(id).await?;
        ReviewEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(Review::from(existing))
    }
}
