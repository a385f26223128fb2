//! Review service.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{CreateReview, Review, ReviewPage, UpdateReview};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::types::{PageRequest, PaginationMeta};

#[async_trait]
pub trait ReviewService: Send + Sync {
    /// Active reviews, newest first
    async fn list(&self, page: PageRequest) -> AppResult<ReviewPage>;

    async fn get(&self, id: Uuid, include_inactive: bool) -> AppResult<Review>;

    async fn create(&self, payload: CreateReview) -> AppResult<Review>;

    async fn update(&self, id: Uuid, payload: UpdateReview) -> AppResult<Review>;

    async fn delete(&self, id: Uuid) -> AppResult<Review>;
}

pub struct ReviewManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ReviewManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ReviewService for ReviewManager<U> {
    async fn list(&self, page: PageRequest) -> AppResult<ReviewPage> {
        let (reviews, total) = self.uow.reviews().list_active(page).await?;
        Ok(ReviewPage {
            reviews,
            pagination: PaginationMeta::new(total, page.page, page.limit),
        })
    }

    async fn get(&self, id: Uuid, include_inactive: bool) -> AppResult<Review> {
        self.uow
            .reviews()
            .find_by_id(id)
            .await?
            .filter(|review| review.is_active || include_inactive)
            .ok_or_not_found("Review")
    }

    async fn create(&self, payload: CreateReview) -> AppResult<Review> {
        let review = self.uow.reviews().create(payload).await?;
        tracing::info!(review_id = %review.id, rating = review.rating, "Review created");
        Ok(review)
    }

    async fn update(&self, id: Uuid, payload: UpdateReview) -> AppResult<Review> {
        let review = self.uow.reviews().update(id, payload).await?;
        tracing::info!(review_id = %review.id, "Review updated");
        Ok(review)
    }

    async fn delete(&self, id: Uuid) -> AppResult<Review> {
        let review = self.uow.reviews().delete(id).await?;
        tracing::info!(review_id = %review.id, "Review deleted");
        Ok(review)
    }
}
