//! Offer repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::offer::{self, ActiveModel, Entity as OfferEntity};
use crate::domain::{CreateOffer, Offer, UpdateOffer};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OfferRepository: Send + Sync {
    /// Active offers, newest first
    async fn list_active(&self) -> AppResult<Vec<Offer>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Offer>>;

    async fn create(&self, offer: CreateOffer) -> AppResult<Offer>;

    async fn update(&self, id: Uuid, changes: UpdateOffer) -> AppResult<Offer>;

    async fn delete(&self, id: Uuid) -> AppResult<Offer>;
}

pub struct OfferStore {
    db: DatabaseConnection,
}

impl OfferStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: Uuid) -> AppResult<offer::Model> {
        OfferEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found("Offer")
    }
}

#[async_trait]
impl OfferRepository for OfferStore {
    async fn list_active(&self) -> AppResult<Vec<Offer>> {
        let models = OfferEntity::find()
            .filter(offer::Column::IsActive.eq(true))
            .order_by_desc(offer::Column::CreatedAt)
            .order_by_asc(offer::Column::Id)
            .all(&self.db)
            .await?;

        models.into_iter().map(Offer::try_from).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Offer>> {
        let result = OfferEntity::find_by_id(id).one(&self.db).await?;
        result.map(Offer::try_from).transpose()
    }

    async fn create(&self, offer: CreateOffer) -> AppResult<Offer> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(offer.title),
            description: Set(offer.description),
            discount_type: Set(offer.discount_type.to_string()),
            discount_value: Set(offer.discount_value),
            applicable_products: Set(offer.applicable_products),
            applicable_categories: Set(offer.applicable_categories),
            start_date: Set(offer.start_date),
            end_date: Set(offer.end_date),
            is_active: Set(offer.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Offer::try_from(model)
    }

    async fn update(&self, id: Uuid, changes: UpdateOffer) -> AppResult<Offer> {
        let mut active: ActiveModel = self.find_model(id).await?.into();

        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(discount_type) = changes.discount_type {
            active.discount_type = Set(discount_type.to_string());
        }
        if let Some(discount_value) = changes.discount_value {
            active.discount_value = Set(discount_value);
        }
        if let Some(products) = changes.applicable_products {
            active.applicable_products = Set(products);
        }
        if let Some(categories) = changes.applicable_categories {
            active.applicable_categories = Set(categories);
        }
        if let Some(start_date) = changes.start_date {
            active.start_date = Set(start_date);
        }
        if let Some(end_date) = changes.end_date {
            active.end_date = Set(end_date);
        }
        if let Some(is_active) = changes.is_active {
            active.is_active = Set(is_active);
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Offer::try_from(model)
    }

    async fn delete(&self, id: Uuid) -> AppResult<Offer> {
        let existing = self.find_model(id).await?;
        OfferEntity::delete_by_id(id).exec(&self.db).await?;
        Offer::try_from(existing)
    }
}
