//! Offer service - offers are always returned with their references populated.

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{CreateOffer, Offer, OfferView, UpdateOffer};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait OfferService: Send + Sync {
    /// Active offers, newest first
    async fn list(&self) -> AppResult<Vec<OfferView>>;

    async fn get(&self, id: Uuid, include_inactive: bool) -> AppResult<OfferView>;

    async fn create(&self, payload: CreateOffer) -> AppResult<OfferView>;

    async fn update(&self, id: Uuid, payload: UpdateOffer) -> AppResult<OfferView>;

    async fn delete(&self, id: Uuid) -> AppResult<OfferView>;
}

pub struct OfferManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> OfferManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Resolve product and category references for a batch of offers with
    /// one query each.
    async fn populate(&self, offers: Vec<Offer>) -> AppResult<Vec<OfferView>> {
        let product_ids: BTreeSet<Uuid> = offers
            .iter()
            .flat_map(|o| o.applicable_products.iter().copied())
            .collect();
        let category_ids: BTreeSet<Uuid> = offers
            .iter()
            .flat_map(|o| o.applicable_categories.iter().copied())
            .collect();

        let products = self.uow.products();
        let categories = self.uow.categories();
        let (products, categories) = tokio::try_join!(
            products.refs(product_ids.into_iter().collect()),
            categories.refs(category_ids.into_iter().collect()),
        )?;

        Ok(offers
            .into_iter()
            .map(|offer| OfferView::new(offer, &products, &categories))
            .collect())
    }

    async fn populate_one(&self, offer: Offer) -> AppResult<OfferView> {
        let mut views = self.populate(vec![offer]).await?;
        views.pop().ok_or_not_found("Offer")
    }
}

#[async_trait]
impl<U: UnitOfWork> OfferService for OfferManager<U> {
    async fn list(&self) -> AppResult<Vec<OfferView>> {
        let offers = self.uow.offers().list_active().await?;
        self.populate(offers).await
    }

    async fn get(&self, id: Uuid, include_inactive: bool) -> AppResult<OfferView> {
        let offer = self
            .uow
            .offers()
            .find_by_id(id)
            .await?
            .filter(|offer| offer.is_active || include_inactive)
            .ok_or_not_found("Offer")?;
        self.populate_one(offer).await
    }

    async fn create(&self, payload: CreateOffer) -> AppResult<OfferView> {
        payload.check_invariants()?;
        let offer = self.uow.offers().create(payload).await?;
        tracing::info!(offer_id = %offer.id, "Offer created");
        self.populate_one(offer).await
    }

    async fn update(&self, id: Uuid, payload: UpdateOffer) -> AppResult<OfferView> {
        let offers = self.uow.offers();
        let current = offers.find_by_id(id).await?.ok_or_not_found("Offer")?;
        payload.check_invariants(&current)?;

        let offer = offers.update(id, payload).await?;
        tracing::info!(offer_id = %offer.id, "Offer updated");
        self.populate_one(offer).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<OfferView> {
        let offer = self.uow.offers().delete(id).await?;
        tracing::info!(offer_id = %offer.id, "Offer deleted");
        self.populate_one(offer).await
    }
}
