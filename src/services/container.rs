//! Service Container - Centralized service access.
//!
//! Handlers depend on the service traits only; `Services` wires the concrete
//! managers over one shared unit of work.

use std::sync::Arc;

use super::{
    AuthService, Authenticator, CategoryManager, CategoryService, ContactInbox, ContactService,
    OfferManager, OfferService, ProductManager, ProductService, ReviewManager, ReviewService,
    TokenService,
};
use crate::config::Config;
use crate::infra::{Persistence, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;

    fn categories(&self) -> Arc<dyn CategoryService>;

    fn products(&self) -> Arc<dyn ProductService>;

    fn offers(&self) -> Arc<dyn OfferService>;

    fn reviews(&self) -> Arc<dyn ReviewService>;

    fn contacts(&self) -> Arc<dyn ContactService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    auth: Arc<dyn AuthService>,
    categories: Arc<dyn CategoryService>,
    products: Arc<dyn ProductService>,
    offers: Arc<dyn OfferService>,
    reviews: Arc<dyn ReviewService>,
    contacts: Arc<dyn ContactService>,
}

impl Services {
    /// Build every service over the given unit of work
    pub fn new<U: UnitOfWork + 'static>(uow: Arc<U>, tokens: Arc<TokenService>) -> Self {
        Self {
            auth: Arc::new(Authenticator::new(uow.clone(), tokens)),
            categories: Arc::new(CategoryManager::new(uow.clone())),
            products: Arc::new(ProductManager::new(uow.clone())),
            offers: Arc::new(OfferManager::new(uow.clone())),
            reviews: Arc::new(ReviewManager::new(uow.clone())),
            contacts: Arc::new(ContactInbox::new(uow)),
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> Self {
        let uow = Arc::new(Persistence::new(db));
        Self::new(uow, Arc::new(TokenService::new(config)))
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth.clone()
    }

    fn categories(&self) -> Arc<dyn CategoryService> {
        self.categories.clone()
    }

    fn products(&self) -> Arc<dyn ProductService> {
        self.products.clone()
    }

    fn offers(&self) -> Arc<dyn OfferService> {
        self.offers.clone()
    }

    fn reviews(&self) -> Arc<dyn ReviewService> {
        self.reviews.clone()
    }

    fn contacts(&self) -> Arc<dyn ContactService> {
        self.contacts.clone()
    }
}
