//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    AuthService, CategoryService, ContactService, OfferService, ProductService, ReviewService,
    ServiceContainer, Services,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub category_service: Arc<dyn CategoryService>,
    pub product_service: Arc<dyn ProductService>,
    pub offer_service: Arc<dyn OfferService>,
    pub review_service: Arc<dyn ReviewService>,
    pub contact_service: Arc<dyn ContactService>,
    /// Database connection, used by the health probe
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from any service container.
    pub fn new(services: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            auth_service: services.auth(),
            category_service: services.categories(),
            product_service: services.products(),
            offer_service: services.offers(),
            review_service: services.reviews(),
            contact_service: services.contacts(),
            database,
        }
    }

    /// Create application state backed by the database.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let services = Services::from_connection(database.get_connection(), config);
        Self::new(&services, database)
    }
}
