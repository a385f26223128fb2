//! Unit of Work - centralized repository access.
//!
//! Every write in this service is a single-row operation, so the unit of work
//! only hands out repositories sharing one connection pool.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{
    AdminRepository, AdminStore, CategoryRepository, CategoryStore, ContactRepository,
    ContactStore, OfferRepository, OfferStore, ProductRepository, ProductStore, ReviewRepository,
    ReviewStore,
};

/// Unit of Work trait for dependency injection.
///
/// For testing, implement it over the `Mock*Repository` types.
pub trait UnitOfWork: Send + Sync {
    fn admins(&self) -> Arc<dyn AdminRepository>;

    fn categories(&self) -> Arc<dyn CategoryRepository>;

    fn products(&self) -> Arc<dyn ProductRepository>;

    fn offers(&self) -> Arc<dyn OfferRepository>;

    fn reviews(&self) -> Arc<dyn ReviewRepository>;

    fn contacts(&self) -> Arc<dyn ContactRepository>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    admins: Arc<AdminStore>,
    categories: Arc<CategoryStore>,
    products: Arc<ProductStore>,
    offers: Arc<OfferStore>,
    reviews: Arc<ReviewStore>,
    contacts: Arc<ContactStore>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            admins: Arc::new(AdminStore::new(db.clone())),
            categories: Arc::new(CategoryStore::new(db.clone())),
            products: Arc::new(ProductStore::new(db.clone())),
            offers: Arc::new(OfferStore::new(db.clone())),
            reviews: Arc::new(ReviewStore::new(db.clone())),
            contacts: Arc::new(ContactStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn admins(&self) -> Arc<dyn AdminRepository> {
        self.admins.clone()
    }

    fn categories(&self) -> Arc<dyn CategoryRepository> {
        self.categories.clone()
    }

    fn products(&self) -> Arc<dyn ProductRepository> {
        self.products.clone()
    }

    fn offers(&self) -> Arc<dyn OfferRepository> {
        self.offers.clone()
    }

    fn reviews(&self) -> Arc<dyn ReviewRepository> {
        self.reviews.clone()
    }

    fn contacts(&self) -> Arc<dyn ContactRepository> {
        self.contacts.clone()
    }
}
