//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod admin_repository;
mod category_repository;
mod contact_repository;
pub(crate) mod entities;
mod offer_repository;
mod product_repository;
mod review_repository;

pub use admin_repository::{AdminRepository, AdminStore};
pub use category_repository::{CategoryRepository, CategoryStore};
pub use contact_repository::{ContactRepository, ContactStore};
pub use offer_repository::{OfferRepository, OfferStore};
pub use product_repository::{ProductRepository, ProductStore};
pub use review_repository::{ReviewRepository, ReviewStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use admin_repository::MockAdminRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use category_repository::MockCategoryRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use contact_repository::MockContactRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use offer_repository::MockOfferRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use product_repository::MockProductRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use review_repository::MockReviewRepository;
