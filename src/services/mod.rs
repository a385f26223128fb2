//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain rules and repositories. Each one is a trait
//! plus a manager generic over the unit of work, so tests can swap the
//! storage for mocks.

mod auth_service;
mod category_service;
mod contact_service;
pub mod container;
mod offer_service;
mod product_service;
mod review_service;
mod token_service;

pub use container::{ServiceContainer, Services};

pub use auth_service::{AuthService, Authenticator, LoginResponse};
pub use category_service::{CategoryManager, CategoryService};
pub use contact_service::{ContactInbox, ContactService};
pub use offer_service::{OfferManager, OfferService};
pub use product_service::{ProductManager, ProductService};
pub use review_service::{ReviewManager, ReviewService};
pub use token_service::{Claims, IssuedToken, TokenService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
