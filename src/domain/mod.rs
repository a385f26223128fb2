//! Domain layer - Catalog entities, request payloads and their invariants.
//!
//! Nothing in here touches the database or HTTP; payload validation and
//! derived fields (slugs, query plans) live next to the types they guard.

pub mod admin;
pub mod category;
pub mod contact;
pub mod offer;
pub mod password;
pub mod product;
pub mod product_query;
pub mod review;
pub mod slug;

pub use admin::{normalize_email, AdminProfile, AdminSummary, AdminUser};
pub use category::{
    Category, CategoryChanges, CategorySummary, CreateCategory, NewCategory, UpdateCategory,
};
pub use contact::{ContactMessage, CreateContactMessage};
pub use offer::{CategoryRef, CreateOffer, DiscountType, Offer, OfferView, ProductRef, UpdateOffer};
pub use password::Password;
pub use product::{CreateProduct, Product, ProductPage, ProductView, UpdateProduct};
pub use product_query::{
    ProductFilter, ProductListParams, ProductQuery, ProductSort, ShowcaseParams, SortDirection,
    SortField,
};
pub use review::{CreateReview, Review, ReviewPage, UpdateReview};
pub use slug::slugify;
