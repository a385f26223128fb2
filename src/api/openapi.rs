//! OpenAPI documentation configuration.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    admin_handler, category_handler, contact_handler, offer_handler, product_handler,
    review_handler,
};
use crate::domain::{
    AdminProfile, AdminSummary, Category, CategoryRef, CategorySummary, ContactMessage,
    CreateCategory, CreateContactMessage, CreateOffer, CreateProduct, CreateReview, DiscountType,
    OfferView, ProductPage, ProductRef, ProductView, Review, ReviewPage, UpdateCategory,
    UpdateOffer, UpdateProduct, UpdateReview,
};
use crate::services::LoginResponse;
use crate::types::PaginationMeta;

/// OpenAPI documentation for the boutique API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Boutique API",
        version = "0.1.0",
        description = "Storefront catalog, offers and reviews with a JWT-protected admin surface",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        admin_handler::login,
        admin_handler::profile,
        product_handler::list_products,
        product_handler::featured_products,
        product_handler::new_arrivals,
        product_handler::get_product,
        product_handler::create_product,
        product_handler::update_product,
        product_handler::delete_product,
        category_handler::list_categories,
        category_handler::get_category,
        category_handler::create_category,
        category_handler::update_category,
        category_handler::delete_category,
        offer_handler::list_offers,
        offer_handler::get_offer,
        offer_handler::create_offer,
        offer_handler::update_offer,
        offer_handler::delete_offer,
        review_handler::list_reviews,
        review_handler::get_review,
        review_handler::create_review,
        review_handler::update_review,
        review_handler::delete_review,
        contact_handler::submit_message,
    ),
    components(
        schemas(
            admin_handler::LoginRequest,
            LoginResponse,
            AdminProfile,
            AdminSummary,
            PaginationMeta,
            ProductView,
            ProductPage,
            CreateProduct,
            UpdateProduct,
            Category,
            CategorySummary,
            CreateCategory,
            UpdateCategory,
            DiscountType,
            OfferView,
            ProductRef,
            CategoryRef,
            CreateOffer,
            UpdateOffer,
            Review,
            ReviewPage,
            CreateReview,
            UpdateReview,
            ContactMessage,
            CreateContactMessage,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Admin", description = "Admin login and profile"),
        (name = "Products", description = "Product catalog"),
        (name = "Categories", description = "Product categories"),
        (name = "Offers", description = "Promotional offers"),
        (name = "Reviews", description = "Customer reviews"),
        (name = "Contact", description = "Storefront contact form")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token obtained from /api/admin/login"))
                        .build(),
                ),
            );
        }
    }
}
