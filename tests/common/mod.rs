//! Shared fixtures for integration tests.
//!
//! `Repos` holds one mock per repository; a mock without expectations panics
//! when called, so leaving one untouched asserts it is never reached.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use boutique_api::api::{create_router, AppState};
use boutique_api::config::Config;
use boutique_api::domain::{
    AdminUser, Category, CategorySummary, Offer, Password, Product, ProductView, Review,
};
use boutique_api::domain::DiscountType;
use boutique_api::infra::repositories::{
    MockAdminRepository, MockCategoryRepository, MockContactRepository, MockOfferRepository,
    MockProductRepository, MockReviewRepository,
};
use boutique_api::infra::{
    AdminRepository, CategoryRepository, ContactRepository, Database, OfferRepository,
    ProductRepository, ReviewRepository, UnitOfWork,
};
use boutique_api::services::{Services, TokenService};

pub const ADMIN_EMAIL: &str = "admin@boutique.com";
pub const ADMIN_PASSWORD: &str = "AdminPassword123";

#[derive(Default)]
pub struct Repos {
    pub admins: MockAdminRepository,
    pub categories: MockCategoryRepository,
    pub products: MockProductRepository,
    pub offers: MockOfferRepository,
    pub reviews: MockReviewRepository,
    pub contacts: MockContactRepository,
}

/// Unit of work over mock repositories
pub struct TestUnitOfWork {
    admins: Arc<MockAdminRepository>,
    categories: Arc<MockCategoryRepository>,
    products: Arc<MockProductRepository>,
    offers: Arc<MockOfferRepository>,
    reviews: Arc<MockReviewRepository>,
    contacts: Arc<MockContactRepository>,
}

impl From<Repos> for TestUnitOfWork {
    fn from(repos: Repos) -> Self {
        Self {
            admins: Arc::new(repos.admins),
            categories: Arc::new(repos.categories),
            products: Arc::new(repos.products),
            offers: Arc::new(repos.offers),
            reviews: Arc::new(repos.reviews),
            contacts: Arc::new(repos.contacts),
        }
    }
}

impl UnitOfWork for TestUnitOfWork {
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

pub fn uow(repos: Repos) -> Arc<TestUnitOfWork> {
    Arc::new(TestUnitOfWork::from(repos))
}

pub fn test_config() -> Config {
    let vars = HashMap::from([
        (
            "JWT_SECRET".to_string(),
            "integration-test-secret-of-at-least-32-bytes".to_string(),
        ),
        ("JWT_EXPIRE".to_string(), "7d".to_string()),
    ]);
    Config::from_map(&vars).expect("test config")
}

pub fn tokens() -> Arc<TokenService> {
    Arc::new(TokenService::new(&test_config()))
}

pub fn admin_token(admin_id: Uuid) -> String {
    tokens().issue(admin_id, ADMIN_EMAIL).expect("token").token
}

/// Router over mock repositories and a mock database connection
pub fn app_with_db(repos: Repos, connection: DatabaseConnection) -> Router {
    let services = Services::new(uow(repos), tokens());
    let state = AppState::new(&services, Arc::new(Database::from_connection(connection)));
    create_router(state)
}

pub fn app(repos: Repos) -> Router {
    app_with_db(
        repos,
        MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
    )
}

/// Send a request and decode the JSON envelope
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub fn admin_user(id: Uuid) -> AdminUser {
    AdminUser {
        id,
        email: ADMIN_EMAIL.to_string(),
        password_hash: Password::new(ADMIN_PASSWORD)
            .expect("hash")
            .into_string(),
        name: "Admin User".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn category(name: &str, slug: &str) -> Category {
    Category {
        id: Uuid::new_v4(),
        name: name.to_string(),
        slug: slug.to_string(),
        description: "Curated boutique collection".to_string(),
        image: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn product(category_id: Uuid, price: f64) -> Product {
    Product {
        id: Uuid::new_v4(),
        name: "Silk Saree".to_string(),
        description: "Handwoven silk saree with zari border".to_string(),
        price,
        discounted_price: None,
        category_id,
        images: vec!["https://cdn.example.com/saree.jpg".to_string()],
        sizes: vec![],
        colors: vec!["red".to_string()],
        tags: vec!["silk".to_string()],
        is_featured: false,
        is_new_arrival: false,
        is_active: true,
        stock: 4,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn product_view(price: f64, category: &Category) -> ProductView {
    ProductView::new(
        product(category.id, price),
        Some(CategorySummary::from(category)),
    )
}

pub fn review(rating: i32, is_active: bool) -> Review {
    Review {
        id: Uuid::new_v4(),
        customer_name: "Priya S.".to_string(),
        rating,
        review_text: "Beautiful fabric and quick delivery".to_string(),
        is_active,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn offer(products: Vec<Uuid>, categories: Vec<Uuid>) -> Offer {
    Offer {
        id: Uuid::new_v4(),
        title: "Festive Sale".to_string(),
        description: "Twenty percent off silk".to_string(),
        discount_type: DiscountType::Percentage,
        discount_value: 20.0,
        applicable_products: products,
        applicable_categories: categories,
        start_date: Utc::now(),
        end_date: Utc::now() + chrono::Duration::days(7),
        is_active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
