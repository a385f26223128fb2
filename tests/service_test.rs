//! Service unit tests over mocked repositories.

mod common;

use chrono::{Duration, Utc};
use mockall::predicate::eq;
use uuid::Uuid;

use boutique_api::domain::{
    CreateOffer, CreateProduct, DiscountType, Password, UpdateCategory, UpdateOffer,
    UpdateProduct,
};
use boutique_api::errors::{AppError, FieldError};
use boutique_api::services::{
    AuthService, Authenticator, CategoryManager, CategoryService, OfferManager, OfferService,
    ProductManager, ProductService, ReviewManager, ReviewService,
};
use boutique_api::types::PageRequest;
use common::*;

fn field_of(err: AppError) -> Vec<FieldError> {
    match err {
        AppError::Validation(errors) => errors,
        other => panic!("expected validation error, got {:?}", other),
    }
}

fn create_product(category: Uuid, price: f64, discounted_price: Option<f64>) -> CreateProduct {
    serde_json::from_value(serde_json::json!({
        "name": "Silk Saree",
        "description": "Handwoven silk saree with zari border",
        "price": price,
        "discountedPrice": discounted_price,
        "category": category,
        "images": ["https://cdn.example.com/saree.jpg"]
    }))
    .unwrap()
}

// =============================================================================
// Auth
// =============================================================================

#[tokio::test]
async fn test_ensure_admin_creates_missing_admin() {
    let mut repos = Repos::default();
    repos.admins.expect_find_by_email().returning(|_| Ok(None));
    repos
        .admins
        .expect_create()
        .withf(|email, hash, name| {
            email == ADMIN_EMAIL
                && name == "Admin User"
                && Password::from_hash(hash.clone()).verify(ADMIN_PASSWORD)
        })
        .times(1)
        .returning(|_, _, _| Ok(admin_user(Uuid::new_v4())));

    let auth = Authenticator::new(uow(repos), tokens());
    let admin = auth
        .ensure_admin(" ADMIN@boutique.com", ADMIN_PASSWORD, "Admin User")
        .await
        .unwrap();
    assert_eq!(admin.email, ADMIN_EMAIL);
}

#[tokio::test]
async fn test_ensure_admin_rehashes_existing_admin() {
    let existing = admin_user(Uuid::new_v4());
    let existing_id = existing.id;

    let mut repos = Repos::default();
    repos
        .admins
        .expect_find_by_email()
        .returning(move |_| Ok(Some(existing.clone())));
    repos
        .admins
        .expect_update_credentials()
        .withf(move |id, hash, _| {
            *id == existing_id && Password::from_hash(hash.clone()).verify("NewPassword456")
        })
        .times(1)
        .returning(|id, _, _| Ok(admin_user(id)));

    let auth = Authenticator::new(uow(repos), tokens());
    let admin = auth
        .ensure_admin(ADMIN_EMAIL, "NewPassword456", "Admin User")
        .await
        .unwrap();
    assert_eq!(admin.id, existing_id);
}

#[tokio::test]
async fn test_profile_of_deleted_admin_is_not_found() {
    let mut repos = Repos::default();
    repos.admins.expect_find_by_id().returning(|_| Ok(None));

    let auth = Authenticator::new(uow(repos), tokens());
    let err = auth.profile(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound("Admin")));
}

// =============================================================================
// Categories
// =============================================================================

#[tokio::test]
async fn test_category_lookup_falls_back_to_id() {
    let sarees = category("Sarees", "sarees");
    let id = sarees.id;

    let mut repos = Repos::default();
    repos.categories.expect_find_by_slug().returning(|_| Ok(None));
    repos
        .categories
        .expect_find_by_id()
        .with(eq(id))
        .returning(move |_| Ok(Some(sarees.clone())));

    let service = CategoryManager::new(uow(repos));
    assert_eq!(service.get(&id.to_string()).await.unwrap().slug, "sarees");
    assert!(matches!(
        service.get("kurtas").await,
        Err(AppError::NotFound("Category"))
    ));
}

#[tokio::test]
async fn test_category_rename_rederives_slug() {
    let id = Uuid::new_v4();
    let mut repos = Repos::default();
    repos
        .categories
        .expect_update()
        .withf(move |target, changes| {
            *target == id && changes.slug.as_deref() == Some("festive-wear")
        })
        .returning(|_, changes| {
            let name = changes.name.unwrap_or_default();
            let slug = changes.slug.unwrap_or_default();
            Ok(category(&name, &slug))
        });

    let service = CategoryManager::new(uow(repos));
    let updated = service
        .update(
            id,
            UpdateCategory {
                name: Some("Festive Wear".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.slug, "festive-wear");
}

// =============================================================================
// Products
// =============================================================================

#[tokio::test]
async fn test_create_product_requires_existing_category() {
    let mut repos = Repos::default();
    repos.categories.expect_find_by_id().returning(|_| Ok(None));

    let service = ProductManager::new(uow(repos));
    let err = service
        .create(create_product(Uuid::new_v4(), 4999.0, None))
        .await
        .unwrap_err();
    assert_eq!(field_of(err)[0].field, "category");
}

#[tokio::test]
async fn test_create_product_rejects_discount_above_price() {
    // Rejected before any repository is touched
    let service = ProductManager::new(uow(Repos::default()));
    let err = service
        .create(create_product(Uuid::new_v4(), 1000.0, Some(1200.0)))
        .await
        .unwrap_err();
    assert_eq!(field_of(err)[0].field, "discountedPrice");
}

#[tokio::test]
async fn test_create_product_joins_category() {
    let sarees = category("Sarees", "sarees");
    let category_id = sarees.id;

    let mut repos = Repos::default();
    repos
        .categories
        .expect_find_by_id()
        .returning(move |_| Ok(Some(sarees.clone())));
    repos
        .products
        .expect_create()
        .times(1)
        .returning(move |payload| Ok(product(payload.category, payload.price)));

    let service = ProductManager::new(uow(repos));
    let view = service
        .create(create_product(category_id, 4999.0, Some(3999.0)))
        .await
        .unwrap();
    assert_eq!(view.category.unwrap().slug, "sarees");
}

#[tokio::test]
async fn test_update_product_checks_merged_prices() {
    let category_id = Uuid::new_v4();
    let mut current = product(category_id, 1000.0);
    current.discounted_price = Some(800.0);
    let id = current.id;

    let mut repos = Repos::default();
    repos
        .products
        .expect_find_by_id()
        .with(eq(id))
        .returning(move |_| Ok(Some(current.clone())));

    let service = ProductManager::new(uow(repos));
    let err = service
        .update(
            id,
            UpdateProduct {
                price: Some(700.0),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(field_of(err)[0].field, "discountedPrice");
}

#[tokio::test]
async fn test_update_missing_product_is_not_found() {
    let mut repos = Repos::default();
    repos.products.expect_find_by_id().returning(|_| Ok(None));

    let service = ProductManager::new(uow(repos));
    let err = service
        .update(Uuid::new_v4(), UpdateProduct::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound("Product")));
}

#[tokio::test]
async fn test_deleted_product_keeps_dangling_category_as_null() {
    let orphan = product(Uuid::new_v4(), 500.0);
    let id = orphan.id;

    let mut repos = Repos::default();
    repos
        .products
        .expect_delete()
        .with(eq(id))
        .returning(move |_| Ok(orphan.clone()));
    repos.categories.expect_find_by_id().returning(|_| Ok(None));

    let service = ProductManager::new(uow(repos));
    let view = service.delete(id).await.unwrap();
    assert_eq!(view.id, id);
    assert!(view.category.is_none());
}

// =============================================================================
// Offers
// =============================================================================

#[tokio::test]
async fn test_offer_must_end_after_it_starts() {
    let start = Utc::now();
    let payload = CreateOffer {
        title: "Festive Sale".into(),
        description: "Twenty percent off silk".into(),
        discount_type: DiscountType::Flat,
        discount_value: 500.0,
        applicable_products: vec![],
        applicable_categories: vec![],
        start_date: start,
        end_date: start,
        is_active: true,
    };

    let service = OfferManager::new(uow(Repos::default()));
    let err = service.create(payload).await.unwrap_err();
    assert_eq!(field_of(err)[0].field, "endDate");
}

#[tokio::test]
async fn test_offer_update_checks_merged_schedule() {
    let current = offer(vec![], vec![]);
    let id = current.id;
    let new_start = current.end_date + Duration::days(1);

    let mut repos = Repos::default();
    repos
        .offers
        .expect_find_by_id()
        .returning(move |_| Ok(Some(current.clone())));

    let service = OfferManager::new(uow(repos));
    let err = service
        .update(
            id,
            UpdateOffer {
                start_date: Some(new_start),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(field_of(err)[0].field, "endDate");
}

#[tokio::test]
async fn test_inactive_offer_hidden_from_public() {
    let mut hidden = offer(vec![], vec![]);
    hidden.is_active = false;
    let id = hidden.id;

    let mut repos = Repos::default();
    repos
        .offers
        .expect_find_by_id()
        .returning(move |_| Ok(Some(hidden.clone())));
    repos.products.expect_refs().returning(|_| Ok(vec![]));
    repos.categories.expect_refs().returning(|_| Ok(vec![]));

    let service = OfferManager::new(uow(repos));
    assert!(matches!(
        service.get(id, false).await,
        Err(AppError::NotFound("Offer"))
    ));
    assert_eq!(service.get(id, true).await.unwrap().id, id);
}

// =============================================================================
// Reviews
// =============================================================================

#[tokio::test]
async fn test_review_page_metadata() {
    let mut repos = Repos::default();
    repos
        .reviews
        .expect_list_active()
        .with(eq(PageRequest::new(2, 10)))
        .returning(|_| Ok((vec![review(5, true), review(4, true)], 12)));

    let service = ReviewManager::new(uow(repos));
    let page = service.list(PageRequest::new(2, 10)).await.unwrap();
    assert_eq!(page.reviews.len(), 2);
    assert_eq!(page.pagination.total, 12);
    assert_eq!(page.pagination.pages, 2);
}
