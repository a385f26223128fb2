//! Product domain entity and request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::category::CategorySummary;
use crate::errors::{AppError, AppResult};
use crate::types::PaginationMeta;

/// Product domain entity
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub discounted_price: Option<f64>,
    pub category_id: Uuid,
    pub images: Vec<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub tags: Vec<String>,
    pub is_featured: bool,
    pub is_new_arrival: bool,
    pub is_active: bool,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product as returned to clients, with its category joined in.
///
/// `category` is `null` when the referenced category no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: Uuid,
    #[schema(example = "Silk Saree")]
    pub name: String,
    pub description: String,
    #[schema(example = 4999.0)]
    pub price: f64,
    pub discounted_price: Option<f64>,
    pub category: Option<CategorySummary>,
    pub images: Vec<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub tags: Vec<String>,
    pub is_featured: bool,
    pub is_new_arrival: bool,
    pub is_active: bool,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductView {
    pub fn new(product: Product, category: Option<CategorySummary>) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            discounted_price: product.discounted_price,
            category,
            images: product.images,
            sizes: product.sizes,
            colors: product.colors,
            tags: product.tags,
            is_featured: product.is_featured,
            is_new_arrival: product.is_new_arrival,
            is_active: product.is_active,
            stock: product.stock,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// One page of the product listing
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductPage {
    pub products: Vec<ProductView>,
    pub pagination: PaginationMeta,
}

fn default_true() -> bool {
    true
}

fn validate_images(images: &Vec<String>) -> Result<(), ValidationError> {
    if images.iter().any(|url| url.trim().is_empty()) {
        let mut err = ValidationError::new("images");
        err.message = Some("Image URLs must not be empty".into());
        return Err(err);
    }
    Ok(())
}

/// Product creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(length(min = 3, message = "Product name must be at least 3 characters"))]
    #[schema(example = "Silk Saree")]
    pub name: String,
    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: String,
    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than 0"))]
    pub price: f64,
    #[validate(range(exclusive_min = 0.0, message = "Discounted price must be greater than 0"))]
    pub discounted_price: Option<f64>,
    /// Category id
    pub category: Uuid,
    #[validate(
        length(min = 1, message = "At least one image is required"),
        custom(function = "validate_images")
    )]
    pub images: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_new_arrival: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    #[serde(default)]
    pub stock: i32,
}

/// Product partial update payload
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    #[validate(length(min = 3, message = "Product name must be at least 3 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than 0"))]
    pub price: Option<f64>,
    #[validate(range(exclusive_min = 0.0, message = "Discounted price must be greater than 0"))]
    pub discounted_price: Option<f64>,
    pub category: Option<Uuid>,
    #[validate(
        length(min = 1, message = "At least one image is required"),
        custom(function = "validate_images")
    )]
    pub images: Option<Vec<String>>,
    pub sizes: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub is_featured: Option<bool>,
    pub is_new_arrival: Option<bool>,
    pub is_active: Option<bool>,
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: Option<i32>,
}

/// A discounted price must undercut the regular price.
pub fn check_discount(price: f64, discounted_price: Option<f64>) -> AppResult<()> {
    match discounted_price {
        Some(discounted) if discounted >= price => Err(AppError::validation(
            "discountedPrice",
            "Discounted price must be less than price",
        )),
        _ => Ok(()),
    }
}

impl CreateProduct {
    pub fn check_invariants(&self) -> AppResult<()> {
        check_discount(self.price, self.discounted_price)
    }
}

impl UpdateProduct {
    /// Check the pricing invariant against the record the update lands on.
    pub fn check_invariants(&self, current: &Product) -> AppResult<()> {
        check_discount(
            self.price.unwrap_or(current.price),
            self.discounted_price.or(current.discounted_price),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> serde_json::Value {
        json!({
            "name": "Silk Saree",
            "description": "Handwoven silk saree with zari border",
            "price": 4999.0,
            "category": Uuid::new_v4(),
            "images": ["https://cdn.example.com/saree.jpg"]
        })
    }

    fn product(price: f64, discounted_price: Option<f64>) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: "Silk Saree".into(),
            description: "Handwoven silk saree".into(),
            price,
            discounted_price,
            category_id: Uuid::new_v4(),
            images: vec!["a.jpg".into()],
            sizes: vec![],
            colors: vec![],
            tags: vec![],
            is_featured: false,
            is_new_arrival: false,
            is_active: true,
            stock: 3,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_defaults() {
        let create: CreateProduct = serde_json::from_value(payload()).unwrap();
        assert!(create.validate().is_ok());
        assert!(!create.is_featured);
        assert!(!create.is_new_arrival);
        assert!(create.is_active);
        assert_eq!(create.stock, 0);
        assert!(create.tags.is_empty());
    }

    #[test]
    fn test_field_rules() {
        let mut body = payload();
        body["name"] = json!("ab");
        body["price"] = json!(0);
        body["images"] = json!([]);
        body["stock"] = json!(-1);
        let create: CreateProduct = serde_json::from_value(body).unwrap();
        let errors = create.validate().unwrap_err();
        let fields = errors.field_errors();
        for field in ["name", "price", "images", "stock"] {
            assert!(fields.contains_key(field), "missing {}", field);
        }
    }

    #[test]
    fn test_blank_image_is_rejected() {
        let mut body = payload();
        body["images"] = json!(["ok.jpg", "  "]);
        let create: CreateProduct = serde_json::from_value(body).unwrap();
        assert!(create.validate().is_err());
    }

    #[test]
    fn test_discount_must_undercut_price() {
        let mut body = payload();
        body["discountedPrice"] = json!(5999.0);
        let create: CreateProduct = serde_json::from_value(body).unwrap();
        assert!(create.check_invariants().is_err());

        assert!(check_discount(100.0, Some(80.0)).is_ok());
        assert!(check_discount(100.0, None).is_ok());
    }

    #[test]
    fn test_partial_update_checks_merged_prices() {
        let current = product(1000.0, Some(800.0));

        let lower_price = UpdateProduct {
            price: Some(700.0),
            ..Default::default()
        };
        assert!(lower_price.check_invariants(&current).is_err());

        let new_discount = UpdateProduct {
            discounted_price: Some(900.0),
            ..Default::default()
        };
        assert!(new_discount.check_invariants(&current).is_ok());
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let view = ProductView::new(product(10.0, None), None);
        let json = serde_json::to_value(view).unwrap();
        assert!(json.get("isNewArrival").is_some());
        assert!(json["category"].is_null());
    }
}
