//! Promotional offer domain entity and request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::errors::{AppError, AppResult};

/// How an offer's `discount_value` is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Percentage,
    Flat,
}

impl DiscountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "percentage",
            DiscountType::Flat => "flat",
        }
    }
}

impl TryFrom<&str> for DiscountType {
    type Error = AppError;

    fn try_from(s: &str) -> AppResult<Self> {
        match s {
            "percentage" => Ok(DiscountType::Percentage),
            "flat" => Ok(DiscountType::Flat),
            other => Err(AppError::internal(format!(
                "Unknown discount type: {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for DiscountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Offer domain entity, holding raw references
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub applicable_products: Vec<Uuid>,
    pub applicable_categories: Vec<Uuid>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product reference inside an offer
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProductRef {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
}

/// Category reference inside an offer
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CategoryRef {
    pub id: Uuid,
    pub name: String,
}

/// Offer as returned to clients, references populated
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfferView {
    pub id: Uuid,
    #[schema(example = "Festive Sale")]
    pub title: String,
    pub description: String,
    pub discount_type: DiscountType,
    #[schema(example = 20.0)]
    pub discount_value: f64,
    pub applicable_products: Vec<ProductRef>,
    pub applicable_categories: Vec<CategoryRef>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OfferView {
    /// Populate references, keeping the offer's order and dropping the ones
    /// that no longer resolve.
    pub fn new(offer: Offer, products: &[ProductRef], categories: &[CategoryRef]) -> Self {
        let applicable_products = offer
            .applicable_products
            .iter()
            .filter_map(|id| products.iter().find(|p| p.id == *id).cloned())
            .collect();
        let applicable_categories = offer
            .applicable_categories
            .iter()
            .filter_map(|id| categories.iter().find(|c| c.id == *id).cloned())
            .collect();

        Self {
            id: offer.id,
            title: offer.title,
            description: offer.description,
            discount_type: offer.discount_type,
            discount_value: offer.discount_value,
            applicable_products,
            applicable_categories,
            start_date: offer.start_date,
            end_date: offer.end_date,
            is_active: offer.is_active,
            created_at: offer.created_at,
            updated_at: offer.updated_at,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Offer creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOffer {
    #[validate(length(min = 3, message = "Offer title must be at least 3 characters"))]
    pub title: String,
    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: String,
    pub discount_type: DiscountType,
    #[validate(range(exclusive_min = 0.0, message = "Discount value must be greater than 0"))]
    pub discount_value: f64,
    #[serde(default)]
    pub applicable_products: Vec<Uuid>,
    #[serde(default)]
    pub applicable_categories: Vec<Uuid>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Offer partial update payload
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOffer {
    #[validate(length(min = 3, message = "Offer title must be at least 3 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: Option<String>,
    pub discount_type: Option<DiscountType>,
    #[validate(range(exclusive_min = 0.0, message = "Discount value must be greater than 0"))]
    pub discount_value: Option<f64>,
    pub applicable_products: Option<Vec<Uuid>>,
    pub applicable_categories: Option<Vec<Uuid>>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}

/// An offer must end after it starts.
pub fn check_schedule(start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> AppResult<()> {
    if start_date >= end_date {
        return Err(AppError::validation(
            "endDate",
            "End date must be after start date",
        ));
    }
    Ok(())
}

impl CreateOffer {
    pub fn check_invariants(&self) -> AppResult<()> {
        check_schedule(self.start_date, self.end_date)
    }
}

impl UpdateOffer {
    pub fn check_invariants(&self, current: &Offer) -> AppResult<()> {
        check_schedule(
            self.start_date.unwrap_or(current.start_date),
            self.end_date.unwrap_or(current.end_date),
        )
    }
}
