//! Customer review domain entity and request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::types::PaginationMeta;

/// Review domain entity
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    #[schema(example = "Priya S.")]
    pub customer_name: String,
    #[schema(example = 5, minimum = 1, maximum = 5)]
    pub rating: i32,
    pub review_text: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One page of the review listing
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReviewPage {
    pub reviews: Vec<Review>,
    pub pagination: PaginationMeta,
}

fn default_true() -> bool {
    true
}

/// Review creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReview {
    #[validate(length(min = 1, message = "Customer name is required"))]
    pub customer_name: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
    #[validate(length(min = 10, message = "Review text must be at least 10 characters"))]
    pub review_text: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Review partial update payload
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReview {
    #[validate(length(min = 1, message = "Customer name is required"))]
    pub customer_name: Option<String>,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i32>,
    #[validate(length(min = 10, message = "Review text must be at least 10 characters"))]
    pub review_text: Option<String>,
    pub is_active: Option<bool>,
}
