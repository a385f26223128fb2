//! Contact form submissions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Stored contact message
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Contact form payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateContactMessage {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    #[schema(example = "Asha Rao")]
    pub name: String,
    #[validate(email(message = "Invalid email"))]
    #[schema(example = "asha@example.com")]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}
