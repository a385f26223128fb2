//! Category domain entity and request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::slug::slugify;
use crate::errors::{AppError, AppResult};

/// Category domain entity
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    #[schema(example = "Summer Collection")]
    pub name: String,
    #[schema(example = "summer-collection")]
    pub slug: String,
    pub description: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category reference joined into products (`id`, `name`, `slug` only)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CategorySummary {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

impl From<&Category> for CategorySummary {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            slug: category.slug.clone(),
        }
    }
}

/// Category creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategory {
    #[validate(length(min = 3, message = "Category name must be at least 3 characters"))]
    #[schema(example = "Summer Collection")]
    pub name: String,
    /// Derived from `name` when absent
    pub slug: Option<String>,
    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: String,
    #[validate(url(message = "Image must be a valid URL"))]
    pub image: Option<String>,
}

/// Category partial update payload
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCategory {
    #[validate(length(min = 3, message = "Category name must be at least 3 characters"))]
    pub name: Option<String>,
    pub slug: Option<String>,
    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: Option<String>,
    #[validate(url(message = "Image must be a valid URL"))]
    pub image: Option<String>,
}

/// Validated category ready for persistence
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub image: Option<String>,
}

/// Field changes for a category update (`None` = unchanged)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryChanges {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Normalise an explicit slug, or derive one from the name.
fn resolve_slug(explicit: Option<&str>, name: &str) -> AppResult<String> {
    let slug = match explicit.map(str::trim).filter(|s| !s.is_empty()) {
        Some(slug) => slugify(slug),
        None => slugify(name),
    };

    if slug.is_empty() {
        return Err(AppError::validation(
            "slug",
            "Slug must contain at least one letter or digit",
        ));
    }
    Ok(slug)
}

/// Trimmed name, held to the same minimum length as the raw payload.
fn trimmed_name(name: &str) -> AppResult<String> {
    let name = name.trim();
    if name.chars().count() < 3 {
        return Err(AppError::validation(
            "name",
            "Category name must be at least 3 characters",
        ));
    }
    Ok(name.to_string())
}

impl CreateCategory {
    pub fn into_new(self) -> AppResult<NewCategory> {
        let name = trimmed_name(&self.name)?;
        let slug = resolve_slug(self.slug.as_deref(), &name)?;
        Ok(NewCategory {
            name,
            slug,
            description: self.description,
            image: self.image,
        })
    }
}

impl UpdateCategory {
    /// A new name without an explicit slug re-derives the slug.
    pub fn into_changes(self) -> AppResult<CategoryChanges> {
        let name = self.name.as_deref().map(trimmed_name).transpose()?;
        let slug = match (&self.slug, &name) {
            (Some(slug), name) => Some(resolve_slug(Some(slug), name.as_deref().unwrap_or(""))?),
            (None, Some(name)) => Some(resolve_slug(None, name)?),
            (None, None) => None,
        };

        Ok(CategoryChanges {
            name,
            slug,
            description: self.description,
            image: self.image,
        })
    }
}
