//! Offer database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{DiscountType, Offer};
use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "offers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// `percentage` | `flat`
    pub discount_type: String,
    #[sea_orm(column_type = "Double")]
    pub discount_value: f64,
    pub applicable_products: Vec<Uuid>,
    pub applicable_categories: Vec<Uuid>,
    pub start_date: DateTimeUtc,
    pub end_date: DateTimeUtc,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Offer {
    type Error = AppError;

    fn try_from(model: Model) -> AppResult<Self> {
        Ok(Offer {
            id: model.id,
            title: model.title,
            description: model.description,
            discount_type: DiscountType::try_from(model.discount_type.as_str())?,
            discount_value: model.discount_value,
            applicable_products: model.applicable_products,
            applicable_categories: model.applicable_categories,
            start_date: model.start_date,
            end_date: model.end_date,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(discount_type: &str) -> Model {
        let now = chrono::Utc::now();
        Model {
            id: Uuid::new_v4(),
            title: "Festive Sale".to_string(),
            description: "Flat discount on silk sarees".to_string(),
            discount_type: discount_type.to_string(),
            discount_value: 20.0,
            applicable_products: vec![],
            applicable_categories: vec![],
            start_date: now,
            end_date: now + chrono::Duration::days(7),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_stored_discount_type_is_read_back() {
        let offer = Offer::try_from(model("flat")).unwrap();
        assert_eq!(offer.discount_type, DiscountType::Flat);
    }

    #[test]
    fn test_unknown_discount_type_is_an_error() {
        let err = Offer::try_from(model("bogus")).unwrap_err();
        assert!(matches!(err, AppError::Internal(ref msg) if msg.contains("bogus")));
    }
}
