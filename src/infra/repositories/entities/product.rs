//! Product database entity for SeaORM.
//!
//! `category_id` is a plain column: deleting a category leaves its products
//! pointing at nothing, which reads back as a `null` category.

use sea_orm::entity::prelude::*;

use crate::domain::{Product, ProductRef};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    #[sea_orm(column_type = "Double", nullable)]
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
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Product {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            discounted_price: model.discounted_price,
            category_id: model.category_id,
            images: model.images,
            sizes: model.sizes,
            colors: model.colors,
            tags: model.tags,
            is_featured: model.is_featured,
            is_new_arrival: model.is_new_arrival,
            is_active: model.is_active,
            stock: model.stock,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<Model> for ProductRef {
    fn from(model: Model) -> Self {
        ProductRef {
            id: model.id,
            name: model.name,
            price: model.price,
        }
    }
}
