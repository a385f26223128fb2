//! Contact message database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::ContactMessage;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contact_messages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ContactMessage {
    fn from(model: Model) -> Self {
        ContactMessage {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            message: model.message,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
