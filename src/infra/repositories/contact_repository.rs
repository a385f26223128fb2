//! Contact message repository (write-only).

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

use super::entities::contact_message::ActiveModel;
use crate::domain::{ContactMessage, CreateContactMessage};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, message: CreateContactMessage) -> AppResult<ContactMessage>;
}

pub struct ContactStore {
    db: DatabaseConnection,
}

impl ContactStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactStore {
    async fn create(&self, message: CreateContactMessage) -> AppResult<ContactMessage> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(message.name),
            email: Set(message.email),
            phone: Set(message.phone),
            message: Set(message.message),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(ContactMessage::from(model))
    }
}
