//! Contact form service.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{ContactMessage, CreateContactMessage};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

#[async_trait]
pub trait ContactService: Send + Sync {
    async fn submit(&self, payload: CreateContactMessage) -> AppResult<ContactMessage>;
}

pub struct ContactInbox<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ContactInbox<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ContactService for ContactInbox<U> {
    async fn submit(&self, payload: CreateContactMessage) -> AppResult<ContactMessage> {
        let message = self.uow.contacts().create(payload).await?;
        tracing::info!(message_id = %message.id, "Contact message received");
        Ok(message)
    }
}
