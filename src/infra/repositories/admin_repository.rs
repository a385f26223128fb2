//! Admin credential store.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::entities::admin_user::{self, ActiveModel, Entity as AdminEntity};
use crate::domain::AdminUser;
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Admin repository trait for dependency injection.
///
/// Emails are expected to be normalized by the caller.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<AdminUser>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<AdminUser>>;

    async fn create(&self, email: String, password_hash: String, name: String)
        -> AppResult<AdminUser>;

    /// Replace the stored hash (and display name) of an existing admin
    async fn update_credentials(
        &self,
        id: Uuid,
        password_hash: String,
        name: String,
    ) -> AppResult<AdminUser>;
}

/// SeaORM-backed admin repository
pub struct AdminStore {
    db: DatabaseConnection,
}

impl AdminStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminRepository for AdminStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<AdminUser>> {
        let result = AdminEntity::find()
            .filter(admin_user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(AdminUser::from))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<AdminUser>> {
        let result = AdminEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(AdminUser::from))
    }

    async fn create(
        &self,
        email: String,
        password_hash: String,
        name: String,
    ) -> AppResult<AdminUser> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email),
            password_hash: Set(password_hash),
            name: Set(name),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, "Admin"))?;
        Ok(AdminUser::from(model))
    }

    async fn update_credentials(
        &self,
        id: Uuid,
        password_hash: String,
        name: String,
    ) -> AppResult<AdminUser> {
        let admin = AdminEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found("Admin")?;

        let mut active: ActiveModel = admin.into();
        active.password_hash = Set(password_hash);
        active.name = Set(name);
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(AdminUser::from(model))
    }
}
