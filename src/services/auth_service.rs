//! Authentication service - Admin login, profile and token checks.
//!
//! Password handling lives in the domain `Password` value object; tokens are
//! signed by `TokenService`.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use super::token_service::{Claims, TokenService};
use crate::domain::{normalize_email, AdminProfile, AdminSummary, AdminUser, Password};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Successful login payload
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    /// Token lifetime in seconds
    #[schema(example = 604800)]
    pub expires_in: i64,
    pub admin: AdminSummary,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check credentials and issue a token
    async fn login(&self, email: String, password: String) -> AppResult<LoginResponse>;

    /// Admin record for an authenticated admin id
    async fn profile(&self, admin_id: Uuid) -> AppResult<AdminProfile>;

    /// Verify a bearer token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;

    /// Create the admin, or reset the password of the existing one
    async fn ensure_admin(&self, email: &str, password: &str, name: &str)
        -> AppResult<AdminUser>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    tokens: Arc<TokenService>,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(uow: Arc<U>, tokens: Arc<TokenService>) -> Self {
        Self { uow, tokens }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn login(&self, email: String, password: String) -> AppResult<LoginResponse> {
        let email = normalize_email(&email);
        let admin = self.uow.admins().find_by_email(&email).await?;

        // Unknown emails still pay for one hash comparison.
        let stored = match &admin {
            Some(admin) => Password::from_hash(admin.password_hash.clone()),
            None => Password::dummy().clone(),
        };
        let password_valid = stored.verify(&password);

        let admin = match admin {
            Some(admin) if password_valid => admin,
            _ => {
                tracing::warn!("Rejected admin login");
                return Err(AppError::InvalidCredentials);
            }
        };

        let issued = self.tokens.issue(admin.id, &admin.email)?;
        tracing::info!(admin_id = %admin.id, "Admin logged in");

        Ok(LoginResponse {
            token: issued.token,
            expires_in: issued.expires_in,
            admin: AdminSummary::from(&admin),
        })
    }

    async fn profile(&self, admin_id: Uuid) -> AppResult<AdminProfile> {
        self.uow
            .admins()
            .find_by_id(admin_id)
            .await?
            .map(AdminProfile::from)
            .ok_or_not_found("Admin")
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        self.tokens.verify(token)
    }

    async fn ensure_admin(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> AppResult<AdminUser> {
        let email = normalize_email(email);
        let password_hash = Password::new(password)?.into_string();
        let admins = self.uow.admins();

        match admins.find_by_email(&email).await? {
            Some(existing) => {
                let admin = admins
                    .update_credentials(existing.id, password_hash, name.to_string())
                    .await?;
                tracing::info!(admin_id = %admin.id, "Admin password reset");
                Ok(admin)
            }
            None => {
                let admin = admins
                    .create(email, password_hash, name.to_string())
                    .await?;
                tracing::info!(admin_id = %admin.id, "Admin created");
                Ok(admin)
            }
        }
    }
}
