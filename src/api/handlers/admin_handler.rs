//! Admin authentication handlers.

use axum::{
    extract::State,
    middleware,
    routing::{get, post},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{auth_middleware, CurrentAdmin};
use crate::api::AppState;
use crate::domain::AdminProfile;
use crate::errors::AppResult;
use crate::services::LoginResponse;
use crate::types::ApiResponse;

/// Admin login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Please provide a valid email"))]
    #[schema(example = "admin@boutique.com")]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "AdminPassword123", min_length = 8)]
    pub password: String,
}

/// Create admin routes
pub fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/profile", get(profile))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
        .route("/login", post(login))
}

/// Login and get a bearer token
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "Admin",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<ApiResponse<LoginResponse>> {
    let response = state
        .auth_service
        .login(payload.email, payload.password)
        .await?;

    Ok(ApiResponse::success("Login successful", response))
}

/// Profile of the authenticated admin
#[utoipa::path(
    get,
    path = "/api/admin/profile",
    tag = "Admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Admin profile retrieved", body = AdminProfile),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Admin not found")
    )
)]
pub async fn profile(
    State(state): State<AppState>,
    Extension(admin): Extension<CurrentAdmin>,
) -> AppResult<ApiResponse<AdminProfile>> {
    let profile = state.auth_service.profile(admin.id).await?;
    Ok(ApiResponse::success("Admin profile retrieved", profile))
}
