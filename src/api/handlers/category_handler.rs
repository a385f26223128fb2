//! Category handlers.

use axum::{
    extract::{Path, State},
    middleware,
    routing::{get, post, put},
    Router,
};

use super::parse_id;
use crate::api::extractors::ValidatedJson;
use crate::api::middleware::auth_middleware;
use crate::api::AppState;
use crate::domain::{Category, CreateCategory, UpdateCategory};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Created};

/// Create category routes; mutations require a bearer token.
pub fn category_routes(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/", post(create_category))
        .route("/:id", put(update_category).delete(delete_category))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/", get(list_categories))
        .route("/:id", get(get_category))
        .merge(admin)
}

/// List all categories by name
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Categories",
    responses((status = 200, description = "Categories retrieved successfully", body = [Category]))
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<Category>>> {
    let categories = state.category_service.list().await?;
    Ok(ApiResponse::success("Categories retrieved successfully", categories))
}

/// Get a category by slug (or id)
#[utoipa::path(
    get,
    path = "/api/categories/{slug}",
    tag = "Categories",
    params(("slug" = String, Path, description = "Category slug or id")),
    responses(
        (status = 200, description = "Category retrieved successfully", body = Category),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<ApiResponse<Category>> {
    let category = state.category_service.get(&slug).await?;
    Ok(ApiResponse::success("Category retrieved successfully", category))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "Categories",
    security(("bearer_auth" = [])),
    request_body = CreateCategory,
    responses(
        (status = 201, description = "Category created successfully", body = Category),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token"),
        (status = 409, description = "Category already exists")
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCategory>,
) -> AppResult<Created<Category>> {
    let category = state.category_service.create(payload).await?;
    Ok(Created::new("Category created successfully", category))
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = "Categories",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Category id")),
    request_body = UpdateCategory,
    responses(
        (status = 200, description = "Category updated successfully", body = Category),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Category already exists")
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateCategory>,
) -> AppResult<ApiResponse<Category>> {
    let id = parse_id(&id, "Category")?;
    let category = state.category_service.update(id, payload).await?;
    Ok(ApiResponse::success("Category updated successfully", category))
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = "Categories",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted successfully", body = Category),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Category>> {
    let id = parse_id(&id, "Category")?;
    let category = state.category_service.delete(id).await?;
    Ok(ApiResponse::success("Category deleted successfully", category))
}
