//! Customer review handlers.

use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::parse_id;
use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{auth_middleware, OptionalAdmin};
use crate::api::AppState;
use crate::config::DEFAULT_REVIEW_PAGE_SIZE;
use crate::domain::{CreateReview, Review, ReviewPage, UpdateReview};
use crate::errors::{AppError, AppResult};
use crate::types::{ApiResponse, Created, PageRequest};

/// Review listing query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReviewListParams {
    /// 1-based page number (default 1)
    pub page: Option<String>,
    /// Page size (default 10, max 100)
    pub limit: Option<String>,
}

/// Create review routes; mutations require a bearer token.
pub fn review_routes(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/", post(create_review))
        .route("/:id", put(update_review).delete(delete_review))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/", get(list_reviews))
        .route("/:id", get(get_review))
        .merge(admin)
}

/// Active reviews, newest first
#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = "Reviews",
    params(ReviewListParams),
    responses(
        (status = 200, description = "Reviews retrieved successfully", body = ReviewPage),
        (status = 400, description = "Invalid pagination parameters")
    )
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    Query(params): Query<ReviewListParams>,
) -> AppResult<ApiResponse<ReviewPage>> {
    let page = PageRequest::parse(
        params.page.as_deref(),
        params.limit.as_deref(),
        DEFAULT_REVIEW_PAGE_SIZE,
    )
    .map_err(AppError::Validation)?;

    let reviews = state.review_service.list(page).await?;
    Ok(ApiResponse::success("Reviews retrieved successfully", reviews))
}

#[utoipa::path(
    get,
    path = "/api/reviews/{id}",
    tag = "Reviews",
    params(("id" = String, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review retrieved successfully", body = Review),
        (status = 404, description = "Review not found")
    )
)]
pub async fn get_review(
    State(state): State<AppState>,
    admin: OptionalAdmin,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Review>> {
    let id = parse_id(&id, "Review")?;
    let review = state.review_service.get(id, admin.is_admin()).await?;
    Ok(ApiResponse::success("Review retrieved successfully", review))
}

#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = "Reviews",
    security(("bearer_auth" = [])),
    request_body = CreateReview,
    responses(
        (status = 201, description = "Review created successfully", body = Review),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn create_review(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateReview>,
) -> AppResult<Created<Review>> {
    let review = state.review_service.create(payload).await?;
    Ok(Created::new("Review created successfully", review))
}

#[utoipa::path(
    put,
    path = "/api/reviews/{id}",
    tag = "Reviews",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Review id")),
    request_body = UpdateReview,
    responses(
        (status = 200, description = "Review updated successfully", body = Review),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Review not found")
    )
)]
pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateReview>,
) -> AppResult<ApiResponse<Review>> {
    let id = parse_id(&id, "Review")?;
    let review = state.review_service.update(id, payload).await?;
    Ok(ApiResponse::success("Review updated successfully", review))
}

#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    tag = "Reviews",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review deleted successfully", body = Review),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Review not found")
    )
)]
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Review>> {
    let id = parse_id(&id, "Review")?;
    let review = state.review_service.delete(id).await?;
    Ok(ApiResponse::success("Review deleted successfully", review))
}
