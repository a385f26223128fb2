//! Offer handlers.

use axum::{
    extract::{Path, State},
    middleware,
    routing::{get, post, put},
    Router,
};

use super::parse_id;
use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{auth_middleware, OptionalAdmin};
use crate::api::AppState;
use crate::domain::{CreateOffer, OfferView, UpdateOffer};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Created};

/// Create offer routes; mutations require a bearer token.
pub fn offer_routes(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/", post(create_offer))
        .route("/:id", put(update_offer).delete(delete_offer))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/", get(list_offers))
        .route("/:id", get(get_offer))
        .merge(admin)
}

/// Active offers, newest first
#[utoipa::path(
    get,
    path = "/api/offers",
    tag = "Offers",
    responses((status = 200, description = "Offers retrieved successfully", body = [OfferView]))
)]
pub async fn list_offers(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<OfferView>>> {
    let offers = state.offer_service.list().await?;
    Ok(ApiResponse::success("Offers retrieved successfully", offers))
}

#[utoipa::path(
    get,
    path = "/api/offers/{id}",
    tag = "Offers",
    params(("id" = String, Path, description = "Offer id")),
    responses(
        (status = 200, description = "Offer retrieved successfully", body = OfferView),
        (status = 404, description = "Offer not found")
    )
)]
pub async fn get_offer(
    State(state): State<AppState>,
    admin: OptionalAdmin,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<OfferView>> {
    let id = parse_id(&id, "Offer")?;
    let offer = state.offer_service.get(id, admin.is_admin()).await?;
    Ok(ApiResponse::success("Offer retrieved successfully", offer))
}

#[utoipa::path(
    post,
    path = "/api/offers",
    tag = "Offers",
    security(("bearer_auth" = [])),
    request_body = CreateOffer,
    responses(
        (status = 201, description = "Offer created successfully", body = OfferView),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn create_offer(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateOffer>,
) -> AppResult<Created<OfferView>> {
    let offer = state.offer_service.create(payload).await?;
    Ok(Created::new("Offer created successfully", offer))
}

#[utoipa::path(
    put,
    path = "/api/offers/{id}",
    tag = "Offers",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Offer id")),
    request_body = UpdateOffer,
    responses(
        (status = 200, description = "Offer updated successfully", body = OfferView),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Offer not found")
    )
)]
pub async fn update_offer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateOffer>,
) -> AppResult<ApiResponse<OfferView>> {
    let id = parse_id(&id, "Offer")?;
    let offer = state.offer_service.update(id, payload).await?;
    Ok(ApiResponse::success("Offer updated successfully", offer))
}

#[utoipa::path(
    delete,
    path = "/api/offers/{id}",
    tag = "Offers",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Offer id")),
    responses(
        (status = 200, description = "Offer deleted successfully", body = OfferView),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Offer not found")
    )
)]
pub async fn delete_offer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<OfferView>> {
    let id = parse_id(&id, "Offer")?;
    let offer = state.offer_service.delete(id).await?;
    Ok(ApiResponse::success("Offer deleted successfully", offer))
}
