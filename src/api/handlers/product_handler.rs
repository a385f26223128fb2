//! Product catalog handlers.

use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{get, post, put},
    Router,
};

use super::parse_id;
use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{auth_middleware, OptionalAdmin};
use crate::api::AppState;
use crate::domain::{
    CreateProduct, ProductListParams, ProductPage, ProductQuery, ProductView, ShowcaseParams,
    UpdateProduct,
};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Created};

/// Create product routes; mutations require a bearer token.
pub fn product_routes(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/", post(create_product))
        .route("/:id", put(update_product).delete(delete_product))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/", get(list_products))
        .route("/featured", get(featured_products))
        .route("/new-arrivals", get(new_arrivals))
        .route("/:id", get(get_product))
        .merge(admin)
}

/// List active products with filters, sort and pagination
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    params(ProductListParams),
    responses(
        (status = 200, description = "Products retrieved successfully", body = ProductPage),
        (status = 400, description = "Invalid query parameters")
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductListParams>,
) -> AppResult<ApiResponse<ProductPage>> {
    let query = ProductQuery::parse(&params)?;
    let page = state.product_service.list(query).await?;
    Ok(ApiResponse::success("Products retrieved successfully", page))
}

/// Newest featured products
#[utoipa::path(
    get,
    path = "/api/products/featured",
    tag = "Products",
    params(ShowcaseParams),
    responses((status = 200, description = "Featured products retrieved", body = [ProductView]))
)]
pub async fn featured_products(
    State(state): State<AppState>,
    Query(params): Query<ShowcaseParams>,
) -> AppResult<ApiResponse<Vec<ProductView>>> {
    let products = state.product_service.featured(params).await?;
    Ok(ApiResponse::success("Featured products retrieved", products))
}

/// Newest new arrivals
#[utoipa::path(
    get,
    path = "/api/products/new-arrivals",
    tag = "Products",
    params(ShowcaseParams),
    responses((status = 200, description = "New arrivals retrieved", body = [ProductView]))
)]
pub async fn new_arrivals(
    State(state): State<AppState>,
    Query(params): Query<ShowcaseParams>,
) -> AppResult<ApiResponse<Vec<ProductView>>> {
    let products = state.product_service.new_arrivals(params).await?;
    Ok(ApiResponse::success("New arrivals retrieved", products))
}

/// Get a product; inactive products are visible to admins only
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product retrieved successfully", body = ProductView),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    admin: OptionalAdmin,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<ProductView>> {
    let id = parse_id(&id, "Product")?;
    let product = state.product_service.get(id, admin.is_admin()).await?;
    Ok(ApiResponse::success("Product retrieved successfully", product))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    security(("bearer_auth" = [])),
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = ProductView),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProduct>,
) -> AppResult<Created<ProductView>> {
    let product = state.product_service.create(payload).await?;
    Ok(Created::new("Product created successfully", product))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Product id")),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = ProductView),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateProduct>,
) -> AppResult<ApiResponse<ProductView>> {
    let id = parse_id(&id, "Product")?;
    let product = state.product_service.update(id, payload).await?;
    Ok(ApiResponse::success("Product updated successfully", product))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted successfully", body = ProductView),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<ProductView>> {
    let id = parse_id(&id, "Product")?;
    let product = state.product_service.delete(id).await?;
    Ok(ApiResponse::success("Product deleted successfully", product))
}
