//! Application route configuration.

use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    admin_routes, category_routes, contact_routes, offer_routes, product_routes, review_routes,
};
use super::openapi::ApiDoc;
use super::AppState;
use crate::errors::{AppError, AppResult};

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .nest("/admin", admin_routes(state.clone()))
        .nest("/products", product_routes(state.clone()))
        .nest("/categories", category_routes(state.clone()))
        .nest("/offers", offer_routes(state.clone()))
        .nest("/reviews", review_routes(state.clone()))
        .nest("/contact", contact_routes());

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api)
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS for the storefront origin, with credentials.
pub fn cors_layer(origin: &str) -> AppResult<CorsLayer> {
    let origin = HeaderValue::from_str(origin)
        .map_err(|_| AppError::internal(format!("Invalid CORS origin: {}", origin)))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]))
}

#[derive(Serialize)]
struct HealthStatus {
    timestamp: DateTime<Utc>,
    database: &'static str,
}

#[derive(Serialize)]
struct HealthResponse {
    success: bool,
    message: &'static str,
    data: HealthStatus,
}

/// Liveness probe with a database ping
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, success, database) = match state.database.ping().await {
        Ok(()) => (StatusCode::OK, true, "connected"),
        Err(e) => {
            tracing::error!(error = %e, "Health check database ping failed");
            (StatusCode::SERVICE_UNAVAILABLE, false, "disconnected")
        }
    };

    let response = HealthResponse {
        success,
        message: "Server is running",
        data: HealthStatus {
            timestamp: Utc::now(),
            database,
        },
    };

    (status, Json(response))
}

async fn route_not_found(method: Method, uri: Uri) -> Response {
    let body = json!({
        "success": false,
        "message": "Route not found",
        "error": format!("{} {}", method, uri.path()),
    });
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_rejects_invalid_origin() {
        assert!(cors_layer("http://localhost:3000").is_ok());
        assert!(cors_layer("bad\norigin").is_err());
    }
}
