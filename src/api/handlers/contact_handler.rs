//! Contact form handler.

use axum::{extract::State, routing::post, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{ContactMessage, CreateContactMessage};
use crate::errors::AppResult;
use crate::types::Created;

pub fn contact_routes() -> Router<AppState> {
    Router::new().route("/", post(submit_message))
}

/// Store a message from the storefront contact form
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "Contact",
    request_body = CreateContactMessage,
    responses(
        (status = 201, description = "Message sent successfully", body = ContactMessage),
        (status = 400, description = "Validation error")
    )
)]
pub async fn submit_message(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateContactMessage>,
) -> AppResult<Created<ContactMessage>> {
    let message = state.contact_service.submit(payload).await?;
    Ok(Created::new("Message sent successfully", message))
}
