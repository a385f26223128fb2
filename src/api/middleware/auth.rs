//! JWT authentication middleware.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::convert::Infallible;
use uuid::Uuid;

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::errors::AppError;
use crate::services::Claims;

/// Authenticated admin extracted from the bearer token
#[derive(Clone, Debug)]
pub struct CurrentAdmin {
    pub id: Uuid,
    pub email: String,
}

impl From<Claims> for CurrentAdmin {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.admin_id,
            email: claims.email,
        }
    }
}

/// Token from an `Authorization: Bearer <token>` header.
///
/// An absent header, another scheme, or an empty token all read as missing.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_TOKEN_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// JWT authentication middleware.
///
/// Verifies the token statelessly and injects `CurrentAdmin` into the
/// request extensions; the admin record is not looked up.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers()).ok_or(AppError::MissingToken)?;
    let claims = state.auth_service.verify_token(token)?;

    request.extensions_mut().insert(CurrentAdmin::from(claims));

    Ok(next.run(request).await)
}

/// Admin identity on public routes, when a valid token was sent.
///
/// A missing or invalid token is not an error here; the caller is treated
/// as a visitor.
#[derive(Clone, Debug)]
pub struct OptionalAdmin(pub Option<CurrentAdmin>);

impl OptionalAdmin {
    pub fn is_admin(&self) -> bool {
        self.0.is_some()
    }
}

#[async_trait]
impl FromRequestParts<AppState> for OptionalAdmin {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let admin = bearer_token(&parts.headers)
            .and_then(|token| state.auth_service.verify_token(token).ok())
            .map(CurrentAdmin::from);
        Ok(Self(admin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token(&headers("Bearer abc.def")), Some("abc.def"));
        assert_eq!(bearer_token(&headers("Bearer ")), None);
        assert_eq!(bearer_token(&headers("Basic dXNlcg==")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
