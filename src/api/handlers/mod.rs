//! HTTP request handlers.

pub mod admin_handler;
pub mod category_handler;
pub mod contact_handler;
pub mod offer_handler;
pub mod product_handler;
pub mod review_handler;

pub use admin_handler::admin_routes;
pub use category_handler::category_routes;
pub use contact_handler::contact_routes;
pub use offer_handler::offer_routes;
pub use product_handler::product_routes;
pub use review_handler::review_routes;

use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Path ids that are not UUIDs cannot match a record.
pub(crate) fn parse_id(raw: &str, resource: &'static str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(resource))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), "Product").unwrap(), id);
        assert!(matches!(
            parse_id("not-a-uuid", "Product"),
            Err(AppError::NotFound("Product"))
        ));
    }
}
