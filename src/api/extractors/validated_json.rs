//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::errors::{AppError, FieldError};

/// JSON body that has been deserialized and validated.
///
/// Malformed bodies are reported on the `body` field; rule violations are
/// reported per field with camelCase names.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation("body", e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::Validation(field_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Flatten validator output into sorted `(field, message)` pairs.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    collect(errors, None, &mut out);
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

fn collect(errors: &ValidationErrors, prefix: Option<&str>, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let name = match prefix {
            Some(prefix) => format!("{}.{}", prefix, camel_case(field)),
            None => camel_case(field),
        };
        match kind {
            ValidationErrorsKind::Field(errs) => {
                out.extend(errs.iter().map(|e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", name));
                    FieldError::new(name.clone(), message)
                }));
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, Some(&name), out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, Some(&format!("{}[{}]", name, index)), out);
                }
            }
        }
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 3, message = "Too short"))]
        customer_name: String,
        #[validate(range(min = 1, max = 5))]
        rating: i32,
    }

    #[test]
    fn test_field_errors_are_camel_case_and_sorted() {
        let sample = Sample {
            customer_name: "ab".into(),
            rating: 9,
        };
        let errors = field_errors(&sample.validate().unwrap_err());

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "customerName");
        assert_eq!(errors[0].message, "Too short");
        assert_eq!(errors[1].field, "rating");
        assert_eq!(errors[1].message, "rating is invalid");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("discounted_price"), "discountedPrice");
        assert_eq!(camel_case("is_new_arrival"), "isNewArrival");
        assert_eq!(camel_case("name"), "name");
    }
}
