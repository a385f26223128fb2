//! Pagination types for list endpoints.

use serde::Serialize;
use utoipa::ToSchema;

use crate::config::{DEFAULT_PAGE_NUMBER, MAX_PAGE_SIZE};
use crate::errors::FieldError;

/// Largest row offset Postgres accepts (`OFFSET` is a signed 64-bit value)
const MAX_OFFSET: u64 = i64::MAX as u64;

/// A validated page request (1-based page, capped limit)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    /// Build a page request, capping the limit at `MAX_PAGE_SIZE`.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Parse raw `page` / `limit` query values.
    ///
    /// Absent or empty values fall back to the defaults; anything that is not
    /// a positive integer is reported as a field error.
    pub fn parse(
        page: Option<&str>,
        limit: Option<&str>,
        default_limit: u64,
    ) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();

        let page = parse_positive("page", page, DEFAULT_PAGE_NUMBER, &mut errors);
        let limit = parse_positive("limit", limit, default_limit, &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        let request = Self::new(page, limit);
        let reachable = (request.page - 1)
            .checked_mul(request.limit)
            .is_some_and(|offset| offset <= MAX_OFFSET);
        if !reachable {
            return Err(vec![FieldError::new("page", "page is out of range")]);
        }
        Ok(request)
    }

    /// Calculate offset for database query
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit).min(MAX_OFFSET)
    }
}

fn parse_positive(
    field: &str,
    raw: Option<&str>,
    default: u64,
    errors: &mut Vec<FieldError>,
) -> u64 {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => default,
        Some(value) => match value.parse::<u64>() {
            Ok(n) if n >= 1 => n,
            _ => {
                errors.push(FieldError::new(
                    field,
                    format!("{} must be a positive integer", field),
                ));
                default
            }
        },
    }
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PaginationMeta {
    /// Matching records before pagination
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    /// `ceil(total / limit)`
    pub pages: u64,
}

impl PaginationMeta {
    pub fn new(total: u64, page: u64, limit: u64) -> Self {
        let pages = if limit > 0 { total.div_ceil(limit) } else { 0 };

        Self {
            total,
            page,
            limit,
            pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        let req = PageRequest::parse(None, None, 12).unwrap();
        assert_eq!(req, PageRequest { page: 1, limit: 12 });
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn test_offset() {
        let req = PageRequest::parse(Some("3"), Some("12"), 12).unwrap();
        assert_eq!(req.offset(), 24);
    }

    #[test]
    fn test_non_numeric_values_are_rejected() {
        let errors = PageRequest::parse(Some("abc"), Some("1.5"), 12).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["page", "limit"]);
    }

    #[test]
    fn test_zero_is_rejected() {
        assert!(PageRequest::parse(Some("0"), None, 12).is_err());
        assert!(PageRequest::parse(None, Some("0"), 12).is_err());
    }

    #[test]
    fn test_page_past_largest_offset_is_rejected() {
        let errors = PageRequest::parse(Some("100000000000000000"), Some("100"), 12).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "page");

        let errors = PageRequest::parse(Some(&u64::MAX.to_string()), None, 12).unwrap_err();
        assert_eq!(errors[0].field, "page");
    }

    #[test]
    fn test_last_reachable_page_is_accepted() {
        let last = MAX_OFFSET / 100 + 1;
        let req = PageRequest::parse(Some(&last.to_string()), Some("100"), 12).unwrap();
        assert!(req.offset() <= MAX_OFFSET);
    }

    #[test]
    fn test_offset_never_exceeds_largest_offset() {
        assert_eq!(PageRequest::new(u64::MAX, MAX_PAGE_SIZE).offset(), MAX_OFFSET);
    }

    #[test]
    fn test_limit_is_capped() {
        let req = PageRequest::parse(None, Some("5000"), 12).unwrap();
        assert_eq!(req.limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_pages_is_ceiling_of_total_over_limit() {
        for limit in 1..=15u64 {
            for total in 0..=60u64 {
                let meta = PaginationMeta::new(total, 1, limit);
                let expected = (total as f64 / limit as f64).ceil() as u64;
                assert_eq!(meta.pages, expected, "total={} limit={}", total, limit);
            }
        }
    }

    #[test]
    fn test_pages_cover_every_record_exactly_once() {
        for limit in 1..=10u64 {
            for total in 0..=35u64 {
                let meta = PaginationMeta::new(total, 1, limit);
                let mut seen = Vec::new();
                for page in 1..=meta.pages {
                    let req = PageRequest::new(page, limit);
                    let start = req.offset();
                    let end = (start + req.limit).min(total);
                    seen.extend(start..end);
                }
                assert_eq!(seen, (0..total).collect::<Vec<_>>());
            }
        }
    }
}
