//! Product listing query plan.
//!
//! Turns the flat, string-typed query parameters of `GET /api/products` into a
//! typed filter, sort and page plan. Parsing is pure and reports every invalid
//! field at once.

use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::config::{DEFAULT_PRODUCT_PAGE_SIZE, DEFAULT_SHOWCASE_SIZE};
use crate::errors::{AppError, AppResult, FieldError};
use crate::types::PageRequest;

/// Raw query parameters of the product listing
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductListParams {
    /// Category slug
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    /// Only the literal `true` filters
    pub is_featured: Option<String>,
    /// Only the literal `true` filters
    pub is_new_arrival: Option<String>,
    /// createdAt | updatedAt | name | price | discountedPrice | stock | isFeatured | isNewArrival
    pub sort_by: Option<String>,
    /// `desc` sorts descending, anything else ascending
    pub order: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    /// Free-text search over name, description and tags
    pub search: Option<String>,
}

/// Query parameters of the featured / new-arrival showcases
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ShowcaseParams {
    pub limit: Option<String>,
}

/// Sortable product columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    UpdatedAt,
    Name,
    Price,
    DiscountedPrice,
    Stock,
    IsFeatured,
    IsNewArrival,
}

impl SortField {
    fn parse(raw: &str) -> Option<Self> {
        let field = match raw {
            "createdAt" => SortField::CreatedAt,
            "updatedAt" => SortField::UpdatedAt,
            "name" => SortField::Name,
            "price" => SortField::Price,
            "discountedPrice" => SortField::DiscountedPrice,
            "stock" => SortField::Stock,
            "isFeatured" => SortField::IsFeatured,
            "isNewArrival" => SortField::IsNewArrival,
            _ => return None,
        };
        Some(field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Absent means descending; present, only `desc` does.
    fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("desc") => SortDirection::Desc,
            Some(_) => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductSort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl ProductSort {
    pub fn newest_first() -> Self {
        Self {
            field: SortField::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

/// Row filter applied by the product repository. Always limited to active
/// products.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub category_id: Option<Uuid>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub featured_only: bool,
    pub new_arrivals_only: bool,
    pub search: Option<String>,
}

/// Parsed product listing request
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    /// Category slug still to be resolved to an id
    pub category: Option<String>,
    pub filter: ProductFilter,
    pub sort: ProductSort,
    pub page: PageRequest,
}

fn non_empty(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_price(field: &str, raw: &Option<String>, errors: &mut Vec<FieldError>) -> Option<f64> {
    let value = non_empty(raw)?;
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => {
            errors.push(FieldError::new(field, format!("{} must be a number", field)));
            None
        }
    }
}

impl ProductQuery {
    pub fn parse(params: &ProductListParams) -> AppResult<Self> {
        let mut errors = Vec::new();

        let min_price = parse_price("minPrice", &params.min_price, &mut errors);
        let max_price = parse_price("maxPrice", &params.max_price, &mut errors);

        let field = match non_empty(&params.sort_by) {
            None => SortField::CreatedAt,
            Some(raw) => SortField::parse(raw).unwrap_or_else(|| {
                errors.push(FieldError::new(
                    "sortBy",
                    format!("Cannot sort by '{}'", raw),
                ));
                SortField::CreatedAt
            }),
        };
        let direction = SortDirection::parse(params.order.as_deref());

        let page = match PageRequest::parse(
            params.page.as_deref(),
            params.limit.as_deref(),
            DEFAULT_PRODUCT_PAGE_SIZE,
        ) {
            Ok(page) => page,
            Err(page_errors) => {
                errors.extend(page_errors);
                PageRequest::new(1, DEFAULT_PRODUCT_PAGE_SIZE)
            }
        };

        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        Ok(Self {
            category: non_empty(&params.category).map(String::from),
            filter: ProductFilter {
                category_id: None,
                min_price,
                max_price,
                featured_only: params.is_featured.as_deref() == Some("true"),
                new_arrivals_only: params.is_new_arrival.as_deref() == Some("true"),
                search: non_empty(&params.search).map(String::from),
            },
            sort: ProductSort { field, direction },
            page,
        })
    }

    /// Newest active products matching a flag, first page only.
    pub fn showcase(params: &ShowcaseParams, filter: ProductFilter) -> AppResult<Self> {
        let page = PageRequest::parse(None, params.limit.as_deref(), DEFAULT_SHOWCASE_SIZE)
            .map_err(AppError::Validation)?;

        Ok(Self {
            category: None,
            filter,
            sort: ProductSort::newest_first(),
            page,
        })
    }
}
