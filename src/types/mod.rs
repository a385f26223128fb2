//! Shared types for DRY compliance.

mod pagination;
mod response;

pub use pagination::{PageRequest, PaginationMeta};
pub use response::{ApiResponse, Created};
