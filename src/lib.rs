//! Boutique API - storefront catalog service.
//!
//! Public endpoints serve products, categories, offers and reviews; a bearer
//! token obtained from the admin login guards every mutation.
//!
//! # Architecture Layers
//!
//! - **cli** / **commands**: `serve`, `migrate` and `seed`
//! - **config**: Environment configuration and constants
//! - **domain**: Entities, payloads, validation rules and the product query plan
//! - **services**: Use cases behind traits, generic over the unit of work
//! - **infra**: Postgres via SeaORM (entities, repositories, migrations)
//! - **api**: Routes, handlers, auth middleware and OpenAPI docs
//! - **types**: Pagination and the response envelope
//! - **errors**: `AppError` and its HTTP mapping
//!
//! # CLI Usage
//!
//! ```bash
//! boutique-api migrate up
//! boutique-api seed
//! boutique-api serve --port 5000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use errors::{AppError, AppResult};
