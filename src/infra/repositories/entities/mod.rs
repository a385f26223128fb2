//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod admin_user;
pub mod category;
pub mod contact_message;
pub mod offer;
pub mod product;
pub mod review;
