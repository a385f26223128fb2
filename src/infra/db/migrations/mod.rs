//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_admin_users_table;
mod m20240101_000002_create_categories_table;
mod m20240101_000003_create_products_table;
mod m20240101_000004_create_offers_table;
mod m20240101_000005_create_reviews_table;
mod m20240101_000006_create_contact_messages_table;
mod m20240102_000001_add_product_search_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_admin_users_table::Migration),
            Box::new(m20240101_000002_create_categories_table::Migration),
            Box::new(m20240101_000003_create_products_table::Migration),
            Box::new(m20240101_000004_create_offers_table::Migration),
            Box::new(m20240101_000005_create_reviews_table::Migration),
            Box::new(m20240101_000006_create_contact_messages_table::Migration),
            Box::new(m20240102_000001_add_product_search_index::Migration),
        ]
    }
}
