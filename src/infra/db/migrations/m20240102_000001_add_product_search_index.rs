//! Migration: Full-text search over product name, description and tags.
//!
//! The document function must stay IMMUTABLE to back the expression index.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const CREATE_FUNCTION: &str = r#"
CREATE OR REPLACE FUNCTION product_search_document(name text, description text, tags text[])
RETURNS tsvector
LANGUAGE sql
IMMUTABLE
AS $$
    SELECT to_tsvector(
        'english'::regconfig,
        coalesce(name, '') || ' ' || coalesce(description, '') || ' ' || coalesce(array_to_string(tags, ' '), '')
    )
$$
"#;

const CREATE_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS idx_products_search
ON products USING GIN (product_search_document(name, description, tags))
"#;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(CREATE_FUNCTION).await?;
        db.execute_unprepared(CREATE_INDEX).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP INDEX IF EXISTS idx_products_search")
            .await?;
        db.execute_unprepared(
            "DROP FUNCTION IF EXISTS product_search_document(text, text, text[])",
        )
        .await?;
        Ok(())
    }
}
