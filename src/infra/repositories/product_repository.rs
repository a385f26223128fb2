//! Product repository, including the listing query.

use async_trait::async_trait;
use sea_orm::{
    sea_query::{Expr, Order},
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::entities::category::Entity as CategoryEntity;
use super::entities::product::{self, ActiveModel, Entity as ProductEntity};
use crate::domain::{
    CategorySummary, CreateProduct, Product, ProductFilter, ProductRef, ProductSort, ProductView,
    SortDirection, SortField, UpdateProduct,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::types::PageRequest;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// OR-of-terms match against the GIN-indexed search document.
const SEARCH_SQL: &str = r#"product_search_document("products"."name", "products"."description", "products"."tags") @@ websearch_to_tsquery('english', $1)"#;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// One page of active products matching `filter`, plus the total match count.
    async fn search(
        &self,
        filter: ProductFilter,
        sort: ProductSort,
        page: PageRequest,
    ) -> AppResult<(Vec<ProductView>, u64)>;

    /// Product with its category joined in, regardless of `is_active`
    async fn find_view(&self, id: Uuid) -> AppResult<Option<ProductView>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;

    /// `{id, name, price}` of every product in `ids` that still exists
    async fn refs(&self, ids: Vec<Uuid>) -> AppResult<Vec<ProductRef>>;

    async fn create(&self, product: CreateProduct) -> AppResult<Product>;

    async fn update(&self, id: Uuid, changes: UpdateProduct) -> AppResult<Product>;

    /// Hard delete, returning the removed record
    async fn delete(&self, id: Uuid) -> AppResult<Product>;
}

const TSQUERY_OPERATORS: &[char] = &['"', '-', ':', '&', '|', '!', '(', ')', '<', '>', '*'];

/// Build a `websearch_to_tsquery` input that matches any of the words in
/// `search`. Operators and quoting are stripped from user input.
pub(crate) fn search_terms(search: &str) -> String {
    search
        .split_whitespace()
        .map(|word| word.replace(TSQUERY_OPERATORS, ""))
        .filter(|word| word.chars().any(char::is_alphanumeric))
        .filter(|word| !word.eq_ignore_ascii_case("or"))
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Row condition for a listing. Inactive products never match.
pub(crate) fn filter_condition(filter: &ProductFilter) -> Condition {
    let mut condition = Condition::all().add(product::Column::IsActive.eq(true));

    if let Some(category_id) = filter.category_id {
        condition = condition.add(product::Column::CategoryId.eq(category_id));
    }
    if let Some(min) = filter.min_price {
        condition = condition.add(product::Column::Price.gte(min));
    }
    if let Some(max) = filter.max_price {
        condition = condition.add(product::Column::Price.lte(max));
    }
    if filter.featured_only {
        condition = condition.add(product::Column::IsFeatured.eq(true));
    }
    if filter.new_arrivals_only {
        condition = condition.add(product::Column::IsNewArrival.eq(true));
    }
    // Input with no searchable words does not narrow the listing
    if let Some(terms) = filter
        .search
        .as_deref()
        .map(search_terms)
        .filter(|terms| !terms.is_empty())
    {
        condition = condition.add(Expr::cust_with_values(SEARCH_SQL, [terms]));
    }

    condition
}

fn sort_column(field: SortField) -> product::Column {
    match field {
        SortField::CreatedAt => product::Column::CreatedAt,
        SortField::UpdatedAt => product::Column::UpdatedAt,
        SortField::Name => product::Column::Name,
        SortField::Price => product::Column::Price,
        SortField::DiscountedPrice => product::Column::DiscountedPrice,
        SortField::Stock => product::Column::Stock,
        SortField::IsFeatured => product::Column::IsFeatured,
        SortField::IsNewArrival => product::Column::IsNewArrival,
    }
}

fn sort_order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}

pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: Uuid) -> AppResult<product::Model> {
        ProductEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found("Product")
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn search(
        &self,
        filter: ProductFilter,
        sort: ProductSort,
        page: PageRequest,
    ) -> AppResult<(Vec<ProductView>, u64)> {
        let condition = filter_condition(&filter);

        let count = ProductEntity::find()
            .filter(condition.clone())
            .count(&self.db);
        let rows = ProductEntity::find()
            .filter(condition)
            .order_by(sort_column(sort.field), sort_order(sort.direction))
            .order_by_asc(product::Column::Id)
            .offset(page.offset())
            .limit(page.limit)
            .find_also_related(CategoryEntity)
            .all(&self.db);

        let (total, rows) = tokio::try_join!(count, rows)?;

        let products = rows
            .into_iter()
            .map(|(product, category)| {
                ProductView::new(product.into(), category.map(CategorySummary::from))
            })
            .collect();

        Ok((products, total))
    }

    async fn find_view(&self, id: Uuid) -> AppResult<Option<ProductView>> {
        let row = ProductEntity::find_by_id(id)
            .find_also_related(CategoryEntity)
            .one(&self.db)
            .await?;

        Ok(row.map(|(product, category)| {
            ProductView::new(product.into(), category.map(CategorySummary::from))
        }))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let result = ProductEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Product::from))
    }

    async fn refs(&self, ids: Vec<Uuid>) -> AppResult<Vec<ProductRef>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = ProductEntity::find()
            .filter(product::Column::Id.is_in(ids))
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(ProductRef::from).collect())
    }

    async fn create(&self, product: CreateProduct) -> AppResult<Product> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(product.name),
            description: Set(product.description),
            price: Set(product.price),
            discounted_price: Set(product.discounted_price),
            category_id: Set(product.category),
            images: Set(product.images),
            sizes: Set(product.sizes),
            colors: Set(product.colors),
            tags: Set(product.tags),
            is_featured: Set(product.is_featured),
            is_new_arrival: Set(product.is_new_arrival),
            is_active: Set(product.is_active),
            stock: Set(product.stock),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Product::from(model))
    }

    async fn update(&self, id: Uuid, changes: UpdateProduct) -> AppResult<Product> {
        let mut active: ActiveModel = self.find_model(id).await?.into();

        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(price) = changes.price {
            active.price = Set(price);
        }
        if let Some(discounted_price) = changes.discounted_price {
            active.discounted_price = Set(Some(discounted_price));
        }
        if let Some(category_id) = changes.category {
            active.category_id = Set(category_id);
        }
        if let Some(images) = changes.images {
            active.images = Set(images);
        }
        if let Some(sizes) = changes.sizes {
            active.sizes = Set(sizes);
        }
        if let Some(colors) = changes.colors {
            active.colors = Set(colors);
        }
        if let Some(tags) = changes.tags {
            active.tags = Set(tags);
        }
        if let Some(is_featured) = changes.is_featured {
            active.is_featured = Set(is_featured);
        }
        if let Some(is_new_arrival) = changes.is_new_arrival {
            active.is_new_arrival = Set(is_new_arrival);
        }
        if let Some(is_active) = changes.is_active {
            active.is_active = Set(is_active);
        }
        if let Some(stock) = changes.stock {
            active.stock = Set(stock);
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Product::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<Product> {
        let existing = self.find_model(id).await?;
        ProductEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(Product::from(existing))
    }
}
