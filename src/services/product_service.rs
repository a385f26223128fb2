//! Product service - catalog listing and product maintenance.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{
    CategorySummary, CreateProduct, Product, ProductFilter, ProductPage, ProductQuery,
    ProductView, ShowcaseParams, UpdateProduct,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::types::PaginationMeta;

#[async_trait]
pub trait ProductService: Send + Sync {
    /// Filtered, sorted page of active products
    async fn list(&self, query: ProductQuery) -> AppResult<ProductPage>;

    /// Newest active featured products
    async fn featured(&self, params: ShowcaseParams) -> AppResult<Vec<ProductView>>;

    /// Newest active new arrivals
    async fn new_arrivals(&self, params: ShowcaseParams) -> AppResult<Vec<ProductView>>;

    /// Inactive products are only visible with `include_inactive`
    async fn get(&self, id: Uuid, include_inactive: bool) -> AppResult<ProductView>;

    async fn create(&self, payload: CreateProduct) -> AppResult<ProductView>;

    async fn update(&self, id: Uuid, payload: UpdateProduct) -> AppResult<ProductView>;

    async fn delete(&self, id: Uuid) -> AppResult<ProductView>;
}

pub struct ProductManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ProductManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn showcase(&self, params: ShowcaseParams, filter: ProductFilter) -> AppResult<Vec<ProductView>> {
        let query = ProductQuery::showcase(&params, filter)?;
        let (products, _) = self
            .uow
            .products()
            .search(query.filter, query.sort, query.page)
            .await?;
        Ok(products)
    }

    async fn require_category(&self, id: Uuid) -> AppResult<CategorySummary> {
        self.uow
            .categories()
            .find_by_id(id)
            .await?
            .map(|category| CategorySummary::from(&category))
            .ok_or_else(|| AppError::validation("category", "Category does not exist"))
    }

    /// Join the category in; a deleted category reads as `None`.
    async fn view(&self, product: Product) -> AppResult<ProductView> {
        let category = self
            .uow
            .categories()
            .find_by_id(product.category_id)
            .await?
            .map(|category| CategorySummary::from(&category));
        Ok(ProductView::new(product, category))
    }
}

#[async_trait]
impl<U: UnitOfWork> ProductService for ProductManager<U> {
    async fn list(&self, query: ProductQuery) -> AppResult<ProductPage> {
        let ProductQuery {
            category,
            mut filter,
            sort,
            page,
        } = query;

        if let Some(slug) = category {
            match self.uow.categories().find_by_slug(&slug).await? {
                Some(category) => filter.category_id = Some(category.id),
                None => {
                    tracing::debug!(slug = %slug, "Unknown category filter");
                    return Ok(ProductPage {
                        products: Vec::new(),
                        pagination: PaginationMeta::new(0, 1, page.limit),
                    });
                }
            }
        }

        let (products, total) = self.uow.products().search(filter, sort, page).await?;
        Ok(ProductPage {
            products,
            pagination: PaginationMeta::new(total, page.page, page.limit),
        })
    }

    async fn featured(&self, params: ShowcaseParams) -> AppResult<Vec<ProductView>> {
        let filter = ProductFilter {
            featured_only: true,
            ..Default::default()
        };
        self.showcase(params, filter).await
    }

    async fn new_arrivals(&self, params: ShowcaseParams) -> AppResult<Vec<ProductView>> {
        let filter = ProductFilter {
            new_arrivals_only: true,
            ..Default::default()
        };
        self.showcase(params, filter).await
    }

    async fn get(&self, id: Uuid, include_inactive: bool) -> AppResult<ProductView> {
        self.uow
            .products()
            .find_view(id)
            .await?
            .filter(|product| product.is_active || include_inactive)
            .ok_or_not_found("Product")
    }

    async fn create(&self, payload: CreateProduct) -> AppResult<ProductView> {
        payload.check_invariants()?;
        let category = self.require_category(payload.category).await?;

        let product = self.uow.products().create(payload).await?;
        tracing::info!(product_id = %product.id, "Product created");
        Ok(ProductView::new(product, Some(category)))
    }

    async fn update(&self, id: Uuid, payload: UpdateProduct) -> AppResult<ProductView> {
        let products = self.uow.products();
        let current = products.find_by_id(id).await?.ok_or_not_found("Product")?;

        payload.check_invariants(&current)?;
        if let Some(category_id) = payload.category {
            self.require_category(category_id).await?;
        }

        let product = products.update(id, payload).await?;
        tracing::info!(product_id = %product.id, "Product updated");
        self.view(product).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<ProductView> {
        let product = self.uow.products().delete(id).await?;
        tracing::info!(product_id = %product.id, "Product deleted");
        self.view(product).await
    }
}
