//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::catalog::{CategorySummary, Product, ProductFilter, SortOrder};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Product listing query parameters.
///
/// Everything arrives as optional strings and is parsed leniently: an
/// unparseable number or unknown sort key falls back to the default rather
/// than failing the request, matching the original API's tolerance.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub brand: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ProductListQuery {
    fn into_filter(self) -> ProductFilter {
        ProductFilter {
            category: self.category,
            search: self.search,
            min_price: self.min_price.and_then(|s| s.parse().ok()),
            max_price: self.max_price.and_then(|s| s.parse().ok()),
            brand: self.brand,
            sort: self.sort.as_deref().and_then(SortOrder::parse),
            page: self.page.and_then(|s| s.parse().ok()),
            limit: self.limit.and_then(|s| s.parse().ok()),
        }
    }
}

/// Product listing response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub total_products: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// Product detail response: the product plus related products.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailResponse {
    #[serde(flatten)]
    pub product: Product,
    pub related_products: Vec<Product>,
}

/// List products with filtering, sorting, and pagination.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Json<ProductListResponse> {
    let page = state.catalog().search(&query.into_filter());

    Json(ProductListResponse {
        products: page.products.into_iter().cloned().collect(),
        total_products: page.total_products,
        total_pages: page.total_pages,
        current_page: page.current_page,
        has_next_page: page.has_next_page,
        has_prev_page: page.has_prev_page,
    })
}

/// Show a single product with up to 4 related products from its category.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductDetailResponse>> {
    let product = id
        .parse::<i32>()
        .ok()
        .and_then(|id| state.catalog().get(id.into()))
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    let related_products = state
        .catalog()
        .related(product)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(ProductDetailResponse {
        product: product.clone(),
        related_products,
    }))
}

/// List featured products.
pub async fn featured(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog().featured().into_iter().cloned().collect())
}

/// List the distinct product categories.
pub async fn categories(State(state): State<AppState>) -> Json<Vec<CategorySummary>> {
    Json(state.catalog().categories())
}
