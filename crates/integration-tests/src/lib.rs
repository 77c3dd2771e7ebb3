//! Integration tests for SS Stores.
//!
//! These tests drive the storefront router in-process with
//! `tower::ServiceExt::oneshot` - no listening socket, no external services.
//! Every test gets a fresh [`AppState`], so tests are isolated and can run in
//! parallel.
//!
//! # Test Categories
//!
//! - `products_api` - Catalog listing, detail, categories, reviews, admin
//! - `cart_api` - Cart mutations and the resolved cart view
//! - `checkout_api` - Order placement and retrieval

#![cfg_attr(not(test), forbid(unsafe_code))]
// Test support code: panicking on malformed fixtures is the desired behavior
#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use ss_stores_storefront::catalog::{Catalog, Category, Product};
use ss_stores_storefront::config::{CatalogConfig, StorefrontConfig};
use ss_stores_storefront::pricing::PricingPolicy;
use ss_stores_storefront::routes;
use ss_stores_storefront::state::AppState;

/// Small deterministic configuration for tests.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        client_url: "http://localhost:3000".to_string(),
        pricing: PricingPolicy::default(),
        catalog: CatalogConfig {
            seed: 7,
            products_per_category: 10,
        },
    }
}

/// A router over a fresh state with the default test catalog (70 products).
#[must_use]
pub fn app() -> Router {
    routes::routes().with_state(AppState::new(test_config()))
}

/// A router over a fresh state with a caller-supplied catalog.
#[must_use]
pub fn app_with_catalog(catalog: Catalog) -> Router {
    routes::routes().with_state(AppState::with_catalog(test_config(), catalog))
}

/// A minimal product record for hand-built catalogs.
#[must_use]
pub fn test_product(id: i32, price: &str) -> Product {
    Product {
        id: id.into(),
        title: format!("Test Product {id}"),
        category: Category::Menswear,
        category_name: "Menswear".to_string(),
        brand: "TestBrand".to_string(),
        color: "Black".to_string(),
        price: price.parse().unwrap(),
        original_price: price.parse().unwrap(),
        discount: 0,
        description: "A product used by tests.".to_string(),
        image: "/images/menswear/t-shirt-1.jpg".to_string(),
        images: Vec::new(),
        stock: 10,
        in_stock: true,
        rating: 4.5,
        reviews: 12,
        tags: vec!["test".to_string()],
        sizes: vec!["M".to_string()],
        featured: false,
        new_arrival: false,
        bestseller: false,
    }
}

/// Send a request with an optional JSON body and return (status, JSON body).
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}
