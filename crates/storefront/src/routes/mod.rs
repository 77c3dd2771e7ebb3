//! HTTP route handlers for the storefront REST API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /api/health                    - Health check
//!
//! # Products
//! GET    /api/products                  - Product listing (filter/sort/paginate)
//! GET    /api/products/featured         - Featured products
//! GET    /api/products/{id}             - Product detail + related products
//! GET    /api/products/{id}/reviews     - Reviews for a product
//! POST   /api/products/{id}/reviews     - Add a review
//! GET    /api/categories                - Distinct categories
//!
//! # Cart
//! POST   /api/cart/add                  - Add item (merges equal product+size)
//! GET    /api/cart/{sessionId}          - Cart with resolved products
//! PUT    /api/cart/update               - Replace a line's quantity
//! DELETE /api/cart/remove               - Delete a line
//!
//! # Orders
//! POST   /api/orders                    - Place order from the session cart
//! GET    /api/orders/{orderId}          - Full order record
//!
//! # Admin (thin reads)
//! GET    /api/admin/products            - Full catalog
//! GET    /api/admin/orders              - All placed orders
//! ```

pub mod admin;
pub mod cart;
pub mod orders;
pub mod products;
pub mod reviews;

use axum::{
    Json, Router,
    routing::{delete, get, post, put},
};
use serde::Serialize;

use crate::state::AppState;

/// Health check response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Health check endpoint.
///
/// Returns OK if the server is running. There are no external dependencies
/// to probe - all stores are process-memory.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "SS Stores API is running",
    })
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/featured", get(products::featured))
        .route("/{id}", get(products::show))
        .route("/{id}/reviews", get(reviews::list).post(reviews::create))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/update", put(cart::update))
        .route("/remove", delete(cart::remove))
        .route("/{session_id}", get(cart::show))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(orders::create))
        .route("/{order_id}", get(orders::show))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(admin::products))
        .route("/orders", get(admin::orders))
}

/// Create all routes for the storefront API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/categories", get(products::categories))
        .nest("/api/products", product_routes())
        .nest("/api/cart", cart_routes())
        .nest("/api/orders", order_routes())
        .nest("/api/admin", admin_routes())
}
