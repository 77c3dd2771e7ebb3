//! Admin route handlers: thin reads over the stores for the dashboard.

use axum::{Json, extract::State};

use crate::catalog::Product;
use crate::orders::Order;
use crate::state::AppState;

/// Full catalog dump.
pub async fn products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog().all().to_vec())
}

/// All placed orders.
pub async fn orders(State(state): State<AppState>) -> Json<Vec<Order>> {
    Json(state.orders().all())
}
