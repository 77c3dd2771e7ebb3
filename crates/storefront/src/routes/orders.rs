//! Order route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ss_stores_core::{OrderId, SessionId, types::money};

use crate::error::{AppError, Result};
use crate::orders::{CustomerInfo, Order, PaymentRequest};
use crate::services::checkout;
use crate::state::AppState;

/// Place order request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub session_id: Option<String>,
    pub customer_info: Option<CustomerInfo>,
    pub payment_info: Option<PaymentRequest>,
}

/// Place order response body: confirmation plus an order summary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponse {
    pub message: &'static str,
    pub order: OrderSummary,
}

/// The subset of the order echoed back at placement time.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: OrderId,
    pub order_number: String,
    #[serde(with = "money::serde_2dp")]
    pub total: Decimal,
    pub estimated_delivery: DateTime<Utc>,
}

/// Place an order from the session's cart.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<PlaceOrderRequest>,
) -> Result<Json<PlaceOrderResponse>> {
    let session_id = SessionId::new(body.session_id.unwrap_or_default());
    let customer_info = body
        .customer_info
        .ok_or_else(|| AppError::Validation("Customer information is required".to_string()))?;
    let payment = body
        .payment_info
        .ok_or_else(|| AppError::Validation("Payment information is required".to_string()))?;

    let order = checkout::place_order(
        state.catalog(),
        state.carts(),
        state.orders(),
        &state.config().pricing,
        &session_id,
        customer_info,
        payment,
    )?;

    Ok(Json(PlaceOrderResponse {
        message: "Order placed successfully",
        order: OrderSummary {
            id: order.id,
            order_number: order.order_number,
            total: order.total,
            estimated_delivery: order.estimated_delivery,
        },
    }))
}

/// Return the full order record.
pub async fn show(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Order>> {
    let order = OrderId::parse(&order_id)
        .ok()
        .and_then(|id| state.orders().get(id))
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

    Ok(Json(order))
}
