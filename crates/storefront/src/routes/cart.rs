//! Cart route handlers.
//!
//! Carts are keyed by a client-generated session ID carried in the request
//! body (mutations) or path (reads). Cart views resolve each line against the
//! catalog at read time, so price changes between add-to-cart and checkout
//! are reflected live.

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ss_stores_core::{CartItemId, SessionId, types::money};
use uuid::Uuid;

use crate::cart::CartLineItem;
use crate::catalog::Product;
use crate::error::{AppError, Result};
use crate::pricing::{self, PricedLine};
use crate::state::AppState;

/// Add to cart request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub session_id: Option<String>,
    pub product_id: Option<i32>,
    pub quantity: Option<u32>,
    pub size: Option<String>,
}

/// Add to cart response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartResponse {
    pub message: &'static str,
    pub cart_count: usize,
}

/// Update cart request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartRequest {
    pub session_id: Option<String>,
    pub item_id: Option<String>,
    pub quantity: Option<i64>,
}

/// Remove from cart request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCartRequest {
    pub session_id: Option<String>,
    pub item_id: Option<String>,
}

/// Plain acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// A cart line joined with its resolved product.
#[derive(Debug, Serialize)]
pub struct CartItemView {
    #[serde(flatten)]
    pub line: CartLineItem,
    pub product: Product,
}

/// Cart view response body.
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub items: Vec<CartItemView>,
    #[serde(with = "money::serde_2dp")]
    pub total: Decimal,
    pub count: usize,
}

/// Parse a line-item ID leniently: an unparseable ID can never match a line,
/// so it surfaces as the same 404 an unknown ID would.
fn parse_item_id(raw: Option<&str>) -> CartItemId {
    raw.and_then(|s| CartItemId::parse(s).ok())
        .unwrap_or_else(|| CartItemId::new(Uuid::nil()))
}

/// Add an item to the session's cart.
///
/// Creates the cart lazily on first add. Merges into an existing line with
/// the same (product, size); no stock check is performed - stock is
/// display-only metadata.
pub async fn add(
    State(state): State<AppState>,
    Json(body): Json<AddToCartRequest>,
) -> Result<Json<AddToCartResponse>> {
    let missing = || {
        AppError::Validation("Session ID and Product ID are required".to_string())
    };
    let session_id = body
        .session_id
        .filter(|s| !s.is_empty())
        .ok_or_else(missing)?;
    let product_id = body.product_id.filter(|id| *id != 0).ok_or_else(missing)?;

    let product = state
        .catalog()
        .get(product_id.into())
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    let quantity = body.quantity.unwrap_or(1).max(1);
    let cart_count =
        state
            .carts()
            .add_item(&SessionId::new(session_id), product.id, quantity, body.size);

    Ok(Json(AddToCartResponse {
        message: "Product added to cart",
        cart_count,
    }))
}

/// Return the session's cart with resolved products and the running total.
pub async fn show(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<CartResponse>> {
    let lines = state.carts().lines(&SessionId::new(session_id));

    let mut items = Vec::with_capacity(lines.len());
    for line in lines {
        // a line that no longer resolves fails the whole request; the cart
        // itself is left as-is
        let product = state
            .catalog()
            .get(line.product_id)
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?
            .clone();
        items.push(CartItemView { line, product });
    }

    let total = pricing::subtotal(items.iter().map(|item| PricedLine {
        unit_price: item.product.price,
        quantity: item.line.quantity,
    }));

    Ok(Json(CartResponse {
        count: items.len(),
        total,
        items,
    }))
}

/// Replace a line's quantity; zero or less deletes the line.
pub async fn update(
    State(state): State<AppState>,
    Json(body): Json<UpdateCartRequest>,
) -> Result<Json<MessageResponse>> {
    let quantity = body
        .quantity
        .ok_or_else(|| AppError::Validation("Quantity is required".to_string()))?;
    let session_id = SessionId::new(body.session_id.unwrap_or_default());
    let item_id = parse_item_id(body.item_id.as_deref());

    state.carts().update_item(&session_id, item_id, quantity)?;

    Ok(Json(MessageResponse {
        message: "Cart updated successfully",
    }))
}

/// Delete a line from the session's cart.
pub async fn remove(
    State(state): State<AppState>,
    Json(body): Json<RemoveFromCartRequest>,
) -> Result<Json<MessageResponse>> {
    let session_id = SessionId::new(body.session_id.unwrap_or_default());
    let item_id = parse_item_id(body.item_id.as_deref());

    state.carts().remove_item(&session_id, item_id)?;

    Ok(Json(MessageResponse {
        message: "Item removed from cart",
    }))
}
