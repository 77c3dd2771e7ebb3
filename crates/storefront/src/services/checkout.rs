//! Order placement: the cart → order state transition.
//!
//! A cart with at least one line is a draft order; placement resolves every
//! line against the catalog, snapshots prices, derives the total, appends the
//! order, and deletes the cart. There is no cancelled or failed-payment
//! state - payment is accepted as submitted.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use ss_stores_core::{OrderId, OrderStatus, ProductId, SessionId};
use thiserror::Error;

use crate::cart::{CartStore, ConsumeError};
use crate::catalog::Catalog;
use crate::orders::{CustomerInfo, Order, OrderItem, OrderStore, PaymentRequest};
use crate::pricing::{self, PricedLine, PricingPolicy};

/// Days added to the placement timestamp for the delivery estimate.
const DELIVERY_DAYS: i64 = 7;

/// Order placement failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// The session has no cart or the cart has no lines.
    #[error("Cart is empty")]
    EmptyCart,
    /// A cart line references a product the catalog cannot resolve.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
}

/// Convert the session's cart into an immutable order.
///
/// The whole sequence {read cart → resolve products → compute total → build
/// order} runs inside the cart store's critical section via
/// [`CartStore::consume_with`]; the cart entry is deleted only when the order
/// has been built, so a failing placement leaves the cart untouched and two
/// concurrent placements for one session cannot both succeed.
///
/// # Errors
///
/// [`CheckoutError::EmptyCart`] if the session has no cart or no lines;
/// [`CheckoutError::ProductNotFound`] if any line fails to resolve.
pub fn place_order(
    catalog: &Catalog,
    carts: &CartStore,
    orders: &OrderStore,
    policy: &PricingPolicy,
    session_id: &SessionId,
    customer_info: CustomerInfo,
    payment: PaymentRequest,
) -> Result<Order, CheckoutError> {
    let order = carts
        .consume_with(session_id, |lines| {
            if lines.is_empty() {
                return Err(CheckoutError::EmptyCart);
            }

            let items = lines
                .iter()
                .map(|line| {
                    let product = catalog
                        .get(line.product_id)
                        .ok_or(CheckoutError::ProductNotFound(line.product_id))?;
                    Ok(OrderItem {
                        id: line.id,
                        product_id: line.product_id,
                        quantity: line.quantity,
                        size: line.size.clone(),
                        added_at: line.added_at,
                        product: product.clone(),
                        price: product.price,
                    })
                })
                .collect::<Result<Vec<_>, CheckoutError>>()?;

            let quote = pricing::quote(
                policy,
                items.iter().map(|item| PricedLine {
                    unit_price: item.price,
                    quantity: item.quantity,
                }),
            );

            let created_at = Utc::now();
            Ok(Order {
                id: OrderId::generate(),
                order_number: order_number(created_at),
                items,
                customer_info,
                payment_info: payment.into_stored(),
                total: quote.grand_total,
                status: OrderStatus::Confirmed,
                created_at,
                estimated_delivery: created_at + Duration::days(DELIVERY_DAYS),
            })
        })
        .map_err(|e| match e {
            ConsumeError::NoCart => CheckoutError::EmptyCart,
            ConsumeError::Aborted(inner) => inner,
        })?;

    orders.insert(order.clone());
    Ok(order)
}

/// Human-readable order number: `SS` + millisecond timestamp + random suffix.
///
/// The timestamp alone can collide when two orders land in the same
/// millisecond; the suffix keeps numbers unique without giving up
/// readability.
fn order_number(created_at: DateTime<Utc>) -> String {
    let suffix: u16 = rand::rng().random();
    format!("SS{}-{suffix:04X}", created_at.timestamp_millis())
}
