//! Order records and the append-only order store.
//!
//! Orders are created exactly once per successful checkout (see
//! [`crate::services::checkout`]) and are immutable thereafter: items carry a
//! value snapshot of the resolved product and its unit price at placement
//! time, decoupling historical orders from any later catalog changes.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ss_stores_core::{CartItemId, OrderId, OrderStatus, ProductId, types::money};

use crate::catalog::Product;

/// Customer contact and shipping details, stored as submitted.
///
/// The storefront client collects these fields; the API accepts any subset
/// and performs no validation on the values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Payment details as submitted at checkout.
///
/// Only `method` and `cardNumber` are ever read; expiry, CVV, and cardholder
/// name are deliberately not captured so they cannot be persisted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub method: Option<String>,
    pub card_number: Option<String>,
}

impl PaymentRequest {
    /// Reduce the request to its storable form: the card number, if present,
    /// is cut down to its last 4 digits and then dropped.
    #[must_use]
    pub fn into_stored(self) -> PaymentInfo {
        PaymentInfo {
            method: self.method,
            last4: self.card_number.map(|card| last4(&card)),
        }
    }
}

fn last4(card_number: &str) -> String {
    let digits: Vec<char> = card_number.chars().filter(|c| !c.is_whitespace()).collect();
    digits
        .iter()
        .skip(digits.len().saturating_sub(4))
        .collect()
}

/// Persisted payment details: method and last 4 digits only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// `None` (serialized as `null`) for cardless payment methods.
    pub last4: Option<String>,
}

/// One line of a placed order: the cart line plus its resolved snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: CartItemId,
    pub product_id: ProductId,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub added_at: DateTime<Utc>,
    /// Value copy of the product at placement time.
    pub product: Product,
    /// Unit price at placement time (not at add-to-cart time).
    #[serde(with = "money::serde_2dp")]
    pub price: Decimal,
}

/// A placed order. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub order_number: String,
    pub items: Vec<OrderItem>,
    pub customer_info: CustomerInfo,
    pub payment_info: PaymentInfo,
    #[serde(with = "money::serde_2dp")]
    pub total: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub estimated_delivery: DateTime<Utc>,
}

/// Append-only in-memory order store.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: Mutex<Vec<Order>>,
}

impl OrderStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Order>> {
        self.orders.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a placed order.
    pub fn insert(&self, order: Order) {
        self.lock().push(order);
    }

    /// Look up an order by ID.
    #[must_use]
    pub fn get(&self, id: OrderId) -> Option<Order> {
        self.lock().iter().find(|o| o.id == id).cloned()
    }

    /// All orders, in placement order.
    #[must_use]
    pub fn all(&self) -> Vec<Order> {
        self.lock().clone()
    }

    /// Number of placed orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether any order has been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_last4_of_full_card_number() {
        let stored = PaymentRequest {
            method: Some("credit_card".to_string()),
            card_number: Some("4111 1111 1111 1234".to_string()),
        }
        .into_stored();

        assert_eq!(stored.last4.as_deref(), Some("1234"));
        assert_eq!(stored.method.as_deref(), Some("credit_card"));
    }

    #[test]
    fn test_last4_of_short_input_keeps_everything() {
        let stored = PaymentRequest {
            method: Some("credit_card".to_string()),
            card_number: Some("99".to_string()),
        }
        .into_stored();
        assert_eq!(stored.last4.as_deref(), Some("99"));
    }

    #[test]
    fn test_cardless_method_stores_null_last4() {
        let stored = PaymentRequest {
            method: Some("paypal".to_string()),
            card_number: None,
        }
        .into_stored();

        assert_eq!(stored.last4, None);
        let json = serde_json::to_value(&stored).unwrap();
        assert_eq!(json, serde_json::json!({ "method": "paypal", "last4": null }));
    }

    #[test]
    fn test_store_is_append_only_and_queryable() {
        let store = OrderStore::new();
        assert!(store.is_empty());

        let order = Order {
            id: OrderId::generate(),
            order_number: "SS1700000000000-0A1B".to_string(),
            items: Vec::new(),
            customer_info: CustomerInfo::default(),
            payment_info: PaymentInfo {
                method: Some("paypal".to_string()),
                last4: None,
            },
            total: Decimal::new(5400, 2),
            status: OrderStatus::Confirmed,
            created_at: Utc::now(),
            estimated_delivery: Utc::now(),
        };
        let id = order.id;
        store.insert(order);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(id).unwrap().id, id);
        assert!(store.get(OrderId::generate()).is_none());
    }
}
