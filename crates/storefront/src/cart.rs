//! Session cart store.
//!
//! Maps a client-generated [`SessionId`] to an ordered list of
//! [`CartLineItem`]s. Carts are created lazily on first add and deleted as a
//! whole on successful order placement; there is no expiration.
//!
//! All access goes through one mutex so the multi-step checkout sequence can
//! run inside a single critical section (see [`CartStore::consume_with`]) -
//! the explicit mutual-exclusion boundary that the single-threaded source
//! runtime got implicitly.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;
use ss_stores_core::{CartItemId, ProductId, SessionId};
use thiserror::Error;

/// One product+size+quantity entry within a session's cart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub id: CartItemId,
    pub product_id: ProductId,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub added_at: DateTime<Utc>,
}

/// Cart mutation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CartError {
    /// The session has no cart.
    #[error("Cart not found")]
    CartNotFound,
    /// The cart exists but the line item does not.
    #[error("Cart item not found")]
    ItemNotFound,
}

/// Why [`CartStore::consume_with`] did not consume the cart.
#[derive(Debug)]
pub enum ConsumeError<E> {
    /// The session has no cart entry.
    NoCart,
    /// The closure failed; the cart is untouched.
    Aborted(E),
}

/// In-memory store of session carts.
#[derive(Debug, Default)]
pub struct CartStore {
    carts: Mutex<HashMap<SessionId, Vec<CartLineItem>>>,
}

impl CartStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, Vec<CartLineItem>>> {
        // a poisoned lock only means another request panicked mid-mutation;
        // the map itself is still structurally sound
        self.carts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add `quantity` units of a product to the session's cart, returning the
    /// cart's new line count.
    ///
    /// An existing line with the same (product, size) pair absorbs the
    /// quantity; otherwise a new line is appended with a fresh ID. Product
    /// existence is the caller's concern - the store never sees the catalog.
    pub fn add_item(
        &self,
        session_id: &SessionId,
        product_id: ProductId,
        quantity: u32,
        size: Option<String>,
    ) -> usize {
        let mut carts = self.lock();
        let cart = carts.entry(session_id.clone()).or_default();

        if let Some(line) = cart
            .iter_mut()
            .find(|line| line.product_id == product_id && line.size == size)
        {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            cart.push(CartLineItem {
                id: CartItemId::generate(),
                product_id,
                quantity,
                size,
                added_at: Utc::now(),
            });
        }

        cart.len()
    }

    /// The session's lines in insertion order (empty if no cart exists).
    #[must_use]
    pub fn lines(&self, session_id: &SessionId) -> Vec<CartLineItem> {
        self.lock().get(session_id).cloned().unwrap_or_default()
    }

    /// Replace a line's quantity outright. A quantity of zero or less deletes
    /// the line instead.
    ///
    /// # Errors
    ///
    /// [`CartError::CartNotFound`] if the session has no cart,
    /// [`CartError::ItemNotFound`] if the line does not exist.
    pub fn update_item(
        &self,
        session_id: &SessionId,
        item_id: CartItemId,
        quantity: i64,
    ) -> Result<(), CartError> {
        let mut carts = self.lock();
        let cart = carts.get_mut(session_id).ok_or(CartError::CartNotFound)?;
        let index = cart
            .iter()
            .position(|line| line.id == item_id)
            .ok_or(CartError::ItemNotFound)?;

        if quantity <= 0 {
            cart.remove(index);
        } else if let Some(line) = cart.get_mut(index) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }

        Ok(())
    }

    /// Delete a line from the session's cart.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::update_item`].
    pub fn remove_item(
        &self,
        session_id: &SessionId,
        item_id: CartItemId,
    ) -> Result<(), CartError> {
        let mut carts = self.lock();
        let cart = carts.get_mut(session_id).ok_or(CartError::CartNotFound)?;
        let index = cart
            .iter()
            .position(|line| line.id == item_id)
            .ok_or(CartError::ItemNotFound)?;
        cart.remove(index);
        Ok(())
    }

    /// Run `f` over the session's lines inside the store's critical section,
    /// deleting the cart entry only if `f` succeeds.
    ///
    /// This is the atomicity boundary for order placement: the whole
    /// {read lines → resolve → build order} sequence executes under the lock,
    /// so a concurrent placement or mutation for the same session either sees
    /// the cart before consumption or not at all.
    ///
    /// # Errors
    ///
    /// [`ConsumeError::NoCart`] if the session has no cart entry;
    /// [`ConsumeError::Aborted`] carrying the closure's error, in which case
    /// the cart is left untouched.
    pub fn consume_with<T, E>(
        &self,
        session_id: &SessionId,
        f: impl FnOnce(&[CartLineItem]) -> Result<T, E>,
    ) -> Result<T, ConsumeError<E>> {
        let mut carts = self.lock();
        let Some(lines) = carts.get(session_id) else {
            return Err(ConsumeError::NoCart);
        };

        match f(lines) {
            Ok(value) => {
                carts.remove(session_id);
                Ok(value)
            }
            Err(e) => Err(ConsumeError::Aborted(e)),
        }
    }
}
