//! Product reviews: append-only, queryable per product.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;
use ss_stores_core::{ProductId, ReviewId};

/// A customer review for a product.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// In-memory review store.
#[derive(Debug, Default)]
pub struct ReviewStore {
    reviews: Mutex<Vec<Review>>,
}

impl ReviewStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Review>> {
        self.reviews.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a review for a product and return the stored record.
    pub fn add(
        &self,
        product_id: ProductId,
        rating: u8,
        comment: Option<String>,
        customer_name: Option<String>,
    ) -> Review {
        let review = Review {
            id: ReviewId::generate(),
            product_id,
            rating,
            comment,
            customer_name,
            created_at: Utc::now(),
        };
        self.lock().push(review.clone());
        review
    }

    /// All reviews for a product, oldest first.
    #[must_use]
    pub fn for_product(&self, product_id: ProductId) -> Vec<Review> {
        self.lock()
            .iter()
            .filter(|r| r.product_id == product_id)
            .cloned()
            .collect()
    }
}
