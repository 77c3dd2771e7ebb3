//! Product review route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use ss_stores_core::ProductId;

use crate::error::{AppError, Result};
use crate::reviews::Review;
use crate::state::AppState;

/// Create review request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub rating: Option<u8>,
    pub comment: Option<String>,
    pub customer_name: Option<String>,
}

/// Create review response body.
#[derive(Debug, Serialize)]
pub struct CreateReviewResponse {
    pub message: &'static str,
    pub review: Review,
}

fn product_id(raw: &str) -> Result<ProductId> {
    raw.parse::<i32>()
        .map(ProductId::new)
        .map_err(|_| AppError::NotFound("Product not found".to_string()))
}

/// Add a review for a product.
pub async fn create(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<CreateReviewRequest>,
) -> Result<Json<CreateReviewResponse>> {
    let product_id = product_id(&id)?;
    if state.catalog().get(product_id).is_none() {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    let rating = body
        .rating
        .ok_or_else(|| AppError::Validation("Rating is required".to_string()))?;

    let review = state
        .reviews()
        .add(product_id, rating, body.comment, body.customer_name);

    Ok(Json(CreateReviewResponse {
        message: "Review added successfully",
        review,
    }))
}

/// List reviews for a product. Unknown products simply have no reviews.
pub async fn list(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Review>>> {
    let product_id = product_id(&id)?;
    Ok(Json(state.reviews().for_product(product_id)))
}
