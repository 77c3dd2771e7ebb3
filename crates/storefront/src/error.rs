//! Unified request error handling.
//!
//! Provides a unified `AppError` type mapped to HTTP statuses and the
//! `{ "error": message }` JSON body the storefront client expects. All route
//! handlers return `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::cart::CartError;
use crate::services::checkout::CheckoutError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required request field is missing or malformed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found (product, cart, cart item, order).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Checkout was attempted against a missing or empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CartError> for AppError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::CartNotFound => Self::NotFound("Cart not found".to_string()),
            CartError::ItemNotFound => Self::NotFound("Cart item not found".to_string()),
        }
    }
}

impl From<CheckoutError> for AppError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::EmptyCart => Self::EmptyCart,
            CheckoutError::ProductNotFound(_) => Self::NotFound("Product not found".to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Internal(_)) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::Validation(_) | Self::EmptyCart => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match self {
            Self::Internal(_) => "Internal server error".to_string(),
            Self::Validation(msg) | Self::NotFound(msg) => msg,
            Self::EmptyCart => "Cart is empty".to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
