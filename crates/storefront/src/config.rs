//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 5000)
//! - `CLIENT_URL` - Allowed CORS origin (default: <http://localhost:3000>)
//! - `FREE_SHIPPING_THRESHOLD` - Subtotal at which shipping is free (default: 50)
//! - `SHIPPING_FLAT_FEE` - Flat shipping fee below the threshold (default: 5.99)
//! - `TAX_RATE` - Tax rate applied to the subtotal (default: 0.08)
//! - `CATALOG_SEED` - RNG seed for catalog generation (default: 42)
//! - `CATALOG_PRODUCTS_PER_CATEGORY` - Products generated per category
//!   (default: 214)

use std::net::{IpAddr, SocketAddr};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::pricing::PricingPolicy;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Allowed CORS origin for the browser client
    pub client_url: String,
    /// Shipping/tax policy applied to cart previews and placed orders
    pub pricing: PricingPolicy,
    /// Catalog generation parameters
    pub catalog: CatalogConfig,
}

/// Catalog generation configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Seed for the deterministic product generator
    pub seed: u64,
    /// Number of products generated per category
    pub products_per_category: u32,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed
    /// or describes a negative monetary amount.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_env("STOREFRONT_HOST", "127.0.0.1")?;
        let port = parse_env("STOREFRONT_PORT", "5000")?;
        let client_url = get_env_or_default("CLIENT_URL", "http://localhost:3000");

        let pricing = PricingPolicy {
            free_shipping_threshold: parse_amount("FREE_SHIPPING_THRESHOLD", "50")?,
            shipping_flat_fee: parse_amount("SHIPPING_FLAT_FEE", "5.99")?,
            tax_rate: parse_amount("TAX_RATE", "0.08")?,
        };

        let catalog = CatalogConfig {
            seed: parse_env("CATALOG_SEED", "42")?,
            products_per_category: parse_env("CATALOG_PRODUCTS_PER_CATEGORY", "214")?,
        };

        Ok(Self {
            host,
            port,
            client_url,
            pricing,
            catalog,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get an environment variable (or its default) parsed to `T`.
fn parse_env<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(key, default)
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse a non-negative monetary amount or rate from the environment.
fn parse_amount(key: &str, default: &str) -> Result<Decimal, ConfigError> {
    let amount: Decimal = parse_env(key, default)?;
    if amount.is_sign_negative() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must not be negative (got {amount})"),
        ));
    }
    Ok(amount)
}
