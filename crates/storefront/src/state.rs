//! Application state shared across handlers.

use std::sync::Arc;

use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::orders::OrderStore;
use crate::reviews::ReviewStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the in-memory stores. Stores live here rather than as
/// module-level singletons so tests can build isolated instances.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    carts: CartStore,
    orders: OrderStore,
    reviews: ReviewStore,
}

impl AppState {
    /// Create application state, generating the catalog from the configured
    /// seed.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = Catalog::generate(config.catalog.seed, config.catalog.products_per_category);
        Self::with_catalog(config, catalog)
    }

    /// Create application state around a pre-built catalog (used by tests).
    #[must_use]
    pub fn with_catalog(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                carts: CartStore::new(),
                orders: OrderStore::new(),
                reviews: ReviewStore::new(),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn carts(&self) -> &CartStore {
        &self.inner.carts
    }

    /// Get a reference to the order store.
    #[must_use]
    pub fn orders(&self) -> &OrderStore {
        &self.inner.orders
    }

    /// Get a reference to the review store.
    #[must_use]
    pub fn reviews(&self) -> &ReviewStore {
        &self.inner.reviews
    }
}
