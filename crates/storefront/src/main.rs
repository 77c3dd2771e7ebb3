//! SS Stores Storefront - Public REST API server.
//!
//! This binary serves the storefront API on port 5000 for the browser
//! client.
//!
//! # Architecture
//!
//! - Axum web framework serving a JSON REST surface
//! - In-memory stores behind [`AppState`]: a catalog generated once at
//!   startup from a seeded RNG, plus cart, order, and review stores
//! - No persistence: all state is process-memory and lost on restart

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ss_stores_storefront::config::StorefrontConfig;
use ss_stores_storefront::state::AppState;
use ss_stores_storefront::{middleware, routes};

#[tokio::main]
async fn main() {
    // Load configuration from environment; invalid configuration is an
    // unrecoverable startup failure
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ss_stores_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build application state; the catalog is generated here, once
    let state = AppState::new(config.clone());
    tracing::info!(
        products = state.catalog().len(),
        seed = config.catalog.seed,
        "Catalog generated"
    );

    // Build router
    let app = routes::routes()
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config))
        .with_state(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// CORS for the browser client: configured origin, credentials allowed.
fn cors_layer(config: &StorefrontConfig) -> CorsLayer {
    let origin = config
        .client_url
        .parse::<HeaderValue>()
        .expect("CLIENT_URL is not a valid origin");

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
