//! Application composition and server startup
//!
//! The store implementation is selected here, once, from configuration;
//! everything downstream depends only on the `ImageStore` capability.

use std::sync::Arc;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use galleria_core::{Config, StoreMode};
use galleria_store::{ImageStore, InMemoryStore, RemoteStore};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

// Headroom on top of the file size limit for the other multipart fields.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Compose the application state for the configured store mode.
pub fn build_state(config: &Config) -> Result<AppState> {
    let store: Arc<dyn ImageStore> = match config.store_mode() {
        StoreMode::Memory => {
            tracing::info!("Using in-memory store with seeded fixture data");
            Arc::new(InMemoryStore::seeded())
        }
        StoreMode::Remote => {
            let url = config
                .remote_url()
                .ok_or_else(|| anyhow::anyhow!("Remote store mode requires a remote URL"))?;
            tracing::info!(url = %url, "Using remote store");
            Arc::new(RemoteStore::new(url)?)
        }
    };

    Ok(AppState::new(config, store))
}

/// Setup all application routes
pub fn build_router(config: &Config, state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health))
        .route("/images", get(handlers::images::list_images))
        .route("/images/upload", post(handlers::images::upload_image))
        .route(
            "/images/{id}",
            get(handlers::images::get_image)
                .put(handlers::images::update_image)
                .delete(handlers::images::delete_image),
        )
        .route(
            "/images/{id}/related",
            get(handlers::images::list_related_images),
        )
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/docs"))
        .layer(TraceLayer::new_for_http())
        .layer(setup_cors(config))
        // The configured limit replaces axum's built-in 2 MB body cap.
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(
            config.max_file_size_bytes() + MULTIPART_OVERHEAD_BYTES,
        ))
}

fn setup_cors(config: &Config) -> CorsLayer {
    if config.cors_origins().is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins()
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Start the server with graceful shutdown
pub async fn start_server(config: &Config, app: Router) -> Result<()> {
    let addr = format!("0.0.0.0:{}", config.server_port());
    tracing::info!(addr = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    let max_file_mb = config.max_file_size_bytes() / 1024 / 1024;
    tracing::info!(
        store_mode = ?config.store_mode(),
        max_file_mb,
        "Server ready and accepting connections"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Signal handler for graceful shutdown
///
/// Listens for Ctrl+C (SIGINT) and SIGTERM signals to initiate graceful shutdown.
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
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received terminate signal");
        },
    }

    tracing::info!("Shutting down gracefully...");
}
