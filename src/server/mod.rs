//! HTTP surface.
//!
//! | Route | Method | Body | Response |
//! |-------|--------|------|----------|
//! | `/optimize` | POST | `[ServiceBoundary]` | `OptimizationResult` |
//! | `/health` | GET | `[ServiceBoundary]` | `{ "metrics": [ServiceHealth] }` |
//!
//! Every response is JSON. Errors are `{ "error": "..." }` with 400 for
//! malformed or invalid bodies, 404 for unknown paths, 405 for a known path
//! with the wrong method and 500 for internal failures.

mod error;
pub mod handlers;

use crate::optimizer::Optimizer;
use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub use error::ApiError;

pub fn router(optimizer: Arc<Optimizer>) -> Router {
    Router::new()
        .route(
            "/optimize",
            post(handlers::optimize).fallback(handlers::method_not_allowed),
        )
        .route(
            "/health",
            get(handlers::health).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .with_state(optimizer)
        .layer(CatchPanicLayer::custom(handlers::handle_panic))
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(optimizer: Arc<Optimizer>, addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Listening on {}", addr);

    axum::serve(listener, router(optimizer))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server shutting down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
