//! Application builder and server lifecycle.

use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use roster_core::config::AppConfig;
use roster_core::error::{AppError, ErrorKind};
use roster_database::StoreHandle;

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Serves the roster API until Ctrl+C or SIGTERM, then drains in-flight
/// requests for at most `server.shutdown_grace_seconds`.
pub async fn run_server(config: AppConfig, store: StoreHandle) -> Result<(), AppError> {
    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let state = AppState::new(config, store.clone());
    let app = build_app(state);

    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;
    info!(address = %addr, "Roster API listening");

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        let _ = shutdown_rx.changed().await;
    });
    let mut server_task = tokio::spawn(async move { server.await });

    let outcome = tokio::select! {
        joined = &mut server_task => Some(joined),
        _ = shutdown_signal() => None,
    };

    let joined = match outcome {
        Some(joined) => joined,
        None => {
            info!("Shutdown signal received, draining connections...");
            let _ = shutdown_tx.send(true);
            match tokio::time::timeout(grace, server_task).await {
                Ok(joined) => joined,
                Err(_) => {
                    warn!(grace_seconds = grace.as_secs(), "Shutdown grace period elapsed");
                    store.close().await;
                    return Ok(());
                }
            }
        }
    };

    store.close().await;

    match joined {
        Ok(Ok(())) => {
            info!("Roster API shut down gracefully");
            Ok(())
        }
        Ok(Err(e)) => Err(AppError::with_source(ErrorKind::Internal, "Server error", e)),
        Err(e) => Err(AppError::with_source(
            ErrorKind::Internal,
            "Server task failed",
            e,
        )),
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
