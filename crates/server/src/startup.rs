use anyhow::Context;
use axum::Router;
use configs::AppConfig;
use service::storage::Storage;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Router over an already opened store.
pub fn build_app(storage: &Storage) -> Router {
    routes::build_router(AppState::from_storage(storage), build_cors())
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
pub(crate) async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, draining connections"),
        _ = terminate => info!("received SIGTERM, draining connections"),
    }
}

/// Public entry: open the store, serve until Ctrl+C, then release the store.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let storage = Storage::connect(&cfg.database)
        .await
        .context("connecting to the record store")?;
    info!(backend = storage.kind(), "connected to record store");

    let app = build_app(&storage);

    let (host, port) = (cfg.server.host.as_str(), cfg.server.port);
    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("binding {host}:{port}"))?;
    info!(addr = %listener.local_addr()?, "server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    storage.close().await.context("closing the record store")?;
    info!("record store closed");
    Ok(())
}
