use std::future::Future;

use axum::Router;
use configs::{AppConfig, StoreBackend};
use service::CustomerService;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Pick the store implementation named by the config.
pub fn build_service(backend: StoreBackend) -> CustomerService {
    match backend {
        StoreBackend::Mutex => CustomerService::in_memory(),
        StoreBackend::Sharded => CustomerService::sharded(),
    }
}

/// Build the application router over a fresh, empty store.
pub fn build_app(backend: StoreBackend) -> Router {
    routes::build_router(ServerState::new(build_service(backend)), build_cors())
}

/// Bind the configured address and serve until Ctrl+C.
/// A bind failure is returned as an error and ends the process.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(cfg.store.backend);
    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;
    info!(%addr, backend = ?cfg.store.backend, "customer store listening");
    serve(listener, app, shutdown_signal()).await
}

/// Serve `app` on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
    }
}
