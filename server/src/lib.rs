//! Read-only data service for the abyss client: CSV sources in, JSON out.

pub mod config;
pub mod records;
pub mod routes;
pub mod world;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{info, warn};

pub use config::ServerConfig;
pub use world::WorldState;

pub fn build_router(world: Arc<WorldState>, static_dir: &Path) -> Router {
    // Unknown paths get the client's index.html so client-side routes resolve.
    let client = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/api/health", get(routes::health))
        .route("/api/gamestate", get(routes::gamestate))
        .route("/api/corals", get(routes::corals))
        .route("/api/hazards", get(routes::hazards))
        .route("/api/poi", get(routes::pois))
        .fallback_service(client)
        .with_state(world)
        .layer(CorsLayer::permissive())
}

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    serve_listener(listener, &config, shutdown_signal()).await
}

pub async fn serve_listener(
    listener: tokio::net::TcpListener,
    config: &ServerConfig,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let world = Arc::new(WorldState::load(&config.data_dir, config.terrain_seed));
    let app = build_router(world, &config.static_dir);
    let addr = listener.local_addr()?;
    info!(%addr, static_dir = %config.static_dir.display(), "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("ctrl-c received, shutting down"),
        Err(e) => {
            warn!(error = %e, "cannot listen for ctrl-c; running until killed");
            std::future::pending::<()>().await
        }
    }
}
