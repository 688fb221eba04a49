pub mod pages;
mod routes;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::{get, MethodRouter};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::posts::PostStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostStore,
    pub config: Arc<Config>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config, posts: PostStore) -> Self {
        Self {
            posts,
            config: Arc::new(config),
        }
    }
}

/// Start the web server and run until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn serve(config: Config, posts: PostStore) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.web_host, config.web_port)
        .parse()
        .context("Invalid web server address")?;

    let app = create_app(AppState::new(config, posts));

    info!(addr = %addr, "Starting HTTP web server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind web server")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server error")?;

    Ok(())
}

/// Create the main application router.
///
/// Application routes are matched first. Any other path is looked up in the
/// bundle directory, and paths with no matching file get the dashboard as
/// the entry document.
pub fn create_app(state: AppState) -> Router {
    let dist_dir = state.config.dist_dir.clone();
    log_dist_dir(&dist_dir);

    let entry_document: MethodRouter = get(routes::dashboard).with_state(state.clone());

    Router::new()
        .merge(routes::router())
        .fallback_service(ServeDir::new(&dist_dir).fallback(entry_document))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn log_dist_dir(dist_dir: &Path) {
    if dist_dir.is_dir() {
        info!(dist_dir = %dist_dir.display(), "Serving static files");
    } else {
        warn!(dist_dir = %dist_dir.display(), "Static bundle directory not found");
    }
}

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

    info!("Shutting down...");
}
