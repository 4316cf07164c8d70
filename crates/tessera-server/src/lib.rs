//! HTTP server for Tessera sites.
//!
//! This crate serves configured pages as full HTML documents and exposes a
//! small API for editors:
//! - `GET /` and `GET /{*path}`: rendered pages with `ETag` revalidation
//! - `GET /api/config/check`: configuration status for change polling
//! - `GET /api/registry`: registered section types, or page data by slug
//! - `POST /api/validate`: section validation and health report
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use tessera_sections::RenderMode;
//! use tessera_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_owned(),
//!         port: 7878,
//!         config_dir: PathBuf::from("config"),
//!         mode: RenderMode::Development,
//!         version: "1.0.0".to_owned(),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use tessera_sections::RenderMode;
use tessera_site::Site;

pub use error::ServerError;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory holding `config.yaml` or `config.json`.
    pub config_dir: PathBuf,
    /// Render mode.
    pub mode: RenderMode,
    /// Application version (for cache invalidation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
            config_dir: PathBuf::from("config"),
            mode: RenderMode::default(),
            version: String::new(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid or the listener cannot bind.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let site = Site::new(config.config_dir.clone(), config.mode);
    if !site.status().exists {
        tracing::warn!(
            dir = %config.config_dir.display(),
            "No configuration yet, serving the fallback page until one appears"
        );
    }

    let state = Arc::new(AppState {
        site,
        version: config.version.clone(),
    });
    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, mode = %config.mode, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from Tessera config.
#[must_use]
pub fn server_config_from_config(config: &tessera_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        config_dir: config.site_resolved.config_dir.clone(),
        mode: config.site_resolved.mode,
        version,
    }
}
