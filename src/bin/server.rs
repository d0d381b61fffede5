//! Skywatch HTTP Server Binary
//!
//! This is the main entry point for the skywatch REST API server.
//! It loads the observer site configuration, sets up the HTTP router, and
//! starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin skywatch-server --features http-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `OBSERVER_SITE` / `OBSERVER_LAT` / `OBSERVER_LON` / `OBSERVER_UTC_OFFSET`:
//!   observer site (default: Taipei, 25.03 N, 121.56 E, UTC+8)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use skywatch::config::SiteConfig;
use skywatch::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting skywatch HTTP server");

    // Observer site is fixed for the life of the process
    let site = SiteConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    info!(
        "Observer site: {} ({:.4} deg, {:.4} deg, UTC{:+})",
        site.site_name,
        site.observer.latitude_deg,
        site.observer.longitude_deg,
        site.utc_offset_hours
    );

    // Create application state
    let state = AppState::new(site);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
