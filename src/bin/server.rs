//! TAO HTTP Server Binary
//!
//! This is the main entry point for the TAO REST API server.
//! It initializes the availability source, loads the agent roster, sets up
//! the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the in-memory availability source (default)
//! cargo run --bin tao-server --features "local-source,http-server"
//!
//! # Run against the live availability API
//! TAO_API_TOKEN=... \
//!   cargo run --bin tao-server --features "remote-source,http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `TAO_ROSTER_PATH`: TOML roster file (default: built-in roster)
//! - `TAO_API_BASE_URL` / `TAO_API_TOKEN`: upstream API (remote-source feature)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use tao_rust::api::WorkSchedule;
use tao_rust::http::{create_router, AppState};
use tao_rust::source;

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

    info!("Starting TAO HTTP Server");

    // Availability source selected by the enabled features
    let availability_source =
        source::create_default_source().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    info!("Availability source initialized successfully");

    // Agent roster: file-backed when configured, built-in otherwise
    let roster = match env::var("TAO_ROSTER_PATH") {
        Ok(path) => {
            let agents = source::load_roster(&path)?;
            info!("Loaded {} agents from {}", agents.len(), path);
            agents
        }
        Err(_) => {
            warn!("TAO_ROSTER_PATH not set, using built-in roster");
            source::default_roster()
        }
    };

    // Create application state
    let state = AppState::new(availability_source, roster, WorkSchedule::default());

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
