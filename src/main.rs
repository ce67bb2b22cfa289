//! Chat form story server
//!
//! Entry point: loads configuration, initializes logging, and serves the
//! chat story catalog.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use chat_stories::config::AppConfig;
use chat_stories::{AppState, server, stories, telemetry};
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    let config = AppConfig::load_from_args(std::env::args())?;
    telemetry::init(&config.logging);

    info!(
        name: "config.loaded",
        address = %config.server.address(),
        json_logs = config.logging.json,
        "Configuration loaded"
    );

    let state = AppState::new(config, stories::chat::catalog());
    server::start_server(state).await?;
    Ok(())
}
