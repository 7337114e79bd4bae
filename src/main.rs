use std::net::SocketAddr;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use roomlytics::config::Config;
use roomlytics::dev_tools::FleetGenerator;
use roomlytics::source::{JsonFileSource, RecordSource};
use roomlytics::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Roomlytics server...");

    let config = Config::from_env()?;

    // The snapshot is loaded exactly once; everything downstream treats it
    // as read-only for the life of the process.
    let fleet = match &config.fleet_data {
        Some(path) => JsonFileSource::new(path)
            .load()
            .with_context(|| format!("loading fleet snapshot from {}", path.display()))?,
        None => {
            info!("FLEET_DATA not set, generating a synthetic fleet");
            let generator = match config.generator_seed {
                Some(seed) => FleetGenerator::seeded(seed),
                None => FleetGenerator::new(),
            };
            generator.load()?
        }
    };
    info!("Loaded {} device records", fleet.len());

    let state = AppState::new(fleet);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
