use std::path::PathBuf;

use anyhow::Context;

/// Runtime settings, all supplied through the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server binds on. `ROOMLYTICS_PORT`, default 3000.
    pub port: u16,
    /// Path to a JSON fleet export. `FLEET_DATA`; when unset a synthetic
    /// fleet is generated instead.
    pub fleet_data: Option<PathBuf>,
    /// Fixed seed for the synthetic fleet. `FLEET_SEED`; unset means a fresh
    /// fleet per run.
    pub generator_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("ROOMLYTICS_PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid ROOMLYTICS_PORT: {raw}"))?,
            Err(_) => 3000,
        };
        let fleet_data = std::env::var("FLEET_DATA").ok().map(PathBuf::from);
        let generator_seed = match std::env::var("FLEET_SEED") {
            Ok(raw) => Some(
                raw.parse()
                    .with_context(|| format!("invalid FLEET_SEED: {raw}"))?,
            ),
            Err(_) => None,
        };
        Ok(Self {
            port,
            fleet_data,
            generator_seed,
        })
    }
}
