use std::path::PathBuf;

use crate::model::DeviceRecord;

/// Where a fleet snapshot comes from. The engine never cares: it sees a
/// plain record collection loaded once at startup, whether that came from a
/// real collector export or the synthetic generator in `dev_tools`.
pub trait RecordSource {
    fn load(&self) -> Result<Vec<DeviceRecord>, SourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read fleet data: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse fleet data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Loads a snapshot from a JSON array of records, the shape a collector
/// export produces.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonFileSource {
    fn load(&self) -> Result<Vec<DeviceRecord>, SourceError> {
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
