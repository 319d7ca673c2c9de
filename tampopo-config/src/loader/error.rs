use super::super::validation::ConfigGuardRailError;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read interaction config from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid interaction config {origin}: {reason}")]
    Parse { origin: String, reason: String },
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
}
