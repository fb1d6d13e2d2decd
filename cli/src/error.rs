//! CLI error type

use std::path::PathBuf;

use rule30_rng::{EngineError, SamplingError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Sampling error: {0}")]
    Sampling(#[from] SamplingError),

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
