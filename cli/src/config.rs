//! Engine configuration resolution
//!
//! Precedence: command-line flags, then the JSON config file, then defaults
//! (seed 1, [`DEFAULT_STATE_LENGTH`], [`DEFAULT_BIT_SPACING`]).
//!
//! [`DEFAULT_STATE_LENGTH`]: rule30_rng::DEFAULT_STATE_LENGTH
//! [`DEFAULT_BIT_SPACING`]: rule30_rng::DEFAULT_BIT_SPACING

use std::fs;
use std::path::Path;

use rule30_rng::EngineConfig;

use crate::error::{CliError, Result};

/// Seed used when neither a file nor a flag provides one
pub const DEFAULT_SEED: u64 = 1;

/// Values given on the command line
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub state_length: Option<usize>,
    pub bit_spacing: Option<usize>,
}

impl Overrides {
    pub fn apply(self, mut config: EngineConfig) -> EngineConfig {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(state_length) = self.state_length {
            config.state_length = state_length;
        }
        if let Some(bit_spacing) = self.bit_spacing {
            config.bit_spacing = bit_spacing;
        }
        config
    }
}

/// Load the config file, or defaults when no path is given
pub fn load(path: Option<&Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::new(DEFAULT_SEED));
    };

    let text = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
