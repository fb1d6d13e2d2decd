//! Engine configuration
//!
//! All three parameters are fixed for the lifetime of an engine:
//!
//! * `seed` - drives the entire output sequence (0 is treated as 1)
//! * `state_length` - automaton width; trades memory for mixing quality
//! * `bit_spacing` - output stride; trades decorrelation for advance frequency
//!
//! Odd state lengths are recommended: the alternating pattern `0101...` is a
//! fixed point of Rule 30 on an even-width ring.

use serde::{Deserialize, Serialize};

use crate::automaton::EngineError;

/// Default automaton width
pub const DEFAULT_STATE_LENGTH: usize = 255;

/// Default output stride
pub const DEFAULT_BIT_SPACING: usize = 8;

/// Construction parameters for [`crate::Rule30Engine`]
///
/// # Example
/// ```
/// use rule30_rng::{EngineConfig, Rule30Engine};
///
/// let config: EngineConfig = serde_json::from_str(r#"{"seed": 12345, "size": 127}"#).unwrap();
/// assert_eq!(config.state_length, 127);
/// assert_eq!(config.bit_spacing, 8);
///
/// let engine = Rule30Engine::from_config(&config).unwrap();
/// assert_eq!(engine.state_length(), 127);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for the automaton
    pub seed: u64,

    /// Number of real cells in the ring
    #[serde(default = "default_state_length", alias = "size")]
    pub state_length: usize,

    /// Cells between successive output positions
    #[serde(default = "default_bit_spacing")]
    pub bit_spacing: usize,
}

fn default_state_length() -> usize {
    DEFAULT_STATE_LENGTH
}

fn default_bit_spacing() -> usize {
    DEFAULT_BIT_SPACING
}

impl EngineConfig {
    /// Config with the given seed and default dimensions
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            state_length: DEFAULT_STATE_LENGTH,
            bit_spacing: DEFAULT_BIT_SPACING,
        }
    }

    pub fn with_state_length(mut self, state_length: usize) -> Self {
        self.state_length = state_length;
        self
    }

    pub fn with_bit_spacing(mut self, bit_spacing: usize) -> Self {
        self.bit_spacing = bit_spacing;
        self
    }

    /// Check the dimensions without building an engine
    ///
    /// # Errors
    /// [`EngineError::ZeroStateLength`] or [`EngineError::ZeroBitSpacing`].
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.state_length == 0 {
            return Err(EngineError::ZeroStateLength);
        }
        if self.bit_spacing == 0 {
            return Err(EngineError::ZeroBitSpacing);
        }
        Ok(())
    }
}
