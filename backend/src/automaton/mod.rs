//! Rule 30 automaton engine
//!
//! A fixed-width ring of boolean cells advanced under Rule 30, with a single-bit
//! output read from the live generation at a configurable stride.
//!
//! # Critical Invariants
//!
//! - `state_length > 0` and `bit_spacing > 0` (validated once, at construction)
//! - `0 <= cursor < bit_capacity` at all times
//! - Guard cells are derived from the real boundary cells, never authoritative
//! - Snapshots are value copies; cells and cursor travel as a pair

mod engine;
mod snapshot;

pub use engine::Rule30Engine;
pub use snapshot::{compact_len, pack_cells, unpack_cells, CompactSnapshot, StateSnapshot};

use thiserror::Error;

/// Broad classification of [`EngineError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Non-positive size or bit spacing
    InvalidConfiguration,
    /// Wrong-length buffer or out-of-range cursor on export/import
    InvalidSnapshot,
}

/// Errors raised by the automaton engine
///
/// Every variant is a caller contract violation reported before any state is
/// mutated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid configuration: state length must be positive")]
    ZeroStateLength,

    #[error("Invalid configuration: bit spacing must be positive")]
    ZeroBitSpacing,

    #[error("Invalid snapshot: expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Invalid snapshot: cursor {cursor} outside [0, {capacity})")]
    CursorOutOfRange { cursor: usize, capacity: usize },
}

impl EngineError {
    /// Which of the two failure classes this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::ZeroStateLength | EngineError::ZeroBitSpacing => {
                ErrorKind::InvalidConfiguration
            }
            EngineError::LengthMismatch { .. } | EngineError::CursorOutOfRange { .. } => {
                ErrorKind::InvalidSnapshot
            }
        }
    }
}
