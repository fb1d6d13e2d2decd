//! Rule 30 RNG - Deterministic Bit Generator
//!
//! Pseudorandom bits from the Rule 30 elementary cellular automaton, with
//! bit-identical output for identical seeds on every platform.
//!
//! # Architecture
//!
//! - **automaton**: Rule 30 engine, snapshots, compact packing
//! - **rng**: Single-bit contract and the platform-backed adapter
//! - **sampling**: Bytes, words, bounded integers and floats built from bits
//! - **config**: Construction parameters
//!
//! # Critical Invariants
//!
//! 1. Same `(seed, state_length, bit_spacing)` → same bit sequence
//! 2. Seed 0 behaves exactly like seed 1
//! 3. Restoring a snapshot (cells + cursor) resumes the stream bit for bit
//!
//! Rule 30 output is NOT cryptographically secure.
//!
//! # Example
//! ```
//! use rule30_rng::{BitSampler, Rule30Engine};
//!
//! let mut engine = Rule30Engine::new(12345, 255, 8).unwrap();
//! let checkpoint = engine.compact_snapshot();
//!
//! let first = engine.sample_u64();
//! engine.restore_compact(&checkpoint).unwrap();
//! assert_eq!(engine.sample_u64(), first);
//! ```

// Module declarations
pub mod automaton;
pub mod config;
pub mod rng;
pub mod sampling;

// Re-exports for convenience
pub use automaton::{
    compact_len, pack_cells, unpack_cells, CompactSnapshot, EngineError, ErrorKind, Rule30Engine,
    StateSnapshot,
};
pub use config::{EngineConfig, DEFAULT_BIT_SPACING, DEFAULT_STATE_LENGTH};
pub use rng::{BitSource, PlatformBitSource};
pub use sampling::{BitSampler, SamplingError, MAX_REJECTION_ATTEMPTS};
