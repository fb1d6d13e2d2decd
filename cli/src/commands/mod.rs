//! Subcommand implementations
//!
//! Each command writes to a caller-supplied [`std::io::Write`] so output can
//! be captured in tests.

pub mod generate;
pub mod state;
