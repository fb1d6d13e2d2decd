//! Snapshot dump command

use std::io::Write;

use rule30_rng::Rule30Engine;
use tracing::info;

use crate::error::Result;

/// Draw `skip` bits, then print the engine snapshot as pretty JSON
pub fn run<W: Write>(
    engine: &mut Rule30Engine,
    skip: usize,
    full: bool,
    out: &mut W,
) -> Result<()> {
    for _ in 0..skip {
        engine.next_bit();
    }
    info!(skip, cursor = engine.cursor(), full, "dumping engine state");

    let json = if full {
        serde_json::to_string_pretty(&engine.snapshot())?
    } else {
        serde_json::to_string_pretty(&engine.compact_snapshot())?
    };
    writeln!(out, "{}", json)?;
    Ok(())
}
