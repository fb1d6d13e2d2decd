//! Output generation commands

use std::fmt::Write as _;
use std::io::Write;

use rule30_rng::{BitSampler, Rule30Engine};
use tracing::info;

use crate::error::Result;

/// Print `count` bits on one line as `0`/`1`
pub fn bits<W: Write>(engine: &mut Rule30Engine, count: usize, out: &mut W) -> Result<()> {
    info!(count, "generating bits");

    let line: String = (0..count)
        .map(|_| if engine.next_bit() { '1' } else { '0' })
        .collect();
    writeln!(out, "{}", line)?;
    Ok(())
}

/// Print `count` bytes on one line as lowercase hex
pub fn bytes<W: Write>(engine: &mut Rule30Engine, count: usize, out: &mut W) -> Result<()> {
    info!(count, "generating bytes");

    let mut buffer = vec![0u8; count];
    engine.sample_bytes(&mut buffer);

    let mut hex = String::with_capacity(count * 2);
    for byte in &buffer {
        let _ = write!(hex, "{:02x}", byte);
    }
    writeln!(out, "{}", hex)?;
    Ok(())
}

/// Print `count` integers in `[0, below)`, one per line
pub fn ints<W: Write>(
    engine: &mut Rule30Engine,
    count: usize,
    below: u64,
    out: &mut W,
) -> Result<()> {
    info!(count, below, "generating bounded integers");

    for _ in 0..count {
        writeln!(out, "{}", engine.sample_below(below)?)?;
    }
    Ok(())
}

/// Print `count` floats in `[0, 1)`, one per line
pub fn floats<W: Write>(engine: &mut Rule30Engine, count: usize, out: &mut W) -> Result<()> {
    info!(count, "generating floats");

    for _ in 0..count {
        writeln!(out, "{}", engine.sample_f64())?;
    }
    Ok(())
}
