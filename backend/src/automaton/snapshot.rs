//! Snapshot records and compact bit packing
//!
//! A snapshot is the complete resumable state of an engine: the real cells of
//! the live generation plus the output cursor. It comes in two shapes:
//!
//! - [`StateSnapshot`]: one `bool` per cell
//! - [`CompactSnapshot`]: cells packed LSB-first into `ceil(len / 8)` bytes
//!
//! Both are plain values. They hold no reference to the engine that produced
//! them and can be restored into any engine with the same state length and
//! bit spacing.

use serde::{Deserialize, Serialize};

use super::EngineError;

/// Number of bytes needed to pack `state_length` cells
pub fn compact_len(state_length: usize) -> usize {
    state_length.div_ceil(8)
}

/// Pack cells LSB-first: cell `i` lands in bit `i % 8` of byte `i / 8`.
///
/// Unused high bits of the final byte are written as zero.
///
/// # Errors
/// [`EngineError::LengthMismatch`] if `out.len() != compact_len(cells.len())`.
///
/// # Example
/// ```
/// use rule30_rng::pack_cells;
///
/// let cells = [true, false, true, true, false, false, false, false, true];
/// let mut out = [0u8; 2];
/// pack_cells(&cells, &mut out).unwrap();
/// assert_eq!(out, [0b0000_1101, 0b0000_0001]);
/// ```
pub fn pack_cells(cells: &[bool], out: &mut [u8]) -> Result<(), EngineError> {
    let expected = compact_len(cells.len());
    if out.len() != expected {
        return Err(EngineError::LengthMismatch {
            expected,
            actual: out.len(),
        });
    }

    pack_into(cells, out);
    Ok(())
}

fn pack_into(cells: &[bool], out: &mut [u8]) {
    out.fill(0);
    for (i, &cell) in cells.iter().enumerate() {
        if cell {
            out[i / 8] |= 1 << (i % 8);
        }
    }
}

/// Inverse of [`pack_cells`]. Bits beyond `cells.len()` in the final byte are
/// ignored.
///
/// # Errors
/// [`EngineError::LengthMismatch`] if `bytes.len() != compact_len(cells.len())`.
pub fn unpack_cells(bytes: &[u8], cells: &mut [bool]) -> Result<(), EngineError> {
    let expected = compact_len(cells.len());
    if bytes.len() != expected {
        return Err(EngineError::LengthMismatch {
            expected,
            actual: bytes.len(),
        });
    }

    for (i, cell) in cells.iter_mut().enumerate() {
        *cell = (bytes[i / 8] >> (i % 8)) & 1 == 1;
    }
    Ok(())
}

/// Full-form engine snapshot: one `bool` per real cell plus the cursor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Real cells of the live generation, index 0 first
    pub cells: Vec<bool>,

    /// Stride position that supplies the next output bit
    pub cursor: usize,
}

impl StateSnapshot {
    /// Number of cells captured
    pub fn state_length(&self) -> usize {
        self.cells.len()
    }

    /// Convert to the packed representation
    pub fn to_compact(&self) -> CompactSnapshot {
        let mut bytes = vec![0u8; compact_len(self.cells.len())];
        pack_into(&self.cells, &mut bytes);
        CompactSnapshot {
            bytes,
            cursor: self.cursor,
        }
    }
}

/// Compact engine snapshot: LSB-first packed cells plus the cursor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompactSnapshot {
    /// Packed real cells, `ceil(state_length / 8)` bytes
    pub bytes: Vec<u8>,

    /// Stride position that supplies the next output bit
    pub cursor: usize,
}

impl CompactSnapshot {
    /// Expand into the full representation.
    ///
    /// The byte sequence does not record the state length, so the caller
    /// supplies it.
    ///
    /// # Errors
    /// [`EngineError::LengthMismatch`] if the byte count does not match
    /// `state_length`.
    pub fn to_full(&self, state_length: usize) -> Result<StateSnapshot, EngineError> {
        let mut cells = vec![false; state_length];
        unpack_cells(&self.bytes, &mut cells)?;
        Ok(StateSnapshot {
            cells,
            cursor: self.cursor,
        })
    }
}
