//! Rule 30 engine
//!
//! # Algorithm
//!
//! The ring of `state_length` real cells is stored in a linear buffer of
//! `state_length + 2` cells. Index 0 and index `state_length + 1` are guard
//! cells holding copies of the opposite real boundary cells, so the update
//! sweep needs no wrap-around branches:
//!
//! ```text
//! [ g0 | c1 c2 ... cN | gN+1 ]    g0 = cN, gN+1 = c1
//! ```
//!
//! Each generation is computed from the live buffer into the idle one with
//! `next[i] = left ^ (mid | right)`, then ownership of the two buffers flips.
//!
//! Output bits are read at `cursor * bit_spacing` in the guarded buffer, so
//! stride position 0 always reads the left guard (the last real cell).
//!
//! # Determinism
//!
//! The whole state is boolean and the update is pure bit logic, so the same
//! seed and dimensions produce the same bit stream on every platform.

use tracing::debug;

use super::snapshot::{compact_len, pack_cells, unpack_cells, CompactSnapshot, StateSnapshot};
use super::EngineError;
use crate::config::EngineConfig;
use crate::rng::BitSource;

/// Number of seed bits written into the initial state
const SEED_BITS: usize = u64::BITS as usize;

/// Deterministic bit generator driven by the Rule 30 cellular automaton
///
/// The engine is not internally synchronised. Give each thread its own
/// instance or wrap it in a lock.
///
/// # Example
/// ```
/// use rule30_rng::Rule30Engine;
///
/// let mut a = Rule30Engine::new(12345, 255, 8).unwrap();
/// let mut b = Rule30Engine::new(12345, 255, 8).unwrap();
///
/// for _ in 0..1000 {
///     assert_eq!(a.next_bit(), b.next_bit());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Rule30Engine {
    /// Normalised seed (never zero)
    seed: u64,

    /// Number of real cells
    state_length: usize,

    /// Cells between output positions
    bit_spacing: usize,

    /// Output positions per generation, `ceil(state_length / bit_spacing)`
    bit_capacity: usize,

    /// Double buffer, each `state_length + 2` cells wide
    buffers: [Vec<bool>; 2],

    /// Index into `buffers` of the live generation
    live: usize,

    /// Stride position of the next output bit
    cursor: usize,
}

impl Rule30Engine {
    /// Build and seed an engine.
    ///
    /// A seed of 0 is replaced by 1, since the all-zero ring is a fixed point.
    /// Bit `i` of the seed is written to real cell `i` for the first
    /// `min(state_length, 64)` cells, then the automaton is advanced
    /// `2 * state_length` generations before any output is produced.
    ///
    /// # Errors
    /// [`EngineError::ZeroStateLength`] or [`EngineError::ZeroBitSpacing`].
    ///
    /// # Example
    /// ```
    /// use rule30_rng::{EngineError, Rule30Engine};
    ///
    /// assert!(Rule30Engine::new(1, 31, 4).is_ok());
    /// assert_eq!(Rule30Engine::new(1, 0, 4).unwrap_err(), EngineError::ZeroStateLength);
    /// ```
    pub fn new(seed: u64, state_length: usize, bit_spacing: usize) -> Result<Self, EngineError> {
        Self::from_config(&EngineConfig {
            seed,
            state_length,
            bit_spacing,
        })
    }

    /// Build an engine from an [`EngineConfig`]
    pub fn from_config(config: &EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let state_length = config.state_length;
        let bit_spacing = config.bit_spacing;
        let seed = if config.seed == 0 { 1 } else { config.seed };

        debug!(
            seed,
            requested_seed = config.seed,
            state_length,
            bit_spacing,
            "seeding rule 30 engine"
        );

        let mut engine = Self {
            seed,
            state_length,
            bit_spacing,
            bit_capacity: state_length.div_ceil(bit_spacing),
            buffers: [vec![false; state_length + 2], vec![false; state_length + 2]],
            live: 0,
            cursor: 0,
        };

        let seeded = &mut engine.buffers[0][1..=state_length.min(SEED_BITS)];
        for (i, cell) in seeded.iter_mut().enumerate() {
            *cell = (seed >> i) & 1 == 1;
        }
        engine.refresh_guards();

        for _ in 0..state_length * 2 {
            engine.step();
        }

        Ok(engine)
    }

    /// Normalised seed the engine was built with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state_length(&self) -> usize {
        self.state_length
    }

    pub fn bit_spacing(&self) -> usize {
        self.bit_spacing
    }

    /// Output bits produced per generation
    pub fn bit_capacity(&self) -> usize {
        self.bit_capacity
    }

    /// Stride position that will supply the next bit
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Byte length of a compact snapshot
    pub fn compact_len(&self) -> usize {
        compact_len(self.state_length)
    }

    /// Parameters this engine was built with (seed normalised)
    pub fn config(&self) -> EngineConfig {
        EngineConfig {
            seed: self.seed,
            state_length: self.state_length,
            bit_spacing: self.bit_spacing,
        }
    }

    /// Produce the next output bit.
    ///
    /// Reads the live buffer at `cursor * bit_spacing`, then moves the cursor.
    /// When the cursor reaches [`bit_capacity`](Self::bit_capacity) it wraps
    /// to 0 and the automaton advances one generation.
    #[inline]
    pub fn next_bit(&mut self) -> bool {
        let bit = self.buffers[self.live][self.cursor * self.bit_spacing];

        self.cursor += 1;
        if self.cursor == self.bit_capacity {
            self.cursor = 0;
            self.step();
        }

        bit
    }

    /// Force one generation and reset the cursor to 0.
    pub fn advance(&mut self) {
        self.step();
        self.cursor = 0;
    }

    /// Copy the real cells of the live generation into `dest`.
    ///
    /// # Errors
    /// [`EngineError::LengthMismatch`] if `dest.len() != state_length`.
    pub fn export_state(&self, dest: &mut [bool]) -> Result<(), EngineError> {
        self.check_cell_len(dest.len())?;
        dest.copy_from_slice(self.real_cells());
        Ok(())
    }

    /// Replace the real cells and the cursor.
    ///
    /// Both values are validated before anything is written; on error the
    /// engine is unchanged.
    ///
    /// # Errors
    /// [`EngineError::LengthMismatch`] if `cells.len() != state_length`,
    /// [`EngineError::CursorOutOfRange`] if `cursor >= bit_capacity`.
    pub fn import_state(&mut self, cells: &[bool], cursor: usize) -> Result<(), EngineError> {
        self.check_cell_len(cells.len())?;
        self.check_cursor(cursor)?;

        let end = self.state_length + 1;
        self.buffers[self.live][1..end].copy_from_slice(cells);
        self.refresh_guards();
        self.cursor = cursor;

        debug!(cursor, state_length = self.state_length, "imported full state");
        Ok(())
    }

    /// Pack the real cells LSB-first into `dest`.
    ///
    /// # Errors
    /// [`EngineError::LengthMismatch`] if `dest.len() != compact_len()`.
    pub fn export_compact(&self, dest: &mut [u8]) -> Result<(), EngineError> {
        pack_cells(self.real_cells(), dest)
    }

    /// Replace the real cells from packed bytes, together with the cursor.
    ///
    /// Unused high bits of the final byte are ignored. On error the engine is
    /// unchanged.
    ///
    /// # Errors
    /// [`EngineError::LengthMismatch`] if `bytes.len() != compact_len()`,
    /// [`EngineError::CursorOutOfRange`] if `cursor >= bit_capacity`.
    pub fn import_compact(&mut self, bytes: &[u8], cursor: usize) -> Result<(), EngineError> {
        let expected = self.compact_len();
        if bytes.len() != expected {
            return Err(EngineError::LengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        self.check_cursor(cursor)?;

        let end = self.state_length + 1;
        unpack_cells(bytes, &mut self.buffers[self.live][1..end])?;
        self.refresh_guards();
        self.cursor = cursor;

        debug!(cursor, bytes = bytes.len(), "imported compact state");
        Ok(())
    }

    /// Capture cells and cursor as an owned value
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            cells: self.real_cells().to_vec(),
            cursor: self.cursor,
        }
    }

    /// Restore a [`StateSnapshot`] taken from an engine of the same shape
    pub fn restore(&mut self, snapshot: &StateSnapshot) -> Result<(), EngineError> {
        self.import_state(&snapshot.cells, snapshot.cursor)
    }

    /// Capture packed cells and cursor as an owned value
    pub fn compact_snapshot(&self) -> CompactSnapshot {
        self.snapshot().to_compact()
    }

    /// Restore a [`CompactSnapshot`] taken from an engine of the same shape
    pub fn restore_compact(&mut self, snapshot: &CompactSnapshot) -> Result<(), EngineError> {
        self.import_compact(&snapshot.bytes, snapshot.cursor)
    }

    /// Real cells of the live generation (guards excluded)
    fn real_cells(&self) -> &[bool] {
        &self.buffers[self.live][1..=self.state_length]
    }

    /// Compute the next generation into the idle buffer and make it live.
    fn step(&mut self) {
        let [first, second] = &mut self.buffers;
        let (prev, next) = if self.live == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        };

        for (i, window) in prev.windows(3).enumerate() {
            let (left, mid, right) = (window[0], window[1], window[2]);
            next[i + 1] = left ^ (mid | right);
        }

        self.live ^= 1;
        self.refresh_guards();
    }

    /// Copy the real boundary cells of the live buffer into its guards.
    ///
    /// Called whenever the live buffer's real cells change, so the guards are
    /// current both when a step begins and when output reads index 0.
    fn refresh_guards(&mut self) {
        let n = self.state_length;
        let cells = &mut self.buffers[self.live];
        cells[0] = cells[n];
        cells[n + 1] = cells[1];
    }

    fn check_cell_len(&self, actual: usize) -> Result<(), EngineError> {
        if actual != self.state_length {
            return Err(EngineError::LengthMismatch {
                expected: self.state_length,
                actual,
            });
        }
        Ok(())
    }

    fn check_cursor(&self, cursor: usize) -> Result<(), EngineError> {
        if cursor >= self.bit_capacity {
            return Err(EngineError::CursorOutOfRange {
                cursor,
                capacity: self.bit_capacity,
            });
        }
        Ok(())
    }
}

impl BitSource for Rule30Engine {
    #[inline]
    fn next_bit(&mut self) -> bool {
        Rule30Engine::next_bit(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(engine: &mut Rule30Engine, count: usize) -> Vec<bool> {
        (0..count).map(|_| engine.next_bit()).collect()
    }

    #[test]
    fn test_bit_capacity_rounds_up() {
        assert_eq!(Rule30Engine::new(1, 255, 8).unwrap().bit_capacity(), 32);
        assert_eq!(Rule30Engine::new(1, 256, 8).unwrap().bit_capacity(), 32);
        assert_eq!(Rule30Engine::new(1, 257, 8).unwrap().bit_capacity(), 33);
        assert_eq!(Rule30Engine::new(1, 5, 1).unwrap().bit_capacity(), 5);
        assert_eq!(Rule30Engine::new(1, 5, 9).unwrap().bit_capacity(), 1);
    }

    #[test]
    fn test_step_applies_rule_30_on_a_ring() {
        // Single live cell in the middle of a width-7 ring
        let mut engine = Rule30Engine::new(1, 7, 1).unwrap();
        let mut cells = [false; 7];
        cells[3] = true;
        engine.import_state(&cells, 0).unwrap();

        engine.step();
        assert_eq!(
            engine.snapshot().cells,
            vec![false, false, true, true, true, false, false]
        );

        engine.step();
        assert_eq!(
            engine.snapshot().cells,
            vec![false, true, true, false, false, true, false]
        );
    }

    #[test]
    fn test_step_wraps_across_ring_boundary() {
        let mut engine = Rule30Engine::new(1, 5, 1).unwrap();
        engine
            .import_state(&[false, false, false, false, true], 0)
            .unwrap();

        engine.step();
        // Cell 0 sees the last cell as its left neighbour
        assert_eq!(
            engine.snapshot().cells,
            vec![true, false, false, true, true]
        );
    }

    #[test]
    fn test_guards_mirror_boundary_cells() {
        let mut engine = Rule30Engine::new(99, 9, 2).unwrap();
        for _ in 0..20 {
            let live = &engine.buffers[engine.live];
            assert_eq!(live[0], live[9]);
            assert_eq!(live[10], live[1]);
            engine.advance();
        }
    }

    #[test]
    fn test_first_stride_position_reads_last_real_cell() {
        let mut engine = Rule30Engine::new(1, 6, 3).unwrap();
        engine
            .import_state(&[false, false, false, false, false, true], 0)
            .unwrap();
        assert!(engine.next_bit(), "position 0 should mirror cell 5");
    }

    #[test]
    fn test_cursor_wraps_and_advances() {
        let mut engine = Rule30Engine::new(3, 10, 4).unwrap();
        assert_eq!(engine.bit_capacity(), 3);
        let before = engine.snapshot().cells;

        engine.next_bit();
        engine.next_bit();
        assert_eq!(engine.cursor(), 2);
        assert_eq!(engine.snapshot().cells, before);

        engine.next_bit();
        assert_eq!(engine.cursor(), 0);
        assert_ne!(engine.snapshot().cells, before);
    }

    #[test]
    fn test_manual_advance_resets_cursor() {
        let mut a = Rule30Engine::new(8, 31, 2).unwrap();
        let mut b = a.clone();

        a.next_bit();
        a.next_bit();
        a.advance();
        b.step();

        assert_eq!(a.cursor(), 0);
        assert_eq!(bits(&mut a, 100), bits(&mut b, 100));
    }

    #[test]
    fn test_seed_bits_truncated_to_state_length() {
        // Seeds differing only above bit 4 collapse for a width-5 ring
        let mut a = Rule30Engine::new(0b1_0110, 5, 1).unwrap();
        let mut b = Rule30Engine::new(0b1111_0000_1_0110, 5, 1).unwrap();
        assert_eq!(bits(&mut a, 50), bits(&mut b, 50));
    }

    #[test]
    fn test_high_seed_bits_matter_for_wide_rings() {
        let mut a = Rule30Engine::new(1, 127, 1).unwrap();
        let mut b = Rule30Engine::new(1 | (1 << 63), 127, 1).unwrap();
        assert_ne!(bits(&mut a, 256), bits(&mut b, 256));
    }

    #[test]
    fn test_failed_import_leaves_engine_untouched() {
        let mut engine = Rule30Engine::new(77, 33, 4).unwrap();
        engine.next_bit();
        let before = engine.snapshot();

        let bad_cursor = vec![true; 33];
        assert!(engine.import_state(&bad_cursor, 9).is_err());
        assert!(engine.import_compact(&[0xFF; 5], 9).is_err());
        assert!(engine.import_compact(&[0xFF; 4], 0).is_err());

        assert_eq!(engine.snapshot(), before);
    }
}
