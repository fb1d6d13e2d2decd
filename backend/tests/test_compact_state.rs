//! Compact State Tests - Packed Snapshot Round Trips
//!
//! Critical invariants tested:
//! - Compact length depends only on the state length
//! - Unused high bits of the final byte are zero on export
//! - Export/import are exact inverses for every state length
//! - Compact and full checkpoints resume identically

use rule30_rng::{compact_len, CompactSnapshot, EngineError, Rule30Engine};

fn draw(engine: &mut Rule30Engine, count: usize) -> Vec<bool> {
    (0..count).map(|_| engine.next_bit()).collect()
}

#[test]
fn test_compact_round_trip_replays_stream() {
    let mut engine = Rule30Engine::new(12345, 255, 8).unwrap();

    let mut bytes = vec![0u8; engine.compact_len()];
    engine.export_compact(&mut bytes).unwrap();
    let cursor = engine.cursor();

    let first_run = draw(&mut engine, 2048 * 8);

    engine.import_compact(&bytes, cursor).unwrap();
    let second_run = draw(&mut engine, 2048 * 8);

    assert_eq!(first_run, second_run);
}

#[test]
fn test_compact_and_full_resume_identically() {
    let mut engine = Rule30Engine::new(2718, 77, 5).unwrap();
    draw(&mut engine, 123);

    let full = engine.snapshot();
    let compact = engine.compact_snapshot();
    let expected = draw(&mut engine, 3000);

    engine.restore(&full).unwrap();
    let from_full = draw(&mut engine, 3000);

    engine.restore_compact(&compact).unwrap();
    let from_compact = draw(&mut engine, 3000);

    assert_eq!(from_full, expected);
    assert_eq!(from_compact, expected);
}

#[test]
fn test_compact_length_fixed_by_state_length() {
    for (size, spacing) in [(1, 1), (8, 3), (9, 1), (255, 8), (256, 200), (1000, 7)] {
        let mut engine = Rule30Engine::new(3, size, spacing).unwrap();
        draw(&mut engine, 17);

        let snapshot = engine.compact_snapshot();
        assert_eq!(snapshot.bytes.len(), compact_len(size));
        assert_eq!(engine.compact_len(), size.div_ceil(8));
    }
}

#[test]
fn test_unused_high_bits_are_zero() {
    for size in [1usize, 3, 7, 9, 13, 31, 100, 255] {
        let mut engine = Rule30Engine::new(0xDEAD_BEEF, size, 1).unwrap();

        for _ in 0..50 {
            let bytes = engine.compact_snapshot().bytes;
            let used = size % 8;
            let last = bytes[bytes.len() - 1];
            assert_eq!(
                last >> used,
                0,
                "size {}: high bits set in final byte {:#010b}",
                size,
                last
            );
            engine.advance();
        }
    }
}

#[test]
fn test_import_reconstructs_exported_cells_for_all_small_lengths() {
    for size in 1..=70 {
        let mut source = Rule30Engine::new(size as u64 * 31 + 7, size, 2).unwrap();
        draw(&mut source, size * 3);

        let compact = source.compact_snapshot();
        let mut target = Rule30Engine::new(1, size, 2).unwrap();
        target.restore_compact(&compact).unwrap();

        assert_eq!(
            target.snapshot(),
            source.snapshot(),
            "size {} did not reconstruct",
            size
        );
    }
}

#[test]
fn test_compact_matches_full_packing() {
    let mut engine = Rule30Engine::new(55, 45, 4).unwrap();
    draw(&mut engine, 10);

    let full = engine.snapshot();
    assert_eq!(full.to_compact(), engine.compact_snapshot());
    assert_eq!(engine.compact_snapshot().to_full(45).unwrap(), full);
}

#[test]
fn test_import_ignores_garbage_high_bits() {
    let mut engine = Rule30Engine::new(8, 12, 1).unwrap();
    let mut compact = engine.compact_snapshot();
    let expected = draw(&mut engine, 200);

    compact.bytes[1] |= 0xF0;
    engine.restore_compact(&compact).unwrap();
    assert_eq!(draw(&mut engine, 200), expected);
}

#[test]
fn test_compact_export_rejects_wrong_length() {
    let engine = Rule30Engine::new(8, 12, 1).unwrap();
    let mut dest = [0u8; 3];

    assert_eq!(
        engine.export_compact(&mut dest),
        Err(EngineError::LengthMismatch {
            expected: 2,
            actual: 3
        })
    );
}

#[test]
fn test_compact_import_rejects_wrong_length_or_cursor() {
    let mut engine = Rule30Engine::new(8, 12, 5).unwrap();
    assert_eq!(engine.bit_capacity(), 3);

    assert_eq!(
        engine.import_compact(&[0], 0),
        Err(EngineError::LengthMismatch {
            expected: 2,
            actual: 1
        })
    );
    assert_eq!(
        engine.restore_compact(&CompactSnapshot {
            bytes: vec![0, 0],
            cursor: 3
        }),
        Err(EngineError::CursorOutOfRange {
            cursor: 3,
            capacity: 3
        })
    );
}

#[test]
fn test_compact_snapshot_serializes_to_json() {
    let engine = Rule30Engine::new(8, 20, 1).unwrap();
    let compact = engine.compact_snapshot();

    let json = serde_json::to_string(&compact).unwrap();
    let decoded: CompactSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, compact);
}
