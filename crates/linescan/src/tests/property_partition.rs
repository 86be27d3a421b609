use alloc::{vec, vec::Vec};

use quickcheck::QuickCheck;

use crate::{LineScanner, ScanState, ScannerOptions, ScriptedSource, Step};

fn test_count() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Property: however the payload is cut into fills, concatenating every
/// fragment (reinserting a terminator after each fragment that ended on one)
/// reproduces exactly the bytes the source handed out. In particular a
/// trailing unterminated fragment is emitted, never dropped.
#[test]
fn partition_reconstruction_quickcheck() {
    fn prop(payload: Vec<u8>, splits: Vec<usize>, capacity_seed: u8) -> bool {
        let capacity = 1 + usize::from(capacity_seed);

        // Turn `splits` into a fill plan covering the whole payload; the
        // scripted source clamps each request to the buffer and to the bytes
        // left, so any plan is valid.
        let mut plan: Vec<Step> = splits.iter().map(|s| Step::Fill(1 + s % 97)).collect();
        plan.push(Step::Fill(payload.len().max(1)));
        plan.push(Step::Fill(payload.len().max(1)));

        let source = ScriptedSource::new(&payload, plan);
        let mut scanner = LineScanner::with_options(source, ScannerOptions { capacity });

        let mut rebuilt = Vec::with_capacity(payload.len());
        while scanner.advance() {
            let fragment = scanner.extract_fragment();
            rebuilt.extend_from_slice(fragment.bytes);
            if fragment.is_final {
                rebuilt.push(b'\n');
            }
        }

        // Terminal-state idempotence.
        if scanner.advance() || scanner.advance() {
            return false;
        }
        if scanner.state() != &ScanState::EndOfData {
            return false;
        }
        rebuilt == scanner.into_source().delivered()
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>, Vec<usize>, u8) -> bool);
}

/// Property: the scripted source and the plain slice source produce identical
/// fragment streams for the same payload and capacity when the plan always
/// requests full windows.
#[test]
fn scripted_matches_slice_quickcheck() {
    fn prop(payload: Vec<u8>, capacity_seed: u8) -> bool {
        let capacity = 1 + usize::from(capacity_seed);
        let options = ScannerOptions { capacity };

        let mut via_slice = Vec::new();
        let mut scanner = LineScanner::with_options(crate::SliceSource::new(&payload), options);
        while scanner.advance() {
            let fragment = scanner.extract_fragment();
            via_slice.push((fragment.bytes.to_vec(), fragment.is_final));
        }

        let plan = vec![Step::Fill(capacity); payload.len().div_ceil(capacity) + 1];
        let mut via_script = Vec::new();
        let mut scanner =
            LineScanner::with_options(ScriptedSource::new(&payload, plan), options);
        while scanner.advance() {
            let fragment = scanner.extract_fragment();
            via_script.push((fragment.bytes.to_vec(), fragment.is_final));
        }

        via_slice == via_script
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>, u8) -> bool);
}
