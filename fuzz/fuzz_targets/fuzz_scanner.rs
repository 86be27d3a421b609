#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use linescan::{
    BufferOptions, BufferedLines, LineScanner, ScannerOptions, ScriptedSource, Step, TailPolicy,
};

/// One fuzz case: a payload, a fill plan cutting it into arbitrary windows
/// (possibly ending in a scripted failure or premature end-of-data), and a
/// scan buffer capacity.
#[derive(Debug, Arbitrary)]
struct ScanCase {
    payload: Vec<u8>,
    plan: Vec<PlanStep>,
    capacity: u16,
}

#[derive(Debug, Arbitrary)]
enum PlanStep {
    Fill(u16),
    Fail,
    End,
}

fuzz_target!(|case: ScanCase| {
    let capacity = 1 + usize::from(case.capacity);
    let plan: Vec<Step> = case
        .plan
        .iter()
        .map(|step| match step {
            PlanStep::Fill(n) => Step::Fill(usize::from(*n)),
            PlanStep::Fail => Step::Fail,
            PlanStep::End => Step::End,
        })
        .collect();

    let source = ScriptedSource::new(&case.payload, plan);
    let mut scanner = LineScanner::with_options(source, ScannerOptions { capacity });

    // Reconstruction: fragments plus reinserted terminators must reproduce
    // exactly the bytes the source handed out, no matter how the plan cut
    // the payload or how it ended.
    let mut rebuilt = Vec::with_capacity(case.payload.len());
    while scanner.advance() {
        let fragment = scanner.extract_fragment();
        assert!(fragment.bytes.len() <= capacity);
        assert!(!fragment.bytes.contains(&b'\n'));
        rebuilt.extend_from_slice(fragment.bytes);
        if fragment.is_final {
            rebuilt.push(b'\n');
        }
    }

    // Terminal-state idempotence.
    assert!(!scanner.advance());
    assert!(!scanner.advance());

    let delivered = scanner.into_source().delivered().to_vec();
    assert_eq!(rebuilt, delivered);

    // Differential check: the whole-line adapter over the delivered bytes
    // must agree with a plain split on the terminator.
    let lines = BufferedLines::with_options(
        linescan::SliceSource::new(&delivered),
        ScannerOptions { capacity },
        BufferOptions {
            tail: TailPolicy::Emit,
            ..Default::default()
        },
    );
    let got: Vec<Vec<u8>> = lines.map(|line| line.unwrap().into()).collect();
    let mut expected: Vec<Vec<u8>> = delivered
        .split(|&b| b == b'\n')
        .map(<[u8]>::to_vec)
        .collect();
    if expected.last().is_some_and(Vec::is_empty) {
        expected.pop();
    }
    assert_eq!(got, expected);
});
