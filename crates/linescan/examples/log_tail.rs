//! Scans a simulated log stream incrementally and filters the lines that
//! match a pattern, while an observer narrates what the scanner is doing.
//!
//! Two things are on display:
//!
//! 1. The raw [`LineScanner`] with a deliberately tiny buffer, so the
//!    fill-boundary behavior is visible: a line wider than one fill arrives
//!    as several fragments, each annotated by the installed observer. The
//!    observer is the crate's replacement for hardwired debug printing —
//!    nothing is logged unless the caller asks for it.
//! 2. [`BufferedLines`] over the same input, which hides the fragmenting
//!    entirely: the caller sees whole lines and greps them for a substring,
//!    the way a `tail | grep` pipeline would.
//!
//! Run with
//!
//! ```bash
//! cargo run -p linescan --example log_tail
//! ```

use bstr::ByteSlice;
use linescan::{
    BufferOptions, BufferedLines, LineScanner, ScanObserver, ScannerOptions, SliceSource, Terminal,
};

/// Observer that narrates every refill and terminal transition to stdout.
struct Narrator;

impl ScanObserver for Narrator {
    fn refilled(&mut self, len: usize) {
        println!("  [scanner] refilled {len} bytes");
    }

    fn line(&mut self, bytes: &[u8], is_final: bool) {
        let marker = if is_final { "line" } else { "partial" };
        println!(
            "  [scanner] {marker}: {:?}",
            String::from_utf8_lossy(bytes)
        );
    }

    fn exhausted(&mut self, reason: Terminal) {
        println!("  [scanner] exhausted: {reason:?}");
    }
}

// A toy log excerpt. In real life this would come from a file or a socket;
// the scanner only ever sees the byte-source capability either way.
const LOG: &[u8] = b"\
level=info msg=\"server started\" port=8080
level=warn msg=\"slow request\" path=/search elapsed=2.31s
level=info msg=\"healthcheck ok\"
level=error msg=\"upstream timeout\" upstream=billing attempt=3
level=info msg=\"shutting down\"";

fn main() {
    // Part 1: raw fragments through a 32-byte window, narrated.
    println!("raw scan, capacity 32:");
    let mut scanner = LineScanner::with_observer(
        SliceSource::new(LOG),
        ScannerOptions { capacity: 32 },
        Narrator,
    );
    while scanner.advance() {
        scanner.extract_line();
    }

    // Part 2: whole lines, filtered. The same input, but the adapter drives
    // the refills and stitches the fragments back together.
    println!("\nlines matching \"level=error\":");
    let lines = BufferedLines::with_options(
        SliceSource::new(LOG),
        ScannerOptions { capacity: 32 },
        BufferOptions::default(),
    );
    for line in lines {
        let line = line.expect("in-memory sources cannot fail");
        if line.contains_str("level=error") {
            println!("  {line}");
        }
    }
}
