#![expect(missing_docs)]

use core::fmt::Write;

use bstr::BStr;
use linescan::{
    BufferOptions, BufferedLines, LineScanner, ScanState, ScannerOptions, SliceSource, TailPolicy,
};

fn render_scan(data: &str, capacity: usize) -> String {
    let mut scanner = LineScanner::with_options(
        SliceSource::new(data.as_bytes()),
        ScannerOptions { capacity },
    );
    let mut out = String::new();
    while scanner.advance() {
        let fragment = scanner.extract_fragment();
        writeln!(
            out,
            "fragment {:?} is_final={}",
            BStr::new(fragment.bytes),
            fragment.is_final
        )
        .unwrap();
    }
    let terminal = match scanner.state() {
        ScanState::EndOfData => "end-of-data",
        ScanState::Failed(_) => "failed",
        ScanState::Active => unreachable!("loop ended while active"),
    };
    writeln!(out, "terminal: {terminal}").unwrap();
    out
}

fn render_lines(data: &str, capacity: usize, tail: TailPolicy) -> String {
    let lines = BufferedLines::with_options(
        SliceSource::new(data.as_bytes()),
        ScannerOptions { capacity },
        BufferOptions {
            tail,
            ..Default::default()
        },
    );
    let mut out = String::new();
    for line in lines {
        writeln!(out, "line {:?}", line.unwrap()).unwrap();
    }
    out
}

#[test]
fn snapshot_fragments_across_capacities() {
    // Unrolled to satisfy insta inline snapshot rules
    insta::assert_snapshot!(render_scan("Hello\nWorld", 10), @r#"
    fragment "Hello" is_final=true
    fragment "Worl" is_final=false
    fragment "d" is_final=false
    terminal: end-of-data
    "#);
    insta::assert_snapshot!(render_scan("Hello\nWorld", 4096), @r#"
    fragment "Hello" is_final=true
    fragment "World" is_final=false
    terminal: end-of-data
    "#);
    insta::assert_snapshot!(render_scan("a\n\nb", 2), @r#"
    fragment "a" is_final=true
    fragment "" is_final=true
    fragment "b" is_final=false
    terminal: end-of-data
    "#);
    insta::assert_snapshot!(render_scan("", 8), @r#"terminal: end-of-data"#);
}

#[test]
fn snapshot_buffered_tail_policies() {
    let data = "one\ntwo longer line\nthree";
    insta::assert_snapshot!(render_lines(data, 8, TailPolicy::Emit), @r#"
    line "one"
    line "two longer line"
    line "three"
    "#);
    insta::assert_snapshot!(render_lines(data, 8, TailPolicy::Discard), @r#"
    line "one"
    line "two longer line"
    "#);
}
