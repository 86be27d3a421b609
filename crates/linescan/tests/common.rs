#![allow(missing_docs)]

use std::io::{self, Read};

use linescan::{BufferOptions, BufferedLines, ReadSource, ScannerOptions};

pub const ORIGINAL: &str = "INFO  starting up\nINFO  listening on :8080\n\nWARN  peer disconnected\r\nINFO  shutting down";

// This stream simulates a log file arriving in uneven reads. It intentionally
// cuts chunks on terminator seams to exercise the scanner's fill-boundary
// behavior.
#[rustfmt::skip]
pub const STREAM: [&str; 7] = [
    "INFO  start",                 // mid-word
    "ing up\n",                    // terminator ends the chunk
    "INFO  listening on :8080",    // whole line, terminator withheld
    "\n\n",                        // terminator plus a blank line in one chunk
    "WARN  peer disconnected\r",   // '\r' is payload, '\n' withheld
    "\nINFO  shut",                // terminator leads the chunk
    "ting down",                   // unterminated tail
];

/// Reader that hands out at most one `STREAM` chunk per `read` call, so each
/// scanner refill sees exactly one chunk (or the tail of one that outgrew the
/// buffer).
pub struct ChunkedReader {
    chunks: &'static [&'static str],
    index: usize,
    offset: usize,
}

impl ChunkedReader {
    #[must_use]
    pub fn new(chunks: &'static [&'static str]) -> Self {
        Self {
            chunks,
            index: 0,
            offset: 0,
        }
    }
}

impl Read for ChunkedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let Some(chunk) = self.chunks.get(self.index) else {
            return Ok(0);
        };
        let remaining = &chunk.as_bytes()[self.offset..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.offset += n;
        if self.offset == chunk.len() {
            self.index += 1;
            self.offset = 0;
        }
        Ok(n)
    }
}

#[test]
fn assert_stream_example() {
    assert_eq!(STREAM.concat(), ORIGINAL);
}

#[test]
fn chunked_stream_assembles_into_the_original_lines() {
    let lines = BufferedLines::with_options(
        ReadSource::new(ChunkedReader::new(&STREAM)),
        ScannerOptions { capacity: 16 },
        BufferOptions::default(),
    );
    let lines: Vec<String> = lines
        .map(|line| String::from_utf8(line.unwrap().into()).unwrap())
        .collect();

    let expected: Vec<&str> = ORIGINAL.split('\n').collect();
    assert_eq!(lines, expected);
    assert_eq!(lines.join("\n"), ORIGINAL);
}
