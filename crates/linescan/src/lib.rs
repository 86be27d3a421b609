//! Incremental line scanning over abstract byte sources.
//!
//! The core of the crate is [`LineScanner`]: it pulls bytes from a
//! [`ByteSource`] into a fixed-size scan buffer and hands out line fragments
//! without copying them out of that buffer. [`advance`](LineScanner::advance)
//! makes sure unread bytes are available (refilling when the buffer runs
//! dry) and [`extract_line`](LineScanner::extract_line) consumes up to the
//! next `\n`:
//!
//! ```rust
//! use linescan::{LineScanner, SliceSource};
//!
//! let mut scanner = LineScanner::new(SliceSource::new(b"status=ok\nelapsed=3ms\n"));
//! while scanner.advance() {
//!     let line = scanner.extract_line();
//!     println!("{}", String::from_utf8_lossy(line));
//! }
//! ```
//!
//! Because the scan buffer never grows, a line longer than one fill is handed
//! out as several fragments. When whole lines matter more than a fixed memory
//! ceiling, wrap the scanner in [`BufferedLines`], which stitches fragments
//! back together and yields one `Result` per logical line.
//!
//! Sources report each fill as data, end-of-data, or a failure, so a scanner
//! that stops iterating can still say why: [`LineScanner::state`] and
//! [`LineScanner::take_error`] recover the distinction after the loop ends.

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod chunk_utils;
mod error;
mod observer;
mod options;
mod scanner;
mod source;

#[cfg(feature = "buffered")]
mod buffered;
#[cfg(any(test, feature = "fuzzing"))]
mod scripted;

#[cfg(test)]
mod tests;

#[cfg(feature = "buffered")]
pub use buffered::{BufferOptions, BufferedLines, TailPolicy};
pub use chunk_utils::produce_chunks;
pub use error::ScanError;
#[cfg(feature = "tracing")]
pub use observer::TracingObserver;
pub use observer::{NopObserver, ScanObserver, Terminal};
pub use options::ScannerOptions;
pub use scanner::{DEFAULT_CAPACITY, Fragment, LineScanner, ScanState};
#[cfg(feature = "std")]
pub use source::ReadSource;
pub use source::{ByteSource, Fill, SliceSource};
#[cfg(any(test, feature = "fuzzing"))]
pub use scripted::{ScriptedFailure, ScriptedSource, Step};
