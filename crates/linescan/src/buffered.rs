//! Whole-line assembly on top of the fragment-producing core.
//!
//! Overview
//! - [`BufferedLines`] owns a [`LineScanner`] and drives it through as many
//!   refills as it takes to complete each logical line, accumulating
//!   fragments in a growable buffer. Callers see one item per line instead
//!   of one item per fill window.
//! - The core's held refill error is lifted into an ordinary `Result` item
//!   here, so iteration reads like any fallible iterator: lines until an
//!   `Err`, then the end.
//!
//! Policy
//! - What happens to a trailing unterminated line at end-of-data is an
//!   explicit choice, [`TailPolicy`], not an accident of the input.
//! - [`BufferOptions::max_line_len`] caps how far a line may grow across
//!   fills before a terminator shows up, bounding the accumulator on inputs
//!   that never terminate.

use alloc::vec::Vec;
use core::{fmt, mem};

use bstr::BString;

use crate::{
    error::ScanError,
    observer::{NopObserver, ScanObserver},
    options::ScannerOptions,
    scanner::LineScanner,
    source::ByteSource,
};

/// What to do with an unterminated final line when the source ends cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TailPolicy {
    /// Yield the accumulated tail as a final line.
    Emit,
    /// Drop the accumulated tail; only terminated lines are yielded.
    Discard,
}

impl Default for TailPolicy {
    fn default() -> Self {
        Self::Emit
    }
}

/// Configuration options for [`BufferedLines`].
///
/// The scan buffer itself is configured separately through
/// [`ScannerOptions`]; these options only govern how fragments are assembled
/// into lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BufferOptions {
    /// Policy for a final line that ends with the source instead of a
    /// terminator.
    ///
    /// # Default
    ///
    /// [`TailPolicy::Emit`]
    pub tail: TailPolicy,

    /// Upper bound, in bytes, on how much of a single line may accumulate
    /// before its terminator is seen.
    ///
    /// When a line grows past this limit while still unterminated, iteration
    /// yields [`ScanError::LineTooLong`] and stops; the over-limit prefix is
    /// discarded. The check runs as accumulation crosses fill boundaries, so
    /// memory held per line never exceeds the limit plus one scan buffer.
    ///
    /// # Default
    ///
    /// `None` (lines may grow without bound)
    pub max_line_len: Option<usize>,
}

/// Iterator adapter yielding whole lines from a [`LineScanner`].
///
/// Each call to [`next_line`](Self::next_line) (or [`Iterator::next`])
/// drives the scanner until a terminator is consumed, the source ends, or a
/// refill fails, and returns the assembled line as an owned [`BString`]
/// without its terminator. After yielding an `Err` — or after the source is
/// exhausted — every further call returns `None`.
///
/// # Examples
///
/// A capacity smaller than the input shows the difference from the raw
/// scanner: fragments are stitched back into whole lines.
///
/// ```rust
/// use linescan::{BufferOptions, BufferedLines, ScannerOptions, SliceSource};
///
/// let lines = BufferedLines::with_options(
///     SliceSource::new(b"Hello\nWorld"),
///     ScannerOptions { capacity: 4 },
///     BufferOptions::default(),
/// );
/// let lines: Vec<_> = lines.map(|line| line.unwrap()).collect();
/// assert_eq!(lines, ["Hello", "World"]);
/// ```
pub struct BufferedLines<S: ByteSource, O = NopObserver> {
    scanner: LineScanner<S, O>,
    /// Fragments of the line currently being assembled.
    pending: Vec<u8>,
    options: BufferOptions,
    done: bool,
}

impl<S: ByteSource> BufferedLines<S> {
    /// Creates an adapter over `source` with default scanner and buffer
    /// options.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_options(source, ScannerOptions::default(), BufferOptions::default())
    }

    /// Creates an adapter over `source` with explicit options.
    ///
    /// # Panics
    ///
    /// Panics if `scanner.capacity` is zero.
    #[must_use]
    pub fn with_options(source: S, scanner: ScannerOptions, options: BufferOptions) -> Self {
        Self::from_scanner(LineScanner::with_options(source, scanner), options)
    }
}

impl<S: ByteSource, O: ScanObserver> BufferedLines<S, O> {
    /// Wraps an existing scanner, observer and all.
    ///
    /// The scanner should not have been driven yet; bytes already consumed
    /// from it are not part of any assembled line.
    #[must_use]
    pub fn from_scanner(scanner: LineScanner<S, O>, options: BufferOptions) -> Self {
        Self {
            scanner,
            pending: Vec::new(),
            options,
            done: false,
        }
    }

    /// Assembles and returns the next line.
    ///
    /// Returns `None` once the source is exhausted (after the tail policy
    /// has been applied) and forever after the first `Err`. A refill failure
    /// discards any partially assembled line; the error is the item.
    pub fn next_line(&mut self) -> Option<Result<BString, ScanError<S::Error>>> {
        if self.done {
            return None;
        }
        loop {
            if !self.scanner.advance() {
                self.done = true;
                if let Some(source_error) = self.scanner.take_error() {
                    self.pending.clear();
                    return Some(Err(ScanError::Refill(source_error)));
                }
                if self.pending.is_empty() || matches!(self.options.tail, TailPolicy::Discard) {
                    self.pending.clear();
                    return None;
                }
                return Some(Ok(mem::take(&mut self.pending).into()));
            }
            let fragment = self.scanner.extract_fragment();
            self.pending.extend_from_slice(fragment.bytes);
            if fragment.is_final {
                return Some(Ok(mem::take(&mut self.pending).into()));
            }
            if let Some(limit) = self.options.max_line_len {
                if self.pending.len() > limit {
                    self.done = true;
                    self.pending.clear();
                    return Some(Err(ScanError::LineTooLong { limit }));
                }
            }
        }
    }

    /// Unwraps the adapter, handing the scanner back.
    ///
    /// Any partially assembled line is dropped. The scanner keeps whatever
    /// state it had — after a [`ScanError::LineTooLong`] it is still active,
    /// so raw fragment extraction can resume mid-line.
    pub fn into_scanner(self) -> LineScanner<S, O> {
        self.scanner
    }
}

impl<S: ByteSource, O: ScanObserver> Iterator for BufferedLines<S, O> {
    type Item = Result<BString, ScanError<S::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line()
    }
}

impl<S: ByteSource, O> fmt::Debug for BufferedLines<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferedLines")
            .field("scanner", &self.scanner)
            .field("pending", &self.pending.len())
            .field("options", &self.options)
            .field("done", &self.done)
            .finish()
    }
}
