//! The line scanner core.
//!
//! Overview
//! - [`LineScanner`] owns a fixed-size buffer and a borrowed or owned byte
//!   source. [`advance`](LineScanner::advance) guarantees at least one unread
//!   byte is buffered (refilling when needed);
//!   [`extract_line`](LineScanner::extract_line) consumes buffered bytes up
//!   to the next `\n` or the edge of the filled region.
//! - Extraction is zero-copy: fragments are slices into the scan buffer,
//!   valid until the next call that mutates the scanner.
//!
//! Buffer discipline
//! - `position` marks the next unread byte and `filled` the valid-data
//!   watermark; `position <= filled <= capacity` holds at all times.
//! - A refill always writes at offset 0 and resets `position`; `filled` is
//!   mutated nowhere else. The buffer is allocated once and never grows.
//!
//! Guarantees
//! - Once `advance` has returned `false` it returns `false` forever, without
//!   touching the source again.
//! - A refill failure is held in [`ScanState::Failed`] and can be recovered
//!   through [`take_error`](LineScanner::take_error); the boolean contract
//!   itself does not distinguish failure from end-of-data.
//! - A line that straddles a fill boundary is handed out as two fragments;
//!   the first reports `is_final == false`. Assembling whole lines across
//!   fills is the job of [`BufferedLines`](crate::BufferedLines), not the
//!   core.

use alloc::{boxed::Box, vec};
use core::fmt;

use bstr::{BStr, ByteSlice};

use crate::{
    observer::{NopObserver, ScanObserver, Terminal},
    options::ScannerOptions,
    source::{ByteSource, Fill},
};

/// Default scan buffer capacity, in bytes.
pub const DEFAULT_CAPACITY: usize = 4096;

/// The line terminator. Carriage returns are payload, not terminators.
const TERMINATOR: u8 = b'\n';

/// Where a scanner is in its lifecycle.
#[derive(Debug, Clone)]
pub enum ScanState<E> {
    /// More data may still be produced.
    Active,
    /// The source reported end-of-data. The scanner is permanently
    /// exhausted.
    EndOfData,
    /// A refill failed. The scanner is permanently exhausted; the error is
    /// held until [`LineScanner::take_error`] claims it.
    Failed(E),
}

/// Equality compares the lifecycle variant only; [`Failed`](ScanState::Failed)
/// payloads are not inspected, since source errors (e.g. [`std::io::Error`])
/// need not implement [`PartialEq`].
impl<E> PartialEq for ScanState<E> {
    fn eq(&self, other: &Self) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}

impl<E> Eq for ScanState<E> {}

/// One extraction result: a slice of buffered bytes plus whether it ended on
/// a terminator.
///
/// `is_final == false` means the fragment stopped at the edge of the filled
/// region; the rest of the logical line (if any) arrives as a separate
/// fragment after the next refill.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// The consumed bytes, excluding any terminator.
    pub bytes: &'a [u8],
    /// Whether a terminator was consumed right after `bytes`.
    pub is_final: bool,
}

impl fmt::Debug for Fragment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fragment")
            .field("bytes", &BStr::new(self.bytes))
            .field("is_final", &self.is_final)
            .finish()
    }
}

/// A pull-based line scanner over an abstract byte source.
///
/// The scanner refills a fixed buffer from its source and hands out line
/// fragments as slices into that buffer. It holds no other resource: the
/// source is neither closed nor flushed, and dropping the scanner simply
/// drops (or releases, when the source was lent as `&mut`) the source.
///
/// Not safe for concurrent use; exactly one logical reader drives
/// [`advance`](Self::advance) and [`extract_line`](Self::extract_line)
/// sequentially.
///
/// # Examples
///
/// A buffer smaller than the input shows the fill-boundary behavior:
///
/// ```rust
/// use linescan::{LineScanner, ScannerOptions, SliceSource};
///
/// let mut scanner = LineScanner::with_options(
///     SliceSource::new(b"Hello\nWorld"),
///     ScannerOptions { capacity: 10 },
/// );
///
/// assert!(scanner.advance()); // fills "Hello\nWorl"
/// assert_eq!(scanner.extract_line(), b"Hello");
/// assert_eq!(scanner.extract_line(), b"Worl"); // stopped at the fill edge
/// assert!(scanner.advance()); // fills "d"
/// assert_eq!(scanner.extract_line(), b"d");
/// assert!(!scanner.advance());
/// assert!(!scanner.advance()); // terminal state is permanent
/// ```
pub struct LineScanner<S: ByteSource, O = NopObserver> {
    source: S,
    observer: O,
    /// Fixed scan buffer; allocated once, never reallocated.
    buffer: Box<[u8]>,
    /// Next unread byte. Always `<= filled`.
    position: usize,
    /// Valid-data watermark from the last refill. Always `<= buffer.len()`.
    filled: usize,
    state: ScanState<S::Error>,
}

impl<S: ByteSource> LineScanner<S> {
    /// Creates a scanner over `source` with the default capacity and no
    /// observer.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_options(source, ScannerOptions::default())
    }

    /// Creates a scanner over `source` with explicit options.
    ///
    /// # Panics
    ///
    /// Panics if `options.capacity` is zero.
    #[must_use]
    pub fn with_options(source: S, options: ScannerOptions) -> Self {
        Self::with_observer(source, options, NopObserver)
    }
}

impl<S: ByteSource, O: ScanObserver> LineScanner<S, O> {
    /// Creates a scanner that reports its state changes to `observer`.
    ///
    /// # Panics
    ///
    /// Panics if `options.capacity` is zero.
    #[must_use]
    pub fn with_observer(source: S, options: ScannerOptions, observer: O) -> Self {
        assert!(options.capacity > 0, "scan buffer capacity must be non-zero");
        Self {
            source,
            observer,
            buffer: vec![0; options.capacity].into_boxed_slice(),
            position: 0,
            filled: 0,
            state: ScanState::Active,
        }
    }

    /// Ensures at least one unread byte is buffered, refilling if necessary.
    ///
    /// Returns `true` when a following [`extract_line`](Self::extract_line)
    /// will observe data. Returns `false` once the source is exhausted or a
    /// refill has failed; from then on every call returns `false` without
    /// touching the source. Use [`state`](Self::state) or
    /// [`take_error`](Self::take_error) to tell the two conditions apart.
    #[must_use]
    pub fn advance(&mut self) -> bool {
        if !matches!(self.state, ScanState::Active) {
            return false;
        }
        if self.position < self.filled {
            return true;
        }
        match self.source.fill(&mut self.buffer) {
            Ok(Fill::Data(n)) if n > 0 => {
                assert!(
                    n <= self.buffer.len(),
                    "byte source reported {n} bytes into a {} byte buffer",
                    self.buffer.len()
                );
                self.position = 0;
                self.filled = n;
                self.observer.refilled(n);
                true
            }
            // A zero-byte fill counts as exhaustion, same as Eof.
            Ok(Fill::Data(_) | Fill::Eof) => {
                self.state = ScanState::EndOfData;
                self.observer.exhausted(Terminal::EndOfData);
                false
            }
            Err(e) => {
                self.state = ScanState::Failed(e);
                self.observer.exhausted(Terminal::SourceFailure);
                false
            }
        }
    }

    /// Consumes and returns buffered bytes up to the next terminator.
    ///
    /// The returned slice excludes the terminator itself; the cursor moves
    /// past it. When no terminator is present in the filled region the whole
    /// unread remainder is returned, and the rest of that logical line will
    /// arrive as a separate chunk after the next [`advance`](Self::advance).
    /// Never triggers a refill. Returns an empty slice when nothing unread
    /// is buffered.
    pub fn extract_line(&mut self) -> &[u8] {
        self.extract_fragment().bytes
    }

    /// Like [`extract_line`](Self::extract_line), but also reports whether
    /// the chunk ended on a terminator.
    ///
    /// This is the form the whole-line adapter consumes; plain iteration is
    /// usually happier with `extract_line`.
    pub fn extract_fragment(&mut self) -> Fragment<'_> {
        debug_assert!(self.position <= self.filled && self.filled <= self.buffer.len());
        let start = self.position;
        let (end, is_final) = match self.buffer[start..self.filled].find_byte(TERMINATOR) {
            Some(i) => (start + i, true),
            None => (self.filled, false),
        };
        // Step past the terminator too, when one was found.
        self.position = if is_final { end + 1 } else { end };
        let bytes = &self.buffer[start..end];
        self.observer.line(bytes, is_final);
        Fragment { bytes, is_final }
    }

    /// Returns the scanner's lifecycle state.
    #[must_use]
    pub fn state(&self) -> &ScanState<S::Error> {
        &self.state
    }

    /// Returns `true` once the scanner has entered its terminal state.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        !matches!(self.state, ScanState::Active)
    }

    /// Claims the error from a failed refill, if one is held.
    ///
    /// Afterwards the scanner remains exhausted, reporting
    /// [`ScanState::EndOfData`].
    pub fn take_error(&mut self) -> Option<S::Error> {
        if !matches!(self.state, ScanState::Failed(_)) {
            return None;
        }
        match core::mem::replace(&mut self.state, ScanState::EndOfData) {
            ScanState::Failed(e) => Some(e),
            _ => unreachable!(),
        }
    }

    /// Returns the scan buffer's capacity in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns a shared reference to the installed observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns a mutable reference to the installed observer.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Unwraps the scanner, handing the source back to the caller.
    ///
    /// The source is returned as-is; the scanner never closes it.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: ByteSource, O> fmt::Debug for LineScanner<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            ScanState::Active => "active",
            ScanState::EndOfData => "end-of-data",
            ScanState::Failed(_) => "failed",
        };
        f.debug_struct("LineScanner")
            .field("capacity", &self.buffer.len())
            .field("position", &self.position)
            .field("filled", &self.filled)
            .field("state", &state)
            .finish_non_exhaustive()
    }
}
