//! Scan observers: an injectable window onto the scanner's state changes.
//!
//! The scanner accepts an observer at construction and notifies it on every
//! refill, extraction, and terminal transition. Nothing is ever printed or
//! logged unless the caller installs an observer that does so; the default
//! [`NopObserver`] compiles away entirely.

/// Why a scanner stopped producing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    /// The source reported clean end-of-data (or a zero-byte fill).
    EndOfData,
    /// A refill attempt failed. The error itself is retained by the scanner;
    /// see [`LineScanner::take_error`](crate::LineScanner::take_error).
    SourceFailure,
}

/// Receives scanner lifecycle events.
///
/// All hooks have empty default bodies, so an implementation only overrides
/// what it cares about. Hooks are called synchronously from
/// [`advance`](crate::LineScanner::advance) and
/// [`extract_fragment`](crate::LineScanner::extract_fragment); keep them
/// cheap.
///
/// # Examples
///
/// ```rust
/// use linescan::{LineScanner, ScanObserver, ScannerOptions, SliceSource};
///
/// #[derive(Default)]
/// struct RefillCounter {
///     refills: usize,
/// }
///
/// impl ScanObserver for RefillCounter {
///     fn refilled(&mut self, _len: usize) {
///         self.refills += 1;
///     }
/// }
///
/// let mut scanner = LineScanner::with_observer(
///     SliceSource::new(b"Hello\nWorld"),
///     ScannerOptions { capacity: 10 },
///     RefillCounter::default(),
/// );
/// while scanner.advance() {
///     scanner.extract_line();
/// }
/// // 10 bytes, then 1 byte, then the fill that reported end-of-data.
/// assert_eq!(scanner.observer().refills, 2);
/// ```
pub trait ScanObserver {
    /// A refill placed `len` bytes at the start of the buffer.
    fn refilled(&mut self, len: usize) {
        let _ = len;
    }

    /// A fragment was handed out. `is_final` is `false` when the fragment
    /// stopped at the edge of the filled region instead of a terminator.
    fn line(&mut self, bytes: &[u8], is_final: bool) {
        let _ = (bytes, is_final);
    }

    /// The scanner entered its terminal state. Fired exactly once.
    fn exhausted(&mut self, reason: Terminal) {
        let _ = reason;
    }
}

/// The do-nothing observer installed by [`LineScanner::new`](crate::LineScanner::new).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NopObserver;

impl ScanObserver for NopObserver {}

/// Observer that forwards scan events to the [`tracing`] facade.
///
/// Refills and extractions are emitted at `TRACE` level, the terminal
/// transition at `DEBUG`. Fragment contents are logged length-only; line
/// bytes never reach the subscriber.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

#[cfg(feature = "tracing")]
impl ScanObserver for TracingObserver {
    fn refilled(&mut self, len: usize) {
        tracing::trace!(len, "scan buffer refilled");
    }

    fn line(&mut self, bytes: &[u8], is_final: bool) {
        tracing::trace!(len = bytes.len(), is_final, "line fragment extracted");
    }

    fn exhausted(&mut self, reason: Terminal) {
        tracing::debug!(?reason, "scanner exhausted");
    }
}
