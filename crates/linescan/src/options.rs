use crate::scanner::DEFAULT_CAPACITY;

/// Configuration options for the line scanner core.
///
/// Whole-line assembly has its own knobs on
/// [`BufferOptions`](crate::BufferOptions); the core only needs to know how
/// big its scan buffer is.
///
/// # Examples
///
/// ```rust
/// use linescan::{LineScanner, ScannerOptions, SliceSource};
///
/// let scanner = LineScanner::with_options(
///     SliceSource::new(b"Hello\nWorld"),
///     ScannerOptions { capacity: 10 },
/// );
/// assert_eq!(scanner.capacity(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScannerOptions {
    /// Size of the fixed scan buffer, in bytes.
    ///
    /// The buffer is allocated once at construction and reused for every
    /// refill; it is never grown. A smaller capacity means more refills and
    /// more fragmented lines, never lost bytes. Must be non-zero.
    ///
    /// # Default
    ///
    /// [`DEFAULT_CAPACITY`] (4096)
    pub capacity: usize,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}
