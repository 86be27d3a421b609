use thiserror::Error;

/// Failure surfaced by the whole-line adapter.
///
/// The scanner core never constructs one of these: its base contract reports
/// exhaustion through [`advance`](crate::LineScanner::advance) returning
/// `false`, with the source's own error held in
/// [`ScanState`](crate::ScanState). [`BufferedLines`](crate::BufferedLines)
/// lifts that held error — and its own accumulation cap — into a `Result`
/// item, which is where this type appears.
#[derive(Debug, Error)]
pub enum ScanError<E> {
    /// The byte source failed while refilling the scan buffer.
    #[error("buffer refill failed")]
    Refill(#[source] E),
    /// A line kept growing past
    /// [`BufferOptions::max_line_len`](crate::BufferOptions::max_line_len)
    /// without a terminator appearing.
    #[error("line exceeded {limit} bytes before a terminator was seen")]
    LineTooLong {
        /// The configured accumulation cap, in bytes.
        limit: usize,
    },
}
