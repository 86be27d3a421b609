//! Byte sources: where the scanner's refills come from.
//!
//! A [`ByteSource`] is anything that can fill a caller-provided byte region
//! and say what happened, via the tagged [`Fill`] outcome. Keeping the three
//! cases — data arrived, the stream ended, the fill failed — distinct at the
//! boundary is what lets [`LineScanner`](crate::LineScanner) treat end-of-data
//! as an ordinary terminal state while still holding on to a real error when
//! one occurs.
//!
//! Two sources ship with the crate: [`SliceSource`] reads from an in-memory
//! byte slice and can never fail, and [`ReadSource`] (feature `std`) adapts
//! any [`std::io::Read`].

use core::convert::Infallible;

/// Outcome of one [`ByteSource::fill`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// The source wrote this many bytes at the start of the region.
    ///
    /// Sources should only report `Data(n)` with `n > 0`; a scanner treats
    /// `Data(0)` the same as [`Fill::Eof`].
    Data(usize),
    /// The source has no further bytes and never will.
    Eof,
}

/// A provider of sequential bytes.
///
/// One call to [`fill`](ByteSource::fill) replaces the contents of `buf`
/// starting at offset 0 and reports how many bytes were supplied, that the
/// source is exhausted, or that the attempt failed. Implementations must not
/// retain any reference to `buf` and must not report more bytes than
/// `buf.len()`.
///
/// The error type is the implementation's own; the scanner stores it
/// unchanged so callers can recover the concrete failure after iteration
/// stops.
pub trait ByteSource {
    /// Failure reported by [`fill`](ByteSource::fill).
    type Error;

    /// Attempts to fill `buf` from the source's current position.
    ///
    /// # Errors
    ///
    /// Returns the source's own error when the fill attempt fails. A failed
    /// fill must not have written meaningful data into `buf`.
    fn fill(&mut self, buf: &mut [u8]) -> Result<Fill, Self::Error>;
}

/// A [`ByteSource`] over an in-memory byte slice.
///
/// Each fill copies at most `buf.len()` of the remaining bytes, so pairing a
/// slice with a small scan buffer is the easiest way to walk data through the
/// scanner one deterministic window at a time.
///
/// # Examples
///
/// ```rust
/// use linescan::{ByteSource, Fill, SliceSource};
///
/// let mut source = SliceSource::new(b"abc");
/// let mut buf = [0u8; 2];
/// assert_eq!(source.fill(&mut buf), Ok(Fill::Data(2)));
/// assert_eq!(&buf, b"ab");
/// assert_eq!(source.fill(&mut buf), Ok(Fill::Data(1)));
/// assert_eq!(source.fill(&mut buf), Ok(Fill::Eof));
/// ```
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> SliceSource<'a> {
    /// Creates a source that yields `data` from its beginning.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Returns the bytes not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.offset..]
    }
}

impl ByteSource for SliceSource<'_> {
    type Error = Infallible;

    fn fill(&mut self, buf: &mut [u8]) -> Result<Fill, Infallible> {
        let remaining = &self.data[self.offset..];
        if remaining.is_empty() {
            return Ok(Fill::Eof);
        }
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.offset += n;
        Ok(Fill::Data(n))
    }
}

/// Adapter turning any [`std::io::Read`] into a [`ByteSource`].
///
/// `Ok(0)` from the reader becomes [`Fill::Eof`]; interrupted reads are
/// retried; every other error is reported as the fill's failure. The adapter
/// never closes the reader — dropping the source drops the handle and nothing
/// else.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// use linescan::{LineScanner, ReadSource};
///
/// let mut scanner = LineScanner::new(ReadSource::new(Cursor::new("one\ntwo\n")));
/// let mut lines = Vec::new();
/// while scanner.advance() {
///     lines.push(scanner.extract_line().to_vec());
/// }
/// assert_eq!(lines, [b"one".to_vec(), b"two".to_vec()]);
/// ```
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct ReadSource<R> {
    inner: R,
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ReadSource<R> {
    /// Wraps `inner`.
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns a shared reference to the wrapped reader.
    #[must_use]
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwraps the adapter, returning the reader.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ByteSource for ReadSource<R> {
    type Error = std::io::Error;

    fn fill(&mut self, buf: &mut [u8]) -> Result<Fill, std::io::Error> {
        loop {
            match self.inner.read(buf) {
                Ok(0) => return Ok(Fill::Eof),
                Ok(n) => return Ok(Fill::Data(n)),
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }
}
