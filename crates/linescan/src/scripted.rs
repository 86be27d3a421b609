//! A byte source that follows an explicit fill plan.
//!
//! [`ScriptedSource`] exists for tests and the fuzz harness: it pins down
//! the exact size of every fill and can inject a failure or a premature
//! end-of-data at any point in the stream, which plain in-memory sources
//! cannot do.

use alloc::vec::Vec;

use thiserror::Error;

use crate::source::{ByteSource, Fill};

/// One step of a [`ScriptedSource`] plan, consumed per fill call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Deliver up to this many payload bytes, clamped to the buffer size and
    /// to the bytes left. `Fill(0)` scripts a zero-byte fill, which scanners
    /// treat as exhaustion.
    Fill(usize),
    /// Report a refill failure.
    Fail,
    /// Report end-of-data, regardless of payload remaining.
    End,
}

/// The error produced by [`Step::Fail`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("scripted refill failure")]
pub struct ScriptedFailure;

/// A [`ByteSource`] over an in-memory payload whose fills follow a plan.
///
/// Each call to [`fill`](ByteSource::fill) consumes the next [`Step`]. Once
/// the plan runs out the source reports end-of-data, whether or not payload
/// bytes remain undelivered.
#[derive(Debug, Clone)]
pub struct ScriptedSource<'a> {
    data: &'a [u8],
    offset: usize,
    plan: Vec<Step>,
    next_step: usize,
}

impl<'a> ScriptedSource<'a> {
    /// Creates a source delivering `data` according to `plan`.
    #[must_use]
    pub fn new(data: &'a [u8], plan: impl Into<Vec<Step>>) -> Self {
        Self {
            data,
            offset: 0,
            plan: plan.into(),
            next_step: 0,
        }
    }

    /// Returns the prefix of the payload handed out so far.
    #[must_use]
    pub fn delivered(&self) -> &'a [u8] {
        &self.data[..self.offset]
    }
}

impl ByteSource for ScriptedSource<'_> {
    type Error = ScriptedFailure;

    fn fill(&mut self, buf: &mut [u8]) -> Result<Fill, ScriptedFailure> {
        let step = self.plan.get(self.next_step).copied();
        self.next_step += 1;
        match step {
            None | Some(Step::End) => Ok(Fill::Eof),
            Some(Step::Fail) => Err(ScriptedFailure),
            Some(Step::Fill(requested)) => {
                let n = requested
                    .min(buf.len())
                    .min(self.data.len() - self.offset);
                buf[..n].copy_from_slice(&self.data[self.offset..self.offset + n]);
                self.offset += n;
                Ok(Fill::Data(n))
            }
        }
    }
}
