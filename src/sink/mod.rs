//! Output sinks
//!
//! A sink is the write-only destination a writer streams markup into. The
//! writers only ever emit Unicode text; turning it into bytes is the sink's
//! business.
//!
//! - [`MemorySink`]: collects output in a `String`
//! - [`EncodedSink`]: encodes into any [`std::io::Write`] with a chosen
//!   [`TextEncoding`], buffering between flushes

pub mod encoded;

use std::io;

pub use encoded::{EncodedSink, TextEncoding};

/// Destination for streamed markup
pub trait Sink {
    /// Append text to the output
    fn write_str(&mut self, text: &str) -> io::Result<()>;

    /// Push buffered output to the underlying destination
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Flush and release the destination. Closing twice is a no-op.
    fn close(&mut self) -> io::Result<()>;

    /// Whether [`close`](Sink::close) has run
    fn is_closed(&self) -> bool;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        (**self).write_str(text)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }

    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }

    fn is_closed(&self) -> bool {
        (**self).is_closed()
    }
}

pub(crate) fn closed_error() -> io::Error {
    io::Error::new(io::ErrorKind::BrokenPipe, "sink is closed")
}

/// In-memory sink
#[derive(Debug, Default)]
pub struct MemorySink {
    buffer: String,
    closed: bool,
}

impl MemorySink {
    /// Empty, open sink
    pub fn new() -> Self {
        MemorySink::default()
    }

    /// Output written so far
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Take the output, closed or not
    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl Sink for MemorySink {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        if self.closed {
            return Err(closed_error());
        }
        self.buffer.push_str(text);
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.closed = true;
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Memory sink whose writes start failing after a fixed number of calls
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct FailingSink {
    pub(crate) buffer: String,
    writes: usize,
    fail_after: usize,
    closed: bool,
}

#[cfg(test)]
impl FailingSink {
    pub(crate) fn new(fail_after: usize) -> Self {
        FailingSink {
            fail_after,
            ..FailingSink::default()
        }
    }
}

#[cfg(test)]
impl Sink for FailingSink {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        if self.closed {
            return Err(closed_error());
        }
        if self.writes >= self.fail_after {
            return Err(io::Error::new(io::ErrorKind::Other, "sink full"));
        }
        self.writes += 1;
        self.buffer.push_str(text);
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.closed = true;
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
