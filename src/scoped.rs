//! Scoped XML writer: nesting follows closures instead of an explicit stack
//!
//! Each `open_tag` call takes a body closure. The element is closed when the
//! body returns, so only a depth counter is needed to indent correctly.

use crate::error::{Result, XmlStreamError};
use crate::escape::{escape_text, validate_attributes, validate_tag_name};
use crate::markup::{
    header_attributes, write_close_tag, write_header, write_indent, write_newline, write_open_tag,
};
use crate::sink::Sink;
use crate::types::{Attributes, WriterOptions};

/// Streaming XML writer whose elements close at the end of their closure
///
/// If a body returns an error, the element's closing tag is still written
/// before the error is handed back, so the output stays balanced. The one
/// exception is a body that closes the writer itself: nothing can be written
/// after that, and the call fails with [`XmlStreamError::EndOfStream`] unless
/// the body already failed.
///
/// # Examples
///
/// ```
/// use xml_write_stream::{MemorySink, ScopedWriter};
///
/// # fn main() -> xml_write_stream::Result<()> {
/// let mut writer = ScopedWriter::new(MemorySink::new());
/// writer.open_tag("places", |places| {
///     places.open_tag("place", |place| place.write_text("Alaska & Hawai'i"))
/// })?;
///
/// assert_eq!(
///     writer.sink().as_str(),
///     "<places>\n    <place>\n        Alaska &amp; Hawai&apos;i\n    </place>\n</places>\n"
/// );
/// # Ok(())
/// # }
/// ```
pub struct ScopedWriter<S: Sink> {
    sink: S,
    depth: usize,
    indent: usize,
    written: bool,
}

impl<S: Sink> ScopedWriter<S> {
    /// Create a writer with default options
    pub fn new(sink: S) -> Self {
        Self::with_options(sink, WriterOptions::default())
    }

    /// Create a writer with the given indentation options
    pub fn with_options(sink: S, options: WriterOptions) -> Self {
        ScopedWriter {
            sink,
            depth: 0,
            indent: options.indent,
            written: false,
        }
    }

    /// Write `<name>`, run `body` one level deeper, then write `</name>`
    pub fn open_tag<F>(&mut self, name: &str, body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.open_tag_with(name, &Attributes::new(), body)
    }

    /// Like [`open_tag`](Self::open_tag), with attributes on the opening tag
    pub fn open_tag_with<F>(&mut self, name: &str, attributes: &Attributes, body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.check_closed()?;
        validate_tag_name(name)?;
        validate_attributes(attributes)?;

        self.written = true;
        let width = self.indent_width();
        write_indent(&mut self.sink, width)?;
        write_open_tag(&mut self.sink, name, attributes)?;
        write_newline(&mut self.sink)?;
        log::trace!("open <{}> at depth {}", name, self.depth);

        self.depth += 1;
        let outcome = body(&mut *self);
        self.depth -= 1;

        if self.sink.is_closed() {
            log::debug!("sink closed inside <{name}>, closing tag not written");
            return outcome.and(Err(XmlStreamError::EndOfStream));
        }
        if let Err(err) = &outcome {
            log::warn!("body of <{name}> failed, closing tag still written: {err}");
        }

        let closed = self.write_closing_tag(name);
        outcome?;
        closed
    }

    fn write_closing_tag(&mut self, name: &str) -> Result<()> {
        let width = self.indent_width();
        write_indent(&mut self.sink, width)?;
        write_close_tag(&mut self.sink, name)?;
        write_newline(&mut self.sink)?;
        log::trace!("close </{}> at depth {}", name, self.depth);
        Ok(())
    }

    /// Write an escaped line of text inside the current element
    pub fn write_text(&mut self, text: &str) -> Result<()> {
        self.write_text_inner(text, true)
    }

    /// Write a line of text as-is
    pub fn write_text_unescaped(&mut self, text: &str) -> Result<()> {
        self.write_text_inner(text, false)
    }

    fn write_text_inner(&mut self, text: &str, escape: bool) -> Result<()> {
        self.check_closed()?;
        if self.depth == 0 {
            return Err(XmlStreamError::NoTopLevelTag);
        }

        let width = self.indent_width();
        write_indent(&mut self.sink, width)?;
        if escape {
            self.sink.write_str(&escape_text(text))?;
        } else {
            self.sink.write_str(text)?;
        }
        write_newline(&mut self.sink)?;
        Ok(())
    }

    /// Write the XML declaration with the default attributes
    pub fn write_header(&mut self) -> Result<()> {
        self.write_header_with(&Attributes::new())
    }

    /// Write the XML declaration. Must come before any element.
    pub fn write_header_with(&mut self, attributes: &Attributes) -> Result<()> {
        if self.depth > 0 || self.written {
            return Err(XmlStreamError::InvalidHeaderPosition);
        }
        self.check_closed()?;
        validate_attributes(attributes)?;

        self.written = true;
        write_header(&mut self.sink, &header_attributes(attributes))?;
        Ok(())
    }

    /// Close the sink. Later writes fail with `EndOfStream`; closing again is
    /// a no-op.
    pub fn close(&mut self) -> Result<()> {
        if self.sink.is_closed() {
            return Ok(());
        }
        if self.depth > 0 {
            log::debug!("closing sink with {} element(s) still open", self.depth);
        }
        self.sink.close()?;
        Ok(())
    }

    /// Whether the sink has been closed
    pub fn is_closed(&self) -> bool {
        self.sink.is_closed()
    }

    /// Current nesting depth, 0 outside any element
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Spaces per nesting level
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// The sink being written to
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the writer, returning the sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn indent_width(&self) -> usize {
        self.depth * self.indent
    }

    fn check_closed(&self) -> Result<()> {
        if self.sink.is_closed() {
            Err(XmlStreamError::EndOfStream)
        } else {
            Ok(())
        }
    }
}
