//! Depth-tracked XML writer with an explicit element stack
//!
//! The caller opens and closes elements in any legal order; the writer keeps
//! the stack of open elements, derives indentation from its depth, and closes
//! whatever is still open on [`flush`](StatefulWriter::flush) or
//! [`close`](StatefulWriter::close).

use crate::error::{Result, XmlStreamError};
use crate::escape::{escape_text, validate_attributes, validate_tag_name};
use crate::markup::{
    header_attributes, write_close_tag, write_header, write_indent, write_newline, write_open_tag,
};
use crate::sink::Sink;
use crate::types::{Attributes, ElementFrame, StreamPhase, WriterOptions};

/// Streaming XML writer driven by explicit open/close calls
///
/// The document has a single root: once the root element is closed, or the
/// writer has been flushed or closed, every further write fails with
/// [`XmlStreamError::EndOfStream`]. The cleanup calls (`close_tag`, `flush`,
/// `close`) can always be called again and only ever report sink I/O errors.
///
/// # Examples
///
/// ```
/// use xml_write_stream::{Attributes, MemorySink, StatefulWriter};
///
/// # fn main() -> xml_write_stream::Result<()> {
/// let mut writer = StatefulWriter::new(MemorySink::new());
/// writer.open_tag_with("maytag", &Attributes::from([("type", "washing_machine")]))?;
/// writer.open_single_line_tag("model")?;
/// writer.write_text("A&B")?;
/// writer.close()?;
///
/// assert_eq!(
///     writer.sink().as_str(),
///     "<maytag type=\"washing_machine\">\n    <model>A&amp;B</model>\n</maytag>\n"
/// );
/// # Ok(())
/// # }
/// ```
pub struct StatefulWriter<S: Sink> {
    sink: S,
    stack: Vec<ElementFrame>,
    indent: usize,
    opened: usize,
    written: bool,
    terminated: bool,
    sink_closed: bool,
}

impl<S: Sink> StatefulWriter<S> {
    /// Create a writer with default options
    pub fn new(sink: S) -> Self {
        Self::with_options(sink, WriterOptions::default())
    }

    /// Create a writer with the given indentation options
    pub fn with_options(sink: S, options: WriterOptions) -> Self {
        StatefulWriter {
            sink,
            stack: Vec::new(),
            indent: options.indent,
            opened: 0,
            written: false,
            terminated: false,
            sink_closed: false,
        }
    }

    /// Open a multiline element: its content and closing tag go on their own
    /// indented lines.
    pub fn open_tag(&mut self, name: &str) -> Result<()> {
        self.open_element(name, &Attributes::new(), true)
    }

    /// Open a multiline element with attributes
    pub fn open_tag_with(&mut self, name: &str, attributes: &Attributes) -> Result<()> {
        self.open_element(name, attributes, true)
    }

    /// Open an element written compactly on one line
    pub fn open_single_line_tag(&mut self, name: &str) -> Result<()> {
        self.open_element(name, &Attributes::new(), false)
    }

    /// Open a single-line element with attributes
    pub fn open_single_line_tag_with(&mut self, name: &str, attributes: &Attributes) -> Result<()> {
        self.open_element(name, attributes, false)
    }

    fn open_element(&mut self, name: &str, attributes: &Attributes, multiline: bool) -> Result<()> {
        self.check_eos()?;
        validate_tag_name(name)?;
        validate_attributes(attributes)?;

        let indent_open = self.current().is_some_and(|parent| parent.is_multiline);
        self.written = true;
        if indent_open {
            let width = self.indent_width();
            write_indent(&mut self.sink, width)?;
        }
        write_open_tag(&mut self.sink, name, attributes)?;
        if multiline {
            write_newline(&mut self.sink)?;
        }

        log::trace!("open <{}> at depth {}", name, self.stack.len());
        self.stack.push(ElementFrame::new(name, multiline));
        self.opened += 1;
        Ok(())
    }

    /// Write escaped text inside the innermost open element
    pub fn write_text(&mut self, text: &str) -> Result<()> {
        self.write_text_inner(text, true)
    }

    /// Write text as-is. The caller is responsible for it being valid markup.
    pub fn write_text_unescaped(&mut self, text: &str) -> Result<()> {
        self.write_text_inner(text, false)
    }

    fn write_text_inner(&mut self, text: &str, escape: bool) -> Result<()> {
        self.check_eos()?;
        let multiline = match self.current() {
            Some(frame) => frame.is_multiline,
            None => return Err(XmlStreamError::NoTopLevelTag),
        };

        if multiline {
            let width = self.indent_width();
            write_indent(&mut self.sink, width)?;
        }
        if escape {
            self.sink.write_str(&escape_text(text))?;
        } else {
            self.sink.write_str(text)?;
        }
        if multiline {
            write_newline(&mut self.sink)?;
        }

        log::trace!("text ({} bytes) at depth {}", text.len(), self.stack.len());
        Ok(())
    }

    /// Write the XML declaration with the default attributes
    pub fn write_header(&mut self) -> Result<()> {
        self.write_header_with(&Attributes::new())
    }

    /// Write the XML declaration, `attributes` overriding or extending
    /// `version="1.0" encoding="utf-8"`. Must be the first write.
    pub fn write_header_with(&mut self, attributes: &Attributes) -> Result<()> {
        if self.written || !self.stack.is_empty() {
            return Err(XmlStreamError::InvalidHeaderPosition);
        }
        self.check_eos()?;
        validate_attributes(attributes)?;

        self.written = true;
        write_header(&mut self.sink, &header_attributes(attributes))?;
        log::trace!("header written");
        Ok(())
    }

    /// Close the innermost open element. Does nothing when no element is open
    /// or the writer is terminated.
    pub fn close_tag(&mut self) -> Result<()> {
        if !self.in_open_element() {
            return Ok(());
        }
        let Some(frame) = self.stack.pop() else {
            return Ok(());
        };

        if frame.is_multiline {
            let width = self.indent_width();
            write_indent(&mut self.sink, width)?;
        }
        write_close_tag(&mut self.sink, &frame.tag_name)?;
        let newline = match self.current() {
            Some(parent) => parent.is_multiline,
            None => frame.is_multiline,
        };
        if newline {
            write_newline(&mut self.sink)?;
        }

        log::trace!("close </{}> at depth {}", frame.tag_name, self.stack.len());
        if self.stack.is_empty() {
            log::debug!("root element <{}> closed, end of stream", frame.tag_name);
        }
        Ok(())
    }

    /// Close every open element, flush the sink, and terminate the writer.
    /// The sink itself stays open.
    pub fn flush(&mut self) -> Result<()> {
        if self.in_open_element() {
            log::debug!("flush closing {} open element(s)", self.stack.len());
        }
        while self.in_open_element() {
            self.close_tag()?;
        }
        self.terminated = true;
        self.sink.flush()?;
        Ok(())
    }

    /// Flush, then close the sink. Safe to call any number of times.
    pub fn close(&mut self) -> Result<()> {
        if self.sink_closed {
            return Ok(());
        }
        let flushed = self.flush();
        let closed = self.sink.close();
        self.terminated = true;
        self.sink_closed = true;
        log::debug!("writer closed after {} element(s)", self.opened);

        flushed?;
        closed?;
        Ok(())
    }

    /// True while an element is open and the writer is not terminated
    pub fn in_open_element(&self) -> bool {
        !self.stack.is_empty() && !self.terminated
    }

    /// True once the root element has been closed or the writer was flushed
    /// or closed
    pub fn is_terminated(&self) -> bool {
        (self.stack.is_empty() && self.opened > 0) || self.terminated
    }

    /// Where the writer is in the document lifecycle
    pub fn phase(&self) -> StreamPhase {
        if self.is_terminated() {
            StreamPhase::Terminated
        } else if self.written {
            StreamPhase::InProgress
        } else {
            StreamPhase::NotStarted
        }
    }

    /// Number of open elements
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Open elements, outermost first
    pub fn stack(&self) -> &[ElementFrame] {
        &self.stack
    }

    /// Innermost open element
    pub fn current(&self) -> Option<&ElementFrame> {
        self.stack.last()
    }

    /// Spaces per nesting level
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// The sink being written to
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the writer, returning the sink as-is. Open elements are not
    /// closed; call [`flush`](Self::flush) first for a complete document.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn indent_width(&self) -> usize {
        self.stack.len() * self.indent
    }

    fn check_eos(&self) -> Result<()> {
        if self.is_terminated() {
            Err(XmlStreamError::EndOfStream)
        } else {
            Ok(())
        }
    }
}
