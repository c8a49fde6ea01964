//! Buffered, encoding-aware sink over any `io::Write`

use super::{closed_error, Sink};
use crate::error::{Result, XmlStreamError};
use encoding_rs::Encoding;
use std::fmt;
use std::io::{self, Write};

const BUFFER_CAPACITY: usize = 8192;
const FLUSH_THRESHOLD: usize = 4096;

/// Character encoding applied by an [`EncodedSink`]
///
/// UTF-16 is encoded directly since `encoding_rs` only decodes it. All other
/// encodings go through `encoding_rs`, which writes unmappable characters as
/// numeric character references, so the output stays well-formed.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding {
    encoding: &'static Encoding,
}

impl TextEncoding {
    pub fn utf8() -> Self {
        TextEncoding {
            encoding: encoding_rs::UTF_8,
        }
    }

    pub fn utf16be() -> Self {
        TextEncoding {
            encoding: encoding_rs::UTF_16BE,
        }
    }

    pub fn utf16le() -> Self {
        TextEncoding {
            encoding: encoding_rs::UTF_16LE,
        }
    }

    /// Look up an encoding by its WHATWG label, e.g. `"utf-16be"` or `"latin1"`
    pub fn for_label(label: &str) -> Result<Self> {
        Encoding::for_label(label.trim().as_bytes())
            .map(|encoding| TextEncoding { encoding })
            .ok_or_else(|| XmlStreamError::UnsupportedEncoding(label.to_string()))
    }

    /// Canonical name of the encoding
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// The underlying `encoding_rs` encoding
    pub fn as_encoding_rs(&self) -> &'static Encoding {
        self.encoding
    }

    /// Append `text` to `out` in this encoding
    pub fn encode_into(&self, text: &str, out: &mut Vec<u8>) {
        if self.encoding == encoding_rs::UTF_8 {
            out.extend_from_slice(text.as_bytes());
        } else if self.encoding == encoding_rs::UTF_16BE {
            out.reserve(text.len() * 2);
            for unit in text.encode_utf16() {
                out.extend_from_slice(&unit.to_be_bytes());
            }
        } else if self.encoding == encoding_rs::UTF_16LE {
            out.reserve(text.len() * 2);
            for unit in text.encode_utf16() {
                out.extend_from_slice(&unit.to_le_bytes());
            }
        } else {
            let (bytes, _, _) = self.encoding.encode(text);
            out.extend_from_slice(&bytes);
        }
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        TextEncoding::utf8()
    }
}

impl fmt::Debug for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextEncoding").field(&self.name()).finish()
    }
}

/// Sink that encodes text and writes it to `W` through an internal buffer
///
/// Output reaches `W` once the buffer passes 4KB, on [`Sink::flush`], or on
/// [`Sink::close`]. Anything still buffered when the sink is dropped without
/// a flush is lost.
pub struct EncodedSink<W: Write> {
    writer: W,
    encoding: TextEncoding,
    buffer: Vec<u8>,
    closed: bool,
}

impl<W: Write> EncodedSink<W> {
    /// Create a UTF-8 sink
    pub fn new(writer: W) -> Self {
        Self::with_encoding(writer, TextEncoding::utf8())
    }

    /// Create a sink with an explicit encoding
    pub fn with_encoding(writer: W, encoding: TextEncoding) -> Self {
        EncodedSink {
            writer,
            encoding,
            buffer: Vec::with_capacity(BUFFER_CAPACITY),
            closed: false,
        }
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Drain the buffer and hand back the destination
    pub fn into_inner(mut self) -> io::Result<W> {
        self.drain()?;
        Ok(self.writer)
    }

    fn drain(&mut self) -> io::Result<()> {
        if !self.buffer.is_empty() {
            log::trace!(target: "xml_write_stream::sink", "writing {} buffered bytes", self.buffer.len());
            self.writer.write_all(&self.buffer)?;
            self.buffer.clear();
        }
        Ok(())
    }
}

impl<W: Write> Sink for EncodedSink<W> {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        if self.closed {
            return Err(closed_error());
        }
        self.encoding.encode_into(text, &mut self.buffer);
        if self.buffer.len() > FLUSH_THRESHOLD {
            self.drain()?;
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.drain()?;
        self.writer.flush()
    }

    fn close(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.flush()?;
        self.closed = true;
        log::debug!(target: "xml_write_stream::sink", "closed {} sink", self.encoding.name());
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
