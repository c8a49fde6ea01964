//! Convenience constructors for both writer flavours
//!
//! The plain variants hand back a [`StatefulWriter`] the caller drives and
//! closes. The `_scoped` variants run a body against a [`ScopedWriter`] and
//! close it when the body returns, whether or not the body failed.

use crate::error::Result;
use crate::scoped::ScopedWriter;
use crate::sink::{EncodedSink, Sink, TextEncoding};
use crate::stateful::StatefulWriter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writer type returned by [`open`]
pub type FileWriter = StatefulWriter<EncodedSink<BufWriter<File>>>;

/// Stateful writer over an existing sink
pub fn from_sink<S: Sink>(sink: S) -> StatefulWriter<S> {
    StatefulWriter::new(sink)
}

/// Run `body` with a scoped writer over `sink`, close it, and return the sink
///
/// # Examples
///
/// ```
/// use xml_write_stream::{from_sink_scoped, MemorySink, Sink};
///
/// let sink = from_sink_scoped(MemorySink::new(), |w| {
///     w.open_tag("foo", |foo| foo.write_text("bar"))
/// })
/// .unwrap();
///
/// assert!(sink.is_closed());
/// assert_eq!(sink.as_str(), "<foo>\n    bar\n</foo>\n");
/// ```
pub fn from_sink_scoped<S, F>(sink: S, body: F) -> Result<S>
where
    S: Sink,
    F: FnOnce(&mut ScopedWriter<S>) -> Result<()>,
{
    let mut writer = ScopedWriter::new(sink);
    let outcome = body(&mut writer);
    let closed = writer.close();
    outcome?;
    closed?;
    Ok(writer.into_sink())
}

/// Stateful writer encoding into any `io::Write`
pub fn from_writer<W: Write>(writer: W, encoding: TextEncoding) -> StatefulWriter<EncodedSink<W>> {
    StatefulWriter::new(EncodedSink::with_encoding(writer, encoding))
}

/// Scoped counterpart of [`from_writer`]; returns the destination once closed
pub fn from_writer_scoped<W, F>(writer: W, encoding: TextEncoding, body: F) -> Result<W>
where
    W: Write,
    F: FnOnce(&mut ScopedWriter<EncodedSink<W>>) -> Result<()>,
{
    let sink = from_sink_scoped(EncodedSink::with_encoding(writer, encoding), body)?;
    Ok(sink.into_inner()?)
}

/// Create (or truncate) `path` and return a stateful writer for it
///
/// # Examples
///
/// ```no_run
/// use xml_write_stream::{open, TextEncoding};
///
/// let mut writer = open("output.xml", TextEncoding::utf8())?;
/// writer.write_header()?;
/// writer.open_tag("root")?;
/// writer.write_text("content")?;
/// writer.close()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn open<P: AsRef<Path>>(path: P, encoding: TextEncoding) -> Result<FileWriter> {
    Ok(StatefulWriter::new(file_sink(path.as_ref(), encoding)?))
}

/// Create (or truncate) `path` and run `body` with a scoped writer for it
pub fn open_scoped<P, F>(path: P, encoding: TextEncoding, body: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut ScopedWriter<EncodedSink<BufWriter<File>>>) -> Result<()>,
{
    from_sink_scoped(file_sink(path.as_ref(), encoding)?, body)?;
    Ok(())
}

fn file_sink(path: &Path, encoding: TextEncoding) -> Result<EncodedSink<BufWriter<File>>> {
    let file = File::create(path)?;
    let writer = BufWriter::with_capacity(64 * 1024, file); // 64KB buffer
    log::debug!("writing {} to {}", encoding.name(), path.display());
    Ok(EncodedSink::with_encoding(writer, encoding))
}
