//! # xml-write-stream
//!
//! A forward-only streaming XML writer. Markup goes straight to the output
//! sink as you issue open/text/close commands; no document tree is ever built
//! in memory.
//!
//! ## Features
//!
//! - **Always well-formed**: text and attribute values are escaped, tag names
//!   and attribute keys are validated before anything is written
//! - **Two styles**: an explicit-stack [`StatefulWriter`] and a closure-based
//!   [`ScopedWriter`]
//! - **Pluggable sinks**: in-memory, any `io::Write`, or a file, in UTF-8,
//!   UTF-16 or any encoding `encoding_rs` knows
//! - **Typed errors** for every misuse, see [`XmlStreamError`];
//!   [`XmlStreamError::is_usage_error`] tells caller mistakes apart from sink
//!   I/O failures
//!
//! ## Quick Start
//!
//! ### Stateful Writer
//!
//! ```rust
//! use xml_write_stream::{from_sink, Attributes, MemorySink};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut writer = from_sink(MemorySink::new());
//!
//! writer.write_header()?;
//! writer.open_tag_with("maytag", &Attributes::from([("type", "washing_machine")]))?;
//! writer.write_text("Alaska & Hawai'i")?;
//!
//! // closes <maytag> and the sink
//! writer.close()?;
//!
//! assert_eq!(
//!     writer.sink().as_str(),
//!     "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
//!      <maytag type=\"washing_machine\">\n    Alaska &amp; Hawai&apos;i\n</maytag>\n"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ### Scoped Writer
//!
//! ```rust
//! use xml_write_stream::{from_writer_scoped, TextEncoding};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = from_writer_scoped(Vec::new(), TextEncoding::utf8(), |w| {
//!     w.open_tag("maytag", |maytag| maytag.open_tag("machine", |_| Ok(())))
//! })?;
//!
//! assert_eq!(
//!     String::from_utf8(bytes)?,
//!     "<maytag>\n    <machine>\n    </machine>\n</maytag>\n"
//! );
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod escape;
pub mod factory;
pub mod markup;
pub mod scoped;
pub mod sink;
pub mod stateful;
pub mod types;

pub use error::{Result, XmlStreamError};
pub use factory::{from_sink, from_sink_scoped, from_writer, from_writer_scoped, open, open_scoped};
pub use scoped::ScopedWriter;
pub use sink::{EncodedSink, MemorySink, Sink, TextEncoding};
pub use stateful::StatefulWriter;
pub use types::{Attributes, ElementFrame, StreamPhase, WriterOptions};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_imports() {
        // Test that all public types are accessible
        let _ = std::marker::PhantomData::<XmlStreamError>;
        let _ = std::marker::PhantomData::<StatefulWriter<MemorySink>>;
        let _ = std::marker::PhantomData::<ScopedWriter<EncodedSink<Vec<u8>>>>;
    }
}
