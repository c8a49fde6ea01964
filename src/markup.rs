//! Markup emission helpers shared by the stateful and scoped writers
//!
//! These write already-validated names straight to a sink. Callers validate
//! names and attribute keys first so a rejected call writes nothing.

use crate::escape::escape_attribute_value;
use crate::sink::Sink;
use crate::types::Attributes;
use std::io;

const SPACES: &str = "                                                                ";

/// Attributes every header starts with, before caller overrides
pub fn default_header_attributes() -> Attributes {
    Attributes::from([("version", "1.0"), ("encoding", "utf-8")])
}

/// Header attributes with `overrides` applied on top of the defaults
pub fn header_attributes(overrides: &Attributes) -> Attributes {
    let mut attrs = default_header_attributes();
    attrs.merge(overrides);
    attrs
}

/// Write `width` spaces
pub fn write_indent<S: Sink + ?Sized>(sink: &mut S, mut width: usize) -> io::Result<()> {
    while width > 0 {
        let chunk = width.min(SPACES.len());
        sink.write_str(&SPACES[..chunk])?;
        width -= chunk;
    }
    Ok(())
}

#[inline]
pub fn write_newline<S: Sink + ?Sized>(sink: &mut S) -> io::Result<()> {
    sink.write_str("\n")
}

/// Write `<name k="v" ...>`
pub fn write_open_tag<S: Sink + ?Sized>(
    sink: &mut S,
    name: &str,
    attributes: &Attributes,
) -> io::Result<()> {
    sink.write_str("<")?;
    sink.write_str(name)?;
    if !attributes.is_empty() {
        sink.write_str(" ")?;
        write_attributes(sink, attributes)?;
    }
    sink.write_str(">")
}

/// Write `</name>`
pub fn write_close_tag<S: Sink + ?Sized>(sink: &mut S, name: &str) -> io::Result<()> {
    sink.write_str("</")?;
    sink.write_str(name)?;
    sink.write_str(">")
}

/// Write `k="v"` pairs separated by single spaces, values escaped
pub fn write_attributes<S: Sink + ?Sized>(sink: &mut S, attributes: &Attributes) -> io::Result<()> {
    for (idx, (key, value)) in attributes.iter().enumerate() {
        if idx > 0 {
            sink.write_str(" ")?;
        }
        sink.write_str(key)?;
        sink.write_str("=\"")?;
        sink.write_str(&escape_attribute_value(value))?;
        sink.write_str("\"")?;
    }
    Ok(())
}

/// Write `<?xml k="v" ...?>` and a newline. `attributes` must already include
/// the defaults.
pub fn write_header<S: Sink + ?Sized>(sink: &mut S, attributes: &Attributes) -> io::Result<()> {
    sink.write_str("<?xml ")?;
    write_attributes(sink, attributes)?;
    sink.write_str("?>")?;
    write_newline(sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    #[test]
    fn test_open_tag_with_attributes() {
        let mut sink = MemorySink::new();
        let attrs = Attributes::from([("type", "washing_machine"), ("note", "a<b\n")]);
        write_open_tag(&mut sink, "maytag", &attrs).unwrap();
        assert_eq!(
            sink.as_str(),
            "<maytag type=\"washing_machine\" note=\"a&lt;b&#xA;\">"
        );
    }

    #[test]
    fn test_open_and_close_tag_without_attributes() {
        let mut sink = MemorySink::new();
        write_open_tag(&mut sink, "a", &Attributes::new()).unwrap();
        write_close_tag(&mut sink, "a").unwrap();
        assert_eq!(sink.as_str(), "<a></a>");
    }

    #[test]
    fn test_indent_longer_than_chunk() {
        let mut sink = MemorySink::new();
        write_indent(&mut sink, SPACES.len() * 2 + 3).unwrap();
        assert_eq!(sink.as_str().len(), SPACES.len() * 2 + 3);
        assert!(sink.as_str().bytes().all(|b| b == b' '));
    }

    #[test]
    fn test_header() {
        let mut sink = MemorySink::new();
        let attrs = header_attributes(&Attributes::from([("version", "2.0")]));
        write_header(&mut sink, &attrs).unwrap();
        assert_eq!(sink.as_str(), "<?xml version=\"2.0\" encoding=\"utf-8\"?>\n");
    }
}
