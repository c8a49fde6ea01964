//! Integration tests for the scoped writer

use xml_write_stream::{Attributes, MemorySink, ScopedWriter, Sink, XmlStreamError};

fn writer() -> ScopedWriter<MemorySink> {
    ScopedWriter::new(MemorySink::new())
}

#[test]
fn test_header_with_default_attributes() {
    let mut w = writer();
    w.write_header().unwrap();
    w.close().unwrap();
    assert_eq!(w.sink().as_str(), "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
}

#[test]
fn test_header_attributes_can_be_overwritten() {
    let mut w = writer();
    w.write_header_with(&Attributes::from([("version", "2.0")]))
        .unwrap();
    w.close().unwrap();
    assert_eq!(w.sink().as_str(), "<?xml version=\"2.0\" encoding=\"utf-8\"?>\n");
}

#[test]
fn test_header_inside_tag_fails() {
    let mut w = writer();
    let result = w.open_tag("foo", |foo| foo.write_header());
    assert!(matches!(result, Err(XmlStreamError::InvalidHeaderPosition)));
    assert_eq!(w.sink().as_str(), "<foo>\n</foo>\n");
}

#[test]
fn test_open_tag_without_body() {
    let mut w = writer();
    w.open_tag("maytag", |_| Ok(())).unwrap();
    assert_eq!(w.sink().as_str(), "<maytag>\n</maytag>\n");
}

#[test]
fn test_nesting() {
    let mut w = writer();
    w.open_tag("maytag", |maytag| maytag.open_tag("machine", |_| Ok(())))
        .unwrap();
    assert_eq!(
        w.sink().as_str(),
        "<maytag>\n    <machine>\n    </machine>\n</maytag>\n"
    );
}

#[test]
fn test_open_tag_with_attributes() {
    let mut w = writer();
    w.open_tag_with(
        "maytag",
        &Attributes::from([("type", "washing_machine")]),
        |_| Ok(()),
    )
    .unwrap();
    assert_eq!(
        w.sink().as_str(),
        "<maytag type=\"washing_machine\">\n</maytag>\n"
    );
}

#[test]
fn test_invalid_attribute_key() {
    let mut w = writer();
    let result = w.open_tag_with("maytag", &Attributes::from([("0foo", "")]), |_| Ok(()));
    assert!(matches!(result, Err(XmlStreamError::InvalidAttributeKey(_))));
    assert_eq!(w.sink().as_str(), "");
}

#[test]
fn test_invalid_tag_name_skips_body() {
    let mut w = writer();
    let mut ran = false;
    let result = w.open_tag("9foo", |_| {
        ran = true;
        Ok(())
    });
    assert!(matches!(result, Err(XmlStreamError::InvalidTagName(_))));
    assert!(!ran);
    assert_eq!(w.sink().as_str(), "");
}

#[test]
fn test_digits_and_colons_in_tag_name() {
    let mut w = writer();
    w.open_tag("foo9", |foo| foo.open_tag("bar:baz", |_| Ok(())))
        .unwrap();
    assert_eq!(
        w.sink().as_str(),
        "<foo9>\n    <bar:baz>\n    </bar:baz>\n</foo9>\n"
    );
}

#[test]
fn test_open_tag_after_close_fails() {
    let mut w = writer();
    w.close().unwrap();
    assert!(matches!(
        w.open_tag("foo", |_| Ok(())),
        Err(XmlStreamError::EndOfStream)
    ));
}

#[test]
fn test_write_text_escapes_by_default() {
    let mut w = writer();
    w.open_tag("places", |places| places.write_text("Alaska & Hawai'i"))
        .unwrap();
    assert_eq!(
        w.sink().as_str(),
        "<places>\n    Alaska &amp; Hawai&apos;i\n</places>\n"
    );
}

#[test]
fn test_write_text_unescaped() {
    let mut w = writer();
    w.open_tag("places", |places| places.write_text_unescaped("Alaska & Hawai'i"))
        .unwrap();
    assert_eq!(w.sink().as_str(), "<places>\n    Alaska & Hawai'i\n</places>\n");
}

#[test]
fn test_write_text_without_open_tag() {
    let mut w = writer();
    assert!(matches!(w.write_text("foo"), Err(XmlStreamError::NoTopLevelTag)));
}

#[test]
fn test_write_text_after_close_fails() {
    let mut w = writer();
    w.close().unwrap();
    assert!(matches!(w.write_text("foo"), Err(XmlStreamError::EndOfStream)));
}

#[test]
fn test_close_closes_sink() {
    let mut w = writer();
    w.close().unwrap();
    assert!(w.sink().is_closed());
    w.close().unwrap();
}

#[test]
fn test_matches_stateful_output() {
    use xml_write_stream::StatefulWriter;

    let mut scoped = writer();
    scoped
        .open_tag("foo", |foo| {
            foo.open_tag("bar", |bar| {
                bar.write_text("1 < 2")?;
                bar.open_tag("baz", |_| Ok(()))
            })
        })
        .unwrap();

    let mut stateful = StatefulWriter::new(MemorySink::new());
    stateful.open_tag("foo").unwrap();
    stateful.open_tag("bar").unwrap();
    stateful.write_text("1 < 2").unwrap();
    stateful.open_tag("baz").unwrap();
    stateful.close().unwrap();

    assert_eq!(scoped.sink().as_str(), stateful.sink().as_str());
}
