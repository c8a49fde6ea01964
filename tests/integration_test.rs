//! Integration tests for the factory functions and encoded output

use std::fs;
use tempfile::NamedTempFile;
use xml_write_stream::{
    from_sink, from_sink_scoped, from_writer, from_writer_scoped, open, open_scoped, MemorySink,
    Sink, TextEncoding,
};

const FOO_BAR: &str = "<foo>\n    bar\n</foo>\n";

fn decode_utf16be(bytes: &[u8]) -> String {
    let (text, had_errors) = encoding_rs::UTF_16BE.decode_without_bom_handling(bytes);
    assert!(!had_errors);
    text.into_owned()
}

#[test]
fn test_from_sink_returns_stateful_writer() {
    let mut writer = from_sink(MemorySink::new());
    writer.open_tag("foo").unwrap();
    writer.write_text("bar").unwrap();
    writer.close().unwrap();
    assert_eq!(writer.sink().as_str(), FOO_BAR);
}

#[test]
fn test_from_sink_scoped_closes_after_body() {
    let sink = from_sink_scoped(MemorySink::new(), |w| {
        w.open_tag("foo", |foo| foo.write_text("bar"))
    })
    .unwrap();
    assert!(sink.is_closed());
    assert_eq!(sink.as_str(), FOO_BAR);
}

#[test]
fn test_from_writer_with_different_encoding() {
    let bytes = from_writer_scoped(Vec::new(), TextEncoding::utf16be(), |w| {
        w.open_tag("foo", |foo| foo.write_text("bar"))
    })
    .unwrap();

    assert_ne!(bytes, FOO_BAR.as_bytes());
    assert_eq!(decode_utf16be(&bytes), FOO_BAR);
}

#[test]
fn test_from_writer_stateful_flushes_to_destination() {
    let mut writer = from_writer(Vec::new(), TextEncoding::utf8());
    writer.open_tag("foo").unwrap();
    writer.write_text("bar").unwrap();
    writer.flush().unwrap();
    assert_eq!(writer.sink().get_ref().as_slice(), FOO_BAR.as_bytes());
}

#[test]
fn test_open_file_stateful() {
    let temp = NamedTempFile::new().unwrap();

    let mut writer = open(temp.path(), TextEncoding::utf8()).unwrap();
    writer.write_header().unwrap();
    writer.open_tag("foo").unwrap();
    writer.write_text("bar").unwrap();
    writer.close().unwrap();
    drop(writer);

    let written = fs::read_to_string(temp.path()).unwrap();
    assert_eq!(
        written,
        format!("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n{FOO_BAR}")
    );
}

#[test]
fn test_open_file_scoped_with_different_encoding() {
    let temp = NamedTempFile::new().unwrap();

    open_scoped(temp.path(), TextEncoding::utf16be(), |w| {
        w.open_tag("foo", |foo| foo.write_text("bar"))
    })
    .unwrap();

    let written = fs::read(temp.path()).unwrap();
    assert_ne!(written, FOO_BAR.as_bytes());
    assert_eq!(decode_utf16be(&written), FOO_BAR);
}

#[test]
fn test_encoding_label_lookup() {
    let latin1 = TextEncoding::for_label("iso-8859-1").unwrap();
    let bytes = from_writer_scoped(Vec::new(), latin1, |w| {
        w.open_tag("name", |name| name.write_text("José"))
    })
    .unwrap();
    assert_eq!(bytes, b"<name>\n    Jos\xe9\n</name>\n".to_vec());
}

#[test]
fn test_large_document_streams_through_buffer() {
    let mut writer = from_writer(Vec::new(), TextEncoding::utf8());
    writer.open_tag("rows").unwrap();
    for i in 0..2_000 {
        writer.open_single_line_tag("row").unwrap();
        writer.write_text(&format!("value {i}")).unwrap();
        writer.close_tag().unwrap();
    }
    writer.close().unwrap();

    let text = String::from_utf8(writer.into_sink().into_inner().unwrap()).unwrap();
    assert!(text.starts_with("<rows>\n    <row>value 0</row>\n"));
    assert!(text.ends_with("    <row>value 1999</row>\n</rows>\n"));
    assert_eq!(text.lines().count(), 2_002);
}
