//! Write an XML file in a caller-chosen encoding
//!
//! Usage: cargo run --example encoded_file -- [path] [encoding-label]

use xml_write_stream::{open_scoped, Attributes, TextEncoding};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "output.xml".to_string());
    let encoding = TextEncoding::for_label(&args.next().unwrap_or_else(|| "utf-16be".to_string()))?;

    open_scoped(&path, encoding, |w| {
        w.write_header_with(&Attributes::from([("encoding", encoding.name())]))?;
        w.open_tag("greetings", |greetings| {
            for text in ["Hello", "Grüß Gott", "こんにちは"] {
                greetings.open_tag("greeting", |greeting| greeting.write_text(text))?;
            }
            Ok(())
        })
    })?;

    println!("Wrote {} as {}", path, encoding.name());
    Ok(())
}
