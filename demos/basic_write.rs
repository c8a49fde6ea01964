//! Basic example: write a small document with both writer styles
//!
//! Set XML_WRITE_STREAM_INDENT to change the indentation width.

use xml_write_stream::{Attributes, MemorySink, ScopedWriter, StatefulWriter, WriterOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = WriterOptions::try_from_env()?;

    println!("Stateful writer:");
    let mut writer = StatefulWriter::with_options(MemorySink::new(), options);
    writer.write_header()?;
    writer.open_tag("inventory")?;

    let machines = [("washing_machine", "Maytag MVW"), ("dryer", "Maytag MED")];
    for (kind, model) in machines {
        writer.open_tag_with("appliance", &Attributes::from([("type", kind)]))?;
        writer.open_single_line_tag("model")?;
        writer.write_text(model)?;
        writer.close_tag()?;
        writer.close_tag()?;
    }

    // closes <inventory>
    writer.close()?;
    print!("{}", writer.sink().as_str());

    println!("\nScoped writer:");
    let mut writer = ScopedWriter::with_options(MemorySink::new(), options);
    writer.write_header()?;
    writer.open_tag("places", |places| {
        for name in ["Alaska & Hawai'i", "<Puerto Rico>"] {
            places.open_tag("place", |place| place.write_text(name))?;
        }
        Ok(())
    })?;
    writer.close()?;
    print!("{}", writer.sink().as_str());

    Ok(())
}
