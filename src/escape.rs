//! Name validation and character escaping shared by both writers
//!
//! Everything here is pure: the validators only inspect their input and the
//! escapers return the input unchanged (borrowed) when nothing needs escaping.

use crate::error::{Result, XmlStreamError};
use crate::types::Attributes;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static TAG_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z:_][A-Za-z0-9.\-_:]*$").unwrap());

static ATTRIBUTE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9\-_]*$").unwrap());

/// Check a tag name against the accepted XML name subset
pub fn validate_tag_name(name: &str) -> Result<()> {
    if TAG_NAME.is_match(name) {
        Ok(())
    } else {
        Err(XmlStreamError::InvalidTagName(name.to_string()))
    }
}

/// Check a single attribute key
pub fn validate_attribute_key(key: &str) -> Result<()> {
    if ATTRIBUTE_KEY.is_match(key) {
        Ok(())
    } else {
        Err(XmlStreamError::InvalidAttributeKey(key.to_string()))
    }
}

/// Check every key of an attribute set, stopping at the first bad one
pub fn validate_attributes(attributes: &Attributes) -> Result<()> {
    attributes.keys().try_for_each(validate_attribute_key)
}

/// Escape text content
///
/// # Examples
///
/// ```
/// use xml_write_stream::escape::escape_text;
///
/// assert_eq!(escape_text("Alaska & Hawai'i"), "Alaska &amp; Hawai&apos;i");
/// ```
pub fn escape_text(text: &str) -> Cow<'_, str> {
    escape_with(text, text_entity)
}

/// Escape an attribute value. Line breaks and tabs become numeric references
/// so they survive attribute-value normalization.
pub fn escape_attribute_value(value: &str) -> Cow<'_, str> {
    escape_with(value, attribute_entity)
}

#[inline]
fn text_entity(byte: u8) -> Option<&'static str> {
    match byte {
        b'&' => Some("&amp;"),
        b'<' => Some("&lt;"),
        b'>' => Some("&gt;"),
        b'"' => Some("&quot;"),
        b'\'' => Some("&apos;"),
        _ => None,
    }
}

#[inline]
fn attribute_entity(byte: u8) -> Option<&'static str> {
    match byte {
        b'\n' => Some("&#xA;"),
        b'\r' => Some("&#xD;"),
        b'\t' => Some("&#x9;"),
        other => text_entity(other),
    }
}

// All escaped characters are ASCII, so splitting at their byte offsets always
// lands on char boundaries.
fn escape_with(input: &str, entity: fn(u8) -> Option<&'static str>) -> Cow<'_, str> {
    let mut escaped: Option<String> = None;
    let mut part_start = 0;

    for (pos, byte) in input.bytes().enumerate() {
        if let Some(replacement) = entity(byte) {
            let out = escaped.get_or_insert_with(|| String::with_capacity(input.len() + 16));
            out.push_str(&input[part_start..pos]);
            out.push_str(replacement);
            part_start = pos + 1;
        }
    }

    match escaped {
        Some(mut out) => {
            out.push_str(&input[part_start..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(input),
    }
}
