//! Type definitions for the writer state and configuration

use crate::error::{Result, XmlStreamError};
use indexmap::IndexMap;

/// Default indentation width, in spaces per nesting level
pub const DEFAULT_INDENT: usize = 4;

/// Environment variable consulted by [`WriterOptions::from_env`]
pub const INDENT_ENV_VAR: &str = "XML_WRITE_STREAM_INDENT";

/// Ordered attribute set for a single open tag or header
///
/// Keys keep the order in which they were first inserted, which is the order
/// they are written in. Values are stored raw and escaped on output.
///
/// # Examples
///
/// ```
/// use xml_write_stream::Attributes;
///
/// let attrs = Attributes::from([("type", "washing_machine"), ("id", "7")]);
/// let keys: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
/// assert_eq!(keys, ["type", "id"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: IndexMap<String, String>,
}

impl Attributes {
    /// Create an empty attribute set
    pub fn new() -> Self {
        Attributes {
            entries: IndexMap::new(),
        }
    }

    /// Insert or replace an attribute. A replaced key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get the raw value of an attribute
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Overlay `other` on top of `self`: existing keys take the new value in
    /// place, new keys are appended in `other`'s order.
    pub fn merge(&mut self, other: &Attributes) {
        for (key, value) in other.iter() {
            self.insert(key, value);
        }
    }

    /// Iterate over `(key, raw value)` pairs in output order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over keys in output order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Get number of attributes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (key, value) in iter {
            attrs.insert(key, value);
        }
        attrs
    }
}

/// One currently open element on the writer's stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementFrame {
    /// Validated tag name
    pub tag_name: String,
    /// Whether content and the closing tag go on their own indented lines
    pub is_multiline: bool,
}

impl ElementFrame {
    /// Create a new frame
    pub fn new(tag_name: impl Into<String>, is_multiline: bool) -> Self {
        ElementFrame {
            tag_name: tag_name.into(),
            is_multiline,
        }
    }
}

/// Lifecycle phase of a writer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamPhase {
    /// Nothing has been written yet
    NotStarted,
    /// Output has started and the stream accepts further writes
    InProgress,
    /// The root element was closed, or the writer was flushed or closed
    Terminated,
}

/// Writer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterOptions {
    /// Spaces per nesting level
    pub indent: usize,
}

impl WriterOptions {
    /// Create options with the default indentation
    pub fn new() -> Self {
        WriterOptions {
            indent: DEFAULT_INDENT,
        }
    }

    /// Set the indentation width
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Read options from `XML_WRITE_STREAM_INDENT`, falling back to defaults
    /// when the variable is unset or unparsable
    pub fn from_env() -> Self {
        Self::try_from_env().unwrap_or_default()
    }

    /// Read options from `XML_WRITE_STREAM_INDENT`
    ///
    /// Unset means defaults; a value that is not a non-negative integer is an
    /// [`XmlStreamError::InvalidConfig`].
    pub fn try_from_env() -> Result<Self> {
        match std::env::var(INDENT_ENV_VAR) {
            Ok(raw) => Self::parse_indent(&raw).map(|indent| Self::new().with_indent(indent)),
            Err(_) => Ok(Self::new()),
        }
    }

    fn parse_indent(raw: &str) -> Result<usize> {
        raw.trim().parse::<usize>().map_err(|_| {
            XmlStreamError::InvalidConfig(format!("{INDENT_ENV_VAR}='{raw}' is not a valid indent"))
        })
    }
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self::new()
    }
}
