//! Error types for xml-write-stream

use thiserror::Error;

/// Result type alias for xml-write-stream operations
pub type Result<T> = std::result::Result<T, XmlStreamError>;

/// Main error type for all writer operations
#[derive(Error, Debug)]
pub enum XmlStreamError {
    /// Tag name does not match the XML name rules accepted by the writer
    #[error("'{0}' is not a valid tag")]
    InvalidTagName(String),

    /// Attribute key does not match the attribute naming rules
    #[error("'{0}' is not a valid attribute key")]
    InvalidAttributeKey(String),

    /// Text written while no element is open
    #[error("no top-level tag is open to contain the text")]
    NoTopLevelTag,

    /// XML declaration written after other output
    #[error("header must be the first element written.")]
    InvalidHeaderPosition,

    /// Write attempted after the stream was terminated
    #[error("end of stream.")]
    EndOfStream,

    /// Encoding label not known to the encoder
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// Invalid writer configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl XmlStreamError {
    /// True for errors caused by calling writer operations in an illegal order
    /// or with illegal names, as opposed to sink or configuration failures.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            XmlStreamError::InvalidTagName(_)
                | XmlStreamError::InvalidAttributeKey(_)
                | XmlStreamError::NoTopLevelTag
                | XmlStreamError::InvalidHeaderPosition
                | XmlStreamError::EndOfStream
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            XmlStreamError::InvalidTagName("9foo".to_string()).to_string(),
            "'9foo' is not a valid tag"
        );
        assert_eq!(XmlStreamError::EndOfStream.to_string(), "end of stream.");
    }

    #[test]
    fn test_usage_error_classification() {
        assert!(XmlStreamError::NoTopLevelTag.is_usage_error());
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        assert!(!XmlStreamError::from(io).is_usage_error());
    }
}
