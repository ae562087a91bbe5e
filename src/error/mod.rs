//! Error types for the fluent-utils crate
//!
//! A single error enum covers every fallible operation in the crate.
//! Parse failures that callers are expected to branch on (dates, phone
//! numbers, YouTube hashes) are reported as absent results instead; the
//! variants here cover invalid arguments, unparseable numeric text and I/O.

use thiserror::Error;

/// Main error type for the fluent-utils crate
#[derive(Error, Debug, Clone)]
pub enum UtilsError {
    // Argument errors

    /// An argument value the operation cannot work with
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Locale tag that cannot be resolved against the embedded locale data
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    // Parse errors

    /// Numeric text that does not parse under the given locale
    #[error("Unparseable number: {0}")]
    NumberParse(String),

    // Rendering errors

    /// Barcode payload or renderer error
    #[error("Barcode error: {0}")]
    Barcode(String),

    // External errors

    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(String),

    /// Custom error with message
    #[error("{0}")]
    Custom(String),
}

/// Type alias for Results using UtilsError
pub type Result<T> = std::result::Result<T, UtilsError>;

impl UtilsError {
    /// Create a custom error with a message
    pub fn custom<S: Into<String>>(msg: S) -> Self {
        UtilsError::Custom(msg.into())
    }

    /// Create an invalid-argument error with a message
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        UtilsError::InvalidArgument(msg.into())
    }

    /// Check if this error is an argument-validation error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            UtilsError::InvalidArgument(_) | UtilsError::UnknownLocale(_)
        )
    }

    /// Check if this error is a parse error
    pub fn is_parse_error(&self) -> bool {
        matches!(self, UtilsError::NumberParse(_))
    }

    /// Check if this error is an I/O error
    pub fn is_io_error(&self) -> bool {
        matches!(self, UtilsError::Io(_))
    }
}

// Implement From traits for easier error conversion
impl From<std::io::Error> for UtilsError {
    fn from(error: std::io::Error) -> Self {
        UtilsError::Io(error.to_string())
    }
}

impl From<barcoders::error::Error> for UtilsError {
    fn from(error: barcoders::error::Error) -> Self {
        UtilsError::Barcode(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UtilsError::InvalidArgument("chunk size must be at least 2".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid argument: chunk size must be at least 2"
        );

        let err = UtilsError::NumberParse("12.34.56".to_string());
        assert_eq!(err.to_string(), "Unparseable number: 12.34.56");

        let err = UtilsError::custom("Custom error message");
        assert_eq!(err.to_string(), "Custom error message");
    }

    #[test]
    fn test_error_categories() {
        // Argument errors
        assert!(UtilsError::invalid_argument("bad").is_invalid_argument());
        assert!(UtilsError::UnknownLocale("xx_XX".to_string()).is_invalid_argument());

        // Parse errors
        assert!(UtilsError::NumberParse("abc".to_string()).is_parse_error());
        assert!(!UtilsError::NumberParse("abc".to_string()).is_io_error());

        // I/O errors via From
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: UtilsError = io.into();
        assert!(err.is_io_error());
    }
}
