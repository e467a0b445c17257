//! Error types for sign image encoding and import.

use std::path::PathBuf;
use thiserror::Error;

/// Why a text candidate was refused by the text-mode gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A character outside `A-Z`, `0-9` and space.
    #[error("invalid character set: {ch:?} at position {position} (allowed: A-Z, 0-9, space)")]
    InvalidCharacter { ch: char, position: usize },

    /// More characters than the sign accepts.
    #[error("too long: {length} characters (maximum {max})")]
    TooLong { length: usize, max: usize },
}

impl ValidationError {
    /// Short rejection reason suitable for an inline error label.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidCharacter { .. } => "invalid character set",
            Self::TooLong { .. } => "too long",
        }
    }
}

/// A text-mode import buffer that is not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid byte sequence for UTF-8 text at offset {offset}")]
pub struct DecodeError {
    /// Offset of the first byte that could not be decoded.
    pub offset: usize,
}

/// Errors raised by the codec, the pattern library and artifact I/O.
#[derive(Debug, Error)]
pub enum SignError {
    /// Text rejected by validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Text-mode import could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Column plane disagrees with the row plane.
    #[error("EPROM planes disagree at column {column}: column byte 0x{found:02X}, expected 0x{expected:02X}")]
    PlaneMismatch { column: usize, expected: u8, found: u8 },

    /// EPROM plane file with the wrong size.
    #[error("EPROM plane must be exactly {expected} bytes, got {actual}")]
    PlaneLength { expected: usize, actual: usize },

    /// No built-in or saved pattern with that name.
    #[error("unknown pattern: {name}")]
    UnknownPattern { name: String },

    /// Text grid could not be parsed into a matrix.
    #[error("invalid grid at line {line}: {message}")]
    GridParse { line: usize, message: String },

    /// Text mode has no message to render.
    #[error("no text entered")]
    EmptyText,

    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, SignError>;

impl SignError {
    /// Create an UnknownPattern error.
    pub fn unknown_pattern(name: impl Into<String>) -> Self {
        Self::UnknownPattern { name: name.into() }
    }

    /// Create a GridParse error.
    pub fn grid_parse(line: usize, message: impl Into<String>) -> Self {
        Self::GridParse {
            line,
            message: message.into(),
        }
    }

    /// Create a FileNotFound error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SignError::unknown_pattern("Moon");
        assert_eq!(format!("{err}"), "unknown pattern: Moon");

        let err = SignError::grid_parse(3, "expected 8 cells, found 7");
        assert_eq!(
            format!("{err}"),
            "invalid grid at line 3: expected 8 cells, found 7"
        );
    }

    #[test]
    fn test_validation_reasons() {
        let err = ValidationError::InvalidCharacter {
            ch: '@',
            position: 4,
        };
        assert_eq!(err.reason(), "invalid character set");
        assert!(format!("{err}").starts_with("invalid character set"));

        let err = ValidationError::TooLong { length: 21, max: 20 };
        assert_eq!(err.reason(), "too long");
        assert_eq!(format!("{err}"), "too long: 21 characters (maximum 20)");
    }

    #[test]
    fn test_transparent_wrapping() {
        let err: SignError = DecodeError { offset: 2 }.into();
        assert_eq!(
            format!("{err}"),
            "invalid byte sequence for UTF-8 text at offset 2"
        );
        assert!(matches!(err, SignError::Decode(DecodeError { offset: 2 })));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: SignError = io_err.into();
        assert!(matches!(err, SignError::Io(_)));
    }
}
