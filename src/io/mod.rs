#[cfg(feature = "svg-io")]
pub mod svg;

use crate::errors::ValidationError;

/// Generic I/O errors raised while exporting scenes.
///
/// Exporters are behind cargo feature‑flags.
/// When a feature is disabled the corresponding code path is never reached.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),
    Validation(ValidationError),

    MalformedInput(String),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),
            Validation(error) => write!(f, "Validation failed: {error}"),

            MalformedInput(msg) => write!(f, "Input is malformed: {msg}"),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

impl From<ValidationError> for IoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}
