//! Error types for the Paramshape core library
//!
//! Missing keys and unexpected spec shapes are not errors: they resolve to
//! `null` or to a supplied default. The variants below cover the few inputs
//! that cannot be given any meaning at all.

use thiserror::Error;

/// Main error type for Paramshape operations
#[derive(Error, Debug)]
pub enum Error {
    /// An alias/default element had nothing left once its default was removed
    #[error("Empty field specification at position {position}: expected a source key before the default value")]
    EmptyFieldSpec {
        position: String,
    },

    /// A loosely typed extract descriptor had an unsupported shape
    #[error("Invalid field descriptor: {message}")]
    InvalidDescriptor {
        message: String,
    },

    /// Flattened builder arguments were not an argument array
    #[error("Invalid builder arguments: {message}")]
    InvalidArguments {
        message: String,
    },

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an invalid descriptor error
    pub fn invalid_descriptor(message: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            message: message.into(),
        }
    }

    /// Create an invalid arguments error
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}
