//! Error types for generation, rating and persistence operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all poetry operations
#[derive(Debug)]
pub enum PoetryError {
    /// The vocabulary holds no words to draw from
    EmptyVocabulary,

    /// Every word of the vocabulary has been toggled off
    EmptySelection,

    /// History has no rated combinations
    EmptyHistory,

    /// A rating was submitted before any combination was generated
    NothingToRate,

    /// Rating outside the accepted scale
    InvalidRating {
        /// The rejected value
        value: u8,
        /// Highest accepted rating
        max: u8,
    },

    /// Word is not part of the vocabulary
    UnknownWord {
        /// The word that was looked up
        word: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Stored value could not be encoded or decoded
    Serialization {
        /// Storage key involved in the operation
        key: String,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl PoetryError {
    /// Whether this error is a "nothing to do" condition rather than a fault
    ///
    /// Advisory errors are reported to the user as plain messages and never
    /// fail the process.
    pub const fn is_advisory(&self) -> bool {
        matches!(
            self,
            Self::EmptyVocabulary | Self::EmptySelection | Self::EmptyHistory | Self::NothingToRate
        )
    }
}

impl fmt::Display for PoetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyVocabulary => write!(f, "No words are available"),
            Self::EmptySelection => write!(
                f,
                "No words are selected, toggle some words back on to generate from the selection"
            ),
            Self::EmptyHistory => write!(f, "The history is empty"),
            Self::NothingToRate => write!(f, "Generate a combination before rating it"),
            Self::InvalidRating { value, max } => {
                write!(f, "Rating {value} is out of range (expected 0 to {max})")
            }
            Self::UnknownWord { word } => {
                write!(f, "'{word}' is not part of the vocabulary")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Serialization { key, source } => {
                write!(f, "Failed to encode or decode stored value '{key}': {source}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PoetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialization { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for poetry results
pub type Result<T> = std::result::Result<T, PoetryError>;

impl From<std::io::Error> for PoetryError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PoetryError {
    PoetryError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to the path it occurred on
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> PoetryError {
    PoetryError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
