//! Error types for luahl.
//!
//! Highlighting itself is infallible; errors come from configuration
//! validation, category lookup, and I/O in the command-line front end.

use std::fmt;
use std::io;

/// Result type alias for luahl operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for luahl operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while reading source text.
    Io(io::Error),
    /// A configured word list entry is not a plain identifier.
    InvalidWord { list: &'static str, word: String },
    /// A detection marker is the empty string.
    EmptyMarker,
    /// Category name that does not belong to the closed category set.
    UnknownCategory(String),
    /// Compiling a word-list pattern failed (e.g. size limit exceeded).
    Pattern(regex::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidWord { list, word } => {
                write!(f, "invalid {list} entry {word:?}: expected an identifier")
            }
            Self::EmptyMarker => write!(f, "detection marker must not be empty"),
            Self::UnknownCategory(name) => write!(f, "unknown category: {name}"),
            Self::Pattern(e) => write!(f, "pattern error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Pattern(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Self {
        Self::Pattern(e)
    }
}
