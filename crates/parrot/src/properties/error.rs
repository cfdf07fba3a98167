//! Error types for properties parsing.
//!
//! Responsibilities:
//! - Describe text-level failures (`ParseError`) independent of any file.
//! - Attach the offending path to read and parse failures (`PropertiesError`).
//!
//! Invariants:
//! - Parse errors carry the 1-based line where the logical line started.
//! - Error messages never include property values.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while decoding or parsing properties text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `\u` escape was not followed by exactly four hex digits.
    #[error("Malformed \\uxxxx encoding on line {line}")]
    MalformedUnicodeEscape { line: usize },

    /// The input was decoded as UTF-8 but contained invalid byte sequences.
    #[error("Invalid UTF-8 sequence after byte {valid_up_to}")]
    InvalidUtf8 { valid_up_to: usize },
}

/// Errors raised while loading a single properties file.
#[derive(Error, Debug)]
pub enum PropertiesError {
    #[error("Failed to read properties file at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse properties file at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl PropertiesError {
    /// The file this error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            PropertiesError::Read { path, .. } | PropertiesError::Parse { path, .. } => path,
        }
    }
}
