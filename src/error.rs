//! Unified error types for chatwrapped.
//!
//! This module provides a single [`WrappedError`] enum for everything that can
//! abort a run. Per-message anomalies (a missing sender, a timestamp without a
//! delimiter) are not errors: the extractor skips those messages and keeps
//! going, see [`SkipReason`](crate::extractor::SkipReason).
//!
//! # Error Handling Philosophy
//!
//! - **Element-level** problems are recovered locally (skip and continue)
//! - **Document-level** read failures abort the whole walk, because the
//!   year-boundary logic depends on seeing every document in order
//! - **Library users** get typed errors they can match on

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatwrapped operations.
///
/// # Example
///
/// ```rust
/// use chatwrapped::error::Result;
/// use chatwrapped::ChatMessage;
///
/// fn my_function() -> Result<Vec<ChatMessage>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, WrappedError>;

/// The error type for all chatwrapped operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WrappedError {
    /// An I/O error occurred outside of document reading.
    ///
    /// This typically happens when:
    /// - The archive directory doesn't exist
    /// - An output file cannot be created
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A document of the archive could not be read.
    ///
    /// Archive completeness is a precondition of the walk, so this is fatal.
    #[error("Failed to read document {index}{}: {source}", path.as_ref().map(|p| format!(" ({})", p.display())).unwrap_or_default())]
    DocumentRead {
        /// 1-based document index
        index: usize,
        /// The file path, if the document lives on disk
        path: Option<PathBuf>,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The document source reported no document for an index inside the
    /// archive's advertised length.
    #[error("Document {index} is missing from the archive")]
    MissingDocument {
        /// 1-based document index
        index: usize,
    },

    /// A configured CSS selector could not be parsed.
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector {
        /// The selector as configured
        selector: String,
        /// Parser message
        message: String,
    },

    /// The archive itself is unusable (e.g. contains no documents).
    #[error("Invalid archive: {message}")]
    InvalidArchive {
        /// Description of what's wrong
        message: String,
    },

    /// An output format or file extension is not supported.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What kind of format was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for WrappedError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        WrappedError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl WrappedError {
    /// Creates a document read error.
    pub fn document_read(index: usize, path: Option<PathBuf>, source: io::Error) -> Self {
        WrappedError::DocumentRead {
            index,
            path,
            source,
        }
    }

    /// Creates a missing document error.
    pub fn missing_document(index: usize) -> Self {
        WrappedError::MissingDocument { index }
    }

    /// Creates an invalid selector error.
    pub fn invalid_selector(selector: impl Into<String>, message: impl Into<String>) -> Self {
        WrappedError::InvalidSelector {
            selector: selector.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid archive error.
    pub fn invalid_archive(message: impl Into<String>) -> Self {
        WrappedError::InvalidArchive {
            message: message.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        WrappedError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, WrappedError::Io(_))
    }

    /// Returns `true` if a document of the archive could not be obtained.
    pub fn is_document_read(&self) -> bool {
        matches!(
            self,
            WrappedError::DocumentRead { .. } | WrappedError::MissingDocument { .. }
        )
    }

    /// Returns `true` if this is a selector configuration error.
    pub fn is_invalid_selector(&self) -> bool {
        matches!(self, WrappedError::InvalidSelector { .. })
    }

    /// Returns the 1-based document index this error refers to, if any.
    pub fn document_index(&self) -> Option<usize> {
        match self {
            WrappedError::DocumentRead { index, .. } | WrappedError::MissingDocument { index } => {
                Some(*index)
            }
            _ => None,
        }
    }
}
