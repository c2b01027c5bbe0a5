//! Layered error types
//!
//! [`DocumentError`] is what a document collaborator reports;
//! [`EngineError`] is what the engine surfaces to its callers.

use thiserror::Error;

/// Failures reported by a [`Document`](crate::document::Document) implementation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The document text could not be read
    #[error("document unavailable: {0}")]
    Unavailable(String),

    /// A search request was rejected or failed
    #[error("search for '{needle}' failed: {reason}")]
    Search {
        /// The literal that was searched for
        needle: String,
        /// Why the search failed
        reason: String,
    },

    /// A font read or write on a single range failed
    #[error("style operation failed: {0}")]
    Style(String),

    /// A range handle does not address the document
    #[error("range {start}..{end} is outside the document (length {len})")]
    InvalidRange {
        /// Range start
        start: usize,
        /// Range end
        end: usize,
        /// Document length
        len: usize,
    },

    /// Pending reads and writes could not be flushed
    #[error("sync failed: {0}")]
    Sync(String),
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Document collaborator failure
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for document collaborator calls
pub type DocumentResult<T> = std::result::Result<T, DocumentError>;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
