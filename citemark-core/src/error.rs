//! Core error types (deterministic only)

use thiserror::Error;

/// Core errors (no I/O, no document failures)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A color name that has no [`Color`](crate::Color) counterpart
    #[error("unknown color '{name}' (expected one of: red, blue)")]
    UnknownColor {
        /// The name that failed to parse
        name: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
