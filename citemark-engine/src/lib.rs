//! Locating and styling citations inside a formatted document
//!
//! This crate connects the text grammars of `citemark-core` to a live,
//! formatted document reached through the [`Document`] trait. A run extracts
//! matches from a text snapshot, re-locates each one with a two-phase search
//! ([`RangeResolver`]) and styles the pre-date text ([`Formatter`]), flushing
//! the document once per match.

#![warn(missing_docs)]

pub mod config;
pub mod document;
pub mod error;
pub mod formatter;
pub mod processor;
pub mod resolver;

// Re-export key types
pub use config::EngineConfig;
pub use document::{
    Document, Font, FontPatch, InMemoryDocument, Scope, SearchOptions, StyledRun, TextRange,
};
pub use error::{DocumentError, DocumentResult, EngineError, Result};
pub use formatter::{Formatter, StyleChange};
pub use processor::{CitationProcessor, CitationProcessorBuilder, MatchPreview, Output, RunSummary};
pub use resolver::{OuterRange, RangeResolver, Resolution, SkipReason};

// Re-export from core for convenience
pub use citemark_core::{Color, MatchKind, MatchSet, StyleSpec};
