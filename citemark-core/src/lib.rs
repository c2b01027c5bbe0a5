//! Case citation and statute reference grammars
//!
//! This crate is the pure text layer of citemark. It finds case citations
//! (`Party v Party [YEAR]`) and statute references (`Some Act (YEAR)`) in a
//! flattened text snapshot and describes the style each kind should receive.
//! It has no notion of a live document; locating and styling matches inside
//! a formatted document is the job of `citemark-engine`.
//!
//! # Example
//!
//! ```rust
//! use citemark_core::{extract, pre_date_span};
//!
//! let set = extract("Lee v The Minister of Foreign Affairs [2003]. The Interpretation Act (1971) applies.");
//! assert_eq!(set.citations[0].respondent, "The Minister of Foreign Affairs");
//! assert_eq!(pre_date_span(&set.acts[0].full_text), "The Interpretation Act");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod extractor;
pub mod html;
pub mod patterns;
pub mod types;

pub use error::{CoreError, Result};
pub use extractor::{extract, MatchExtractor};
pub use html::escape_html;
pub use patterns::{extract_acts, extract_citations, pre_date_span};
pub use types::{ActMatch, CitationMatch, Color, MatchKind, MatchRef, MatchSet, StyleSpec};
