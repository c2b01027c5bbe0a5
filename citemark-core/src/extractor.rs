//! Match extraction over a document text snapshot

use crate::patterns::{extract_acts, extract_citations};
use crate::types::MatchSet;

/// Runs the enabled grammars over one snapshot of document text.
///
/// All matches are computed before the document is touched, so styling one
/// match can never shift the offsets of another. Offsets are kept for
/// ordering and reporting only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchExtractor {
    citations: bool,
    acts: bool,
}

impl Default for MatchExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchExtractor {
    /// Extractor with both grammars enabled
    pub fn new() -> Self {
        Self {
            citations: true,
            acts: true,
        }
    }

    /// Enable or disable the case citation grammar
    pub fn with_citations(mut self, enabled: bool) -> Self {
        self.citations = enabled;
        self
    }

    /// Enable or disable the statute grammar
    pub fn with_acts(mut self, enabled: bool) -> Self {
        self.acts = enabled;
        self
    }

    /// Extract every match from `text`
    pub fn extract(&self, text: &str) -> MatchSet {
        MatchSet {
            citations: if self.citations {
                extract_citations(text)
            } else {
                Vec::new()
            },
            acts: if self.acts {
                extract_acts(text)
            } else {
                Vec::new()
            },
        }
    }
}

/// Extract with both grammars enabled
pub fn extract(text: &str) -> MatchSet {
    MatchExtractor::new().extract(text)
}
