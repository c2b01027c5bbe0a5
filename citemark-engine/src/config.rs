//! Configuration types for the engine

use crate::document::SearchOptions;
use citemark_core::{MatchExtractor, MatchKind, StyleSpec};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Style for case citations
    pub citation_style: StyleSpec,
    /// Style for statute references
    pub act_style: StyleSpec,
    /// Options for both the full-match and the pre-date search
    pub search: SearchOptions,
    /// Run the case citation grammar
    pub citations: bool,
    /// Run the statute grammar
    pub acts: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            citation_style: StyleSpec::citation(),
            act_style: StyleSpec::act(),
            search: SearchOptions::literal(),
            citations: true,
            acts: true,
        }
    }
}

impl EngineConfig {
    /// Only case citations
    pub fn citations_only() -> Self {
        Self {
            acts: false,
            ..Self::default()
        }
    }

    /// Only statute references
    pub fn acts_only() -> Self {
        Self {
            citations: false,
            ..Self::default()
        }
    }

    /// Style for a grammar
    pub fn style_for(&self, kind: MatchKind) -> StyleSpec {
        match kind {
            MatchKind::Citation => self.citation_style,
            MatchKind::Act => self.act_style,
        }
    }

    /// Extractor matching the enabled grammars
    pub fn extractor(&self) -> MatchExtractor {
        MatchExtractor::new()
            .with_citations(self.citations)
            .with_acts(self.acts)
    }
}
