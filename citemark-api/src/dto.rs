//! Data transfer objects for the public API

use crate::host::HostType;
use crate::sink::Content;
use citemark_core::{MatchKind, MatchRef, MatchSet};
use citemark_engine::RunSummary;

/// One match as reported to API consumers
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchDTO {
    /// Grammar that produced the match
    pub kind: MatchKind,
    /// Whole matched text, year included
    pub full_text: String,
    /// The styled portion
    pub pre_date: String,
    /// Four-digit year
    pub year: String,
    /// Character offset in the document text
    pub char_offset: usize,
    /// Byte offset in the document text
    pub byte_offset: usize,
    /// First party (citations only)
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub claimant: Option<String>,
    /// Second party (citations only)
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub respondent: Option<String>,
    /// Act name (acts only)
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub act: Option<String>,
}

impl From<MatchRef<'_>> for MatchDTO {
    fn from(m: MatchRef<'_>) -> Self {
        let (byte_offset, claimant, respondent, act) = match m {
            MatchRef::Citation(c) => (
                c.byte_offset,
                Some(c.claimant.clone()),
                Some(c.respondent.clone()),
                None,
            ),
            MatchRef::Act(a) => (a.byte_offset, None, None, Some(a.name_part.clone())),
        };

        Self {
            kind: m.kind(),
            full_text: m.full_text().to_string(),
            pre_date: m.pre_date().to_string(),
            year: m.year().to_string(),
            char_offset: m.char_offset(),
            byte_offset,
            claimant,
            respondent,
            act,
        }
    }
}

impl MatchDTO {
    /// Every match in processing order
    pub fn from_set(set: &MatchSet) -> Vec<MatchDTO> {
        set.iter().map(MatchDTO::from).collect()
    }
}

/// Run metadata
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Host the run executed in
    pub host: HostType,
    /// Wall-clock time of the run
    pub processing_time_ms: u64,
}

/// Everything one pipeline run produced
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Matches, citations first
    pub matches: Vec<MatchDTO>,
    /// Styling counters
    pub summary: RunSummary,
    /// What was written to the sink
    pub report: Content,
    /// Run metadata
    pub metadata: Metadata,
}

impl Output {
    /// Number of case citations
    pub fn citation_count(&self) -> usize {
        self.summary.citations
    }

    /// Number of statute references
    pub fn act_count(&self) -> usize {
        self.summary.acts
    }

    /// Serialize to pretty JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
