//! Main citation processor and builder
//!
//! One run reads a text snapshot of the document, extracts every match, then
//! re-locates and styles each match in order: all citations first, then all
//! acts. Failures are absorbed at the narrowest scope that still lets the run
//! move forward. A failed range write skips that range; a failed search or
//! sync skips that match. Only a failure to read the document text ends the
//! run early.

use crate::config::EngineConfig;
use crate::document::Document;
use crate::error::{DocumentResult, EngineError, Result};
use crate::formatter::Formatter;
use crate::resolver::{RangeResolver, Resolution, SkipReason};
use citemark_core::{MatchKind, MatchRef, MatchSet, StyleSpec};
use log::{debug, info, warn};

/// Counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    /// Case citations extracted
    pub citations: usize,
    /// Statute references extracted
    pub acts: usize,
    /// Outer ranges found by full-match searches
    pub outer_ranges: usize,
    /// Outer ranges in which the pre-date text was not found
    pub empty_outer_ranges: usize,
    /// Sub-ranges styled and committed
    pub formatted_ranges: usize,
    /// Sub-ranges whose style write failed
    pub failed_ranges: usize,
    /// Matches with nothing to style (empty pre-date text or not found)
    pub skipped_matches: usize,
    /// Matches abandoned because a search or sync failed
    pub failed_matches: usize,
}

impl RunSummary {
    /// True when any range or match failed
    pub fn has_failures(&self) -> bool {
        self.failed_ranges > 0 || self.failed_matches > 0
    }
}

/// Everything a run produced
#[derive(Debug, Clone)]
pub struct Output {
    /// Matches extracted from the snapshot
    pub matches: MatchSet,
    /// What happened to them
    pub summary: RunSummary,
}

/// Per-match counters, merged into the summary once the match is committed
#[derive(Debug, Default)]
struct MatchOutcome {
    skipped: Option<SkipReason>,
    outer_ranges: usize,
    empty_outer_ranges: usize,
    formatted: usize,
    failed: usize,
}

/// Resolution preview for one match, without styling
#[derive(Debug, Clone)]
pub struct MatchPreview<R> {
    /// Grammar that produced the match
    pub kind: MatchKind,
    /// Full match text
    pub full_text: String,
    /// Where the match would be styled, or why it would not be
    pub resolution: DocumentResult<Resolution<R>>,
}

/// Main citation processor
pub struct CitationProcessor {
    config: EngineConfig,
    resolver: RangeResolver,
}

impl Default for CitationProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl CitationProcessor {
    /// Processor with default configuration
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Processor with a custom configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            resolver: RangeResolver::new(config.search),
            config,
        }
    }

    /// Current configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read the document text and extract every match
    pub fn extract<D: Document>(&self, doc: &mut D) -> Result<MatchSet> {
        let text = doc.full_text()?;
        let matches = self.config.extractor().extract(&text);
        debug!(
            "Extracted {} citations and {} acts from {} characters",
            matches.citations.len(),
            matches.acts.len(),
            text.chars().count()
        );
        Ok(matches)
    }

    /// Extract and style in one go
    pub fn process<D: Document>(&self, doc: &mut D) -> Result<Output> {
        let matches = self.extract(doc)?;
        let summary = self.format_matches(doc, &matches);
        Ok(Output { matches, summary })
    }

    /// Style previously extracted matches. Never fails as a whole; failures
    /// are logged and counted in the summary.
    pub fn format_matches<D: Document>(&self, doc: &mut D, matches: &MatchSet) -> RunSummary {
        let mut summary = RunSummary {
            citations: matches.citations.len(),
            acts: matches.acts.len(),
            ..RunSummary::default()
        };

        for m in matches.iter() {
            let style = self.config.style_for(m.kind());
            debug!("Processing {} {:?}", m.kind().label(), m.full_text());

            match self.format_match(doc, m, &style) {
                Ok(outcome) => {
                    summary.outer_ranges += outcome.outer_ranges;
                    summary.empty_outer_ranges += outcome.empty_outer_ranges;
                    summary.formatted_ranges += outcome.formatted;
                    summary.failed_ranges += outcome.failed;
                    if outcome.skipped.is_some() {
                        summary.skipped_matches += 1;
                    }
                }
                Err(err) => {
                    warn!(
                        "Error processing {} match {:?}: {}",
                        m.kind().label(),
                        m.full_text(),
                        err
                    );
                    summary.failed_matches += 1;
                }
            }
        }

        info!(
            "Formatted {} ranges for {} citations and {} acts ({} skipped, {} failed matches, {} failed ranges)",
            summary.formatted_ranges,
            summary.citations,
            summary.acts,
            summary.skipped_matches,
            summary.failed_matches,
            summary.failed_ranges
        );

        summary
    }

    /// Resolve every match without styling anything
    pub fn preview<D: Document>(&self, doc: &mut D, matches: &MatchSet) -> Vec<MatchPreview<D::Range>> {
        matches
            .iter()
            .map(|m| MatchPreview {
                kind: m.kind(),
                full_text: m.full_text().to_string(),
                resolution: self.resolver.resolve(doc, m),
            })
            .collect()
    }

    fn format_match<D: Document>(
        &self,
        doc: &mut D,
        m: MatchRef<'_>,
        style: &StyleSpec,
    ) -> DocumentResult<MatchOutcome> {
        let mut outcome = MatchOutcome::default();

        let pre_date = m.pre_date();
        if pre_date.is_empty() {
            debug!("Skipping {:?}: nothing precedes the date", m.full_text());
            outcome.skipped = Some(SkipReason::EmptyPreDate);
            return Ok(outcome);
        }

        let outers = self.resolver.outer_ranges(doc, m.full_text())?;
        if outers.is_empty() {
            debug!("Skipping {:?}: not found in the document", m.full_text());
            outcome.skipped = Some(SkipReason::NotFound);
            return Ok(outcome);
        }
        outcome.outer_ranges = outers.len();

        for outer in &outers {
            let targets = self.resolver.targets(doc, outer, pre_date)?;
            if targets.is_empty() {
                // The occurrence stays unstyled; the search is never widened
                debug!("Pre-date text {:?} not found inside {:?}", pre_date, outer);
                outcome.empty_outer_ranges += 1;
            }

            for target in &targets {
                match Formatter::apply(doc, target, style) {
                    Ok(_) => outcome.formatted += 1,
                    Err(err) => {
                        warn!("Failed to set color/italic for {:?}: {}", target, err);
                        outcome.failed += 1;
                    }
                }
            }
        }

        // One commit per match
        doc.sync()?;
        Ok(outcome)
    }
}

/// Builder for [`CitationProcessor`]
#[derive(Debug, Default)]
pub struct CitationProcessorBuilder {
    config: EngineConfig,
}

impl CitationProcessorBuilder {
    /// Builder starting from the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Style for case citations
    pub fn citation_style(mut self, style: StyleSpec) -> Self {
        self.config.citation_style = style;
        self
    }

    /// Style for statute references
    pub fn act_style(mut self, style: StyleSpec) -> Self {
        self.config.act_style = style;
        self
    }

    /// Case-sensitive searches
    pub fn match_case(mut self, enabled: bool) -> Self {
        self.config.search.match_case = enabled;
        self
    }

    /// Whole-word searches
    pub fn match_whole_word(mut self, enabled: bool) -> Self {
        self.config.search.match_whole_word = enabled;
        self
    }

    /// Enable or disable the case citation grammar
    pub fn citations(mut self, enabled: bool) -> Self {
        self.config.citations = enabled;
        self
    }

    /// Enable or disable the statute grammar
    pub fn acts(mut self, enabled: bool) -> Self {
        self.config.acts = enabled;
        self
    }

    /// Build the processor
    pub fn build(self) -> Result<CitationProcessor> {
        if !self.config.citations && !self.config.acts {
            return Err(EngineError::Config(
                "at least one grammar must be enabled".to_string(),
            ));
        }
        Ok(CitationProcessor::with_config(self.config))
    }
}
