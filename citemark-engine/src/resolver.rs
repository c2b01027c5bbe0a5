//! Re-locating extracted matches inside the live document
//!
//! A match found in the flattened text cannot be addressed by offset: the
//! live document may hold fields, hidden text or different whitespace. It is
//! re-located in two steps:
//!
//! 1. search the whole body for the full match text, year included, which
//!    picks out the occurrences of the name that carry this exact date;
//! 2. search only inside each of those outer ranges for the pre-date text,
//!    which yields the sub-ranges that actually get styled.
//!
//! Every verbatim occurrence of the full match is resolved, so identical
//! citations elsewhere in the document are styled too.

use crate::document::{Document, Scope, SearchOptions};
use crate::error::DocumentResult;
use citemark_core::MatchRef;
use smallvec::SmallVec;

/// Sub-ranges found inside one outer range
pub type Targets<R> = SmallVec<[R; 2]>;

/// One occurrence of a match and the ranges to style inside it
#[derive(Debug, Clone)]
pub struct OuterRange<R> {
    /// Range covering the full match text, year included
    pub range: R,
    /// Ranges covering only the pre-date text
    pub targets: Targets<R>,
}

/// Why a match produced nothing to style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Stripping the year left no text
    EmptyPreDate,
    /// The full match text does not occur in the document
    NotFound,
}

/// Outcome of resolving one match
#[derive(Debug, Clone)]
pub enum Resolution<R> {
    /// Nothing to style
    Skipped(SkipReason),
    /// Occurrences in search order
    Located(Vec<OuterRange<R>>),
}

impl<R> Resolution<R> {
    /// All sub-ranges across all occurrences, in order
    pub fn targets(&self) -> impl Iterator<Item = &R> {
        let outers: &[OuterRange<R>] = match self {
            Resolution::Located(outers) => outers,
            Resolution::Skipped(_) => &[],
        };
        outers.iter().flat_map(|outer| outer.targets.iter())
    }
}

/// Two-phase search against a [`Document`]
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeResolver {
    options: SearchOptions,
}

impl RangeResolver {
    /// Resolver using the given search options for both phases
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    /// Phase one: every occurrence of `full_text` in the document body
    pub fn outer_ranges<D: Document>(
        &self,
        doc: &mut D,
        full_text: &str,
    ) -> DocumentResult<Vec<D::Range>> {
        doc.search(Scope::Body, full_text, self.options)
    }

    /// Phase two: occurrences of `pre_date` inside one outer range
    pub fn targets<D: Document>(
        &self,
        doc: &mut D,
        outer: &D::Range,
        pre_date: &str,
    ) -> DocumentResult<Targets<D::Range>> {
        let found = doc.search(Scope::Within(outer), pre_date, self.options)?;
        Ok(found.into_iter().collect())
    }

    /// Resolve a match completely without styling anything
    pub fn resolve<D: Document>(
        &self,
        doc: &mut D,
        m: MatchRef<'_>,
    ) -> DocumentResult<Resolution<D::Range>> {
        let pre_date = m.pre_date();
        if pre_date.is_empty() {
            return Ok(Resolution::Skipped(SkipReason::EmptyPreDate));
        }

        let outers = self.outer_ranges(doc, m.full_text())?;
        if outers.is_empty() {
            return Ok(Resolution::Skipped(SkipReason::NotFound));
        }

        let mut located = Vec::with_capacity(outers.len());
        for range in outers {
            let targets = self.targets(doc, &range, pre_date)?;
            located.push(OuterRange { range, targets });
        }

        Ok(Resolution::Located(located))
    }
}
