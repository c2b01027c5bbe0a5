//! Citation and statute grammars
//!
//! Two independent grammars, both case-insensitive and lazy on the name
//! portions so that one match never swallows the next citation:
//!
//! - case citations: `<Claimant> v <Respondent> [YYYY]`, where the separator
//!   may also be `v.` or `versus` and the year may sit in parentheses;
//! - statute references: `<Name ending in "Act"> (YYYY)`.
//!
//! Names start with an upper-case letter followed by letters, digits,
//! apostrophes (straight or curly), periods, hyphens, commas, ampersands,
//! parentheses and spaces.

use crate::types::{ActMatch, CitationMatch};
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Maximum length of a claimant or respondent after its first letter
pub const MAX_PARTY_LEN: usize = 160;

/// Maximum length of an act name after its first letter
pub const MAX_ACT_NAME_LEN: usize = 200;

const CITATION_PATTERN: &str = r"(?i)([A-Z][A-Za-z0-9'’.\-,&() ]{1,160}?)\s+v(?:\.|ersus)?\s+([A-Z][A-Za-z0-9'’.\-,&() ]{1,160}?)\s*[\[(]([0-9]{4})[\])]";

const ACT_PATTERN: &str = r"(?i)([A-Z][A-Za-z0-9'’.\-,&() ]{1,200}?\bAct)\s*[\[(]([0-9]{4})[\])]";

const TRAILING_DATE_PATTERN: &str = r"\s*[\[(][0-9]{4}[\])]\s*$";

fn citation_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CITATION_PATTERN).expect("citation grammar must compile"))
}

fn act_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ACT_PATTERN).expect("act grammar must compile"))
}

fn trailing_date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TRAILING_DATE_PATTERN).expect("date grammar must compile"))
}

/// Tracks character offsets while walking matches in increasing byte order,
/// so the whole scan stays linear in the text length.
struct OffsetCursor<'t> {
    text: &'t str,
    byte: usize,
    chars: usize,
}

impl<'t> OffsetCursor<'t> {
    fn new(text: &'t str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    fn char_offset(&mut self, byte_offset: usize) -> usize {
        debug_assert!(byte_offset >= self.byte, "matches must arrive in order");
        self.chars += self.text[self.byte..byte_offset].chars().count();
        self.byte = byte_offset;
        self.chars
    }
}

/// Run `regex` over `text` left to right, handing every non-overlapping
/// match to `build` together with its character offset.
///
/// `captures_iter` steps past empty matches on its own, so adjacent
/// delimiters can never stall the scan.
fn scan<T>(
    regex: &Regex,
    text: &str,
    mut build: impl FnMut(&Captures<'_>, usize, usize) -> Option<T>,
) -> Vec<T> {
    let mut cursor = OffsetCursor::new(text);
    let mut found = Vec::new();

    for caps in regex.captures_iter(text) {
        let whole = match caps.get(0) {
            Some(m) if !m.as_str().is_empty() => m,
            _ => continue,
        };
        let char_offset = cursor.char_offset(whole.start());
        if let Some(item) = build(&caps, whole.start(), char_offset) {
            found.push(item);
        }
    }

    found
}

fn group<'t>(caps: &Captures<'t>, index: usize) -> Option<&'t str> {
    caps.get(index).map(|m| m.as_str())
}

/// Extract every case citation from `text`, in document order
pub fn extract_citations(text: &str) -> Vec<CitationMatch> {
    scan(citation_regex(), text, |caps, byte_offset, char_offset| {
        Some(CitationMatch {
            full_text: group(caps, 0)?.to_string(),
            claimant: group(caps, 1)?.trim().to_string(),
            respondent: group(caps, 2)?.trim().to_string(),
            year: group(caps, 3)?.to_string(),
            byte_offset,
            char_offset,
        })
    })
}

/// Extract every statute reference from `text`, in document order
pub fn extract_acts(text: &str) -> Vec<ActMatch> {
    scan(act_regex(), text, |caps, byte_offset, char_offset| {
        Some(ActMatch {
            full_text: group(caps, 0)?.to_string(),
            name_part: group(caps, 1)?.trim().to_string(),
            year: group(caps, 2)?.to_string(),
            byte_offset,
            char_offset,
        })
    })
}

/// Strip the trailing bracketed or parenthesized year (and the whitespace
/// around it) from a matched text.
///
/// The result is the literal string that gets re-located and styled inside
/// the document. Text without a trailing year is returned unchanged.
pub fn pre_date_span(full_text: &str) -> &str {
    match trailing_date_regex().find(full_text) {
        Some(date) => &full_text[..date.start()],
        None => full_text,
    }
}
