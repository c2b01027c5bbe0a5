//! Match records and style values shared by every layer

use crate::error::{CoreError, Result};
use crate::patterns::pre_date_span;
use std::fmt;
use std::str::FromStr;

/// A case citation such as `Lee v The Minister of Foreign Affairs [2003]`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CitationMatch {
    /// The whole matched text, year included
    pub full_text: String,
    /// First party, trimmed
    pub claimant: String,
    /// Second party, trimmed
    pub respondent: String,
    /// Four-digit year
    pub year: String,
    /// Byte offset of `full_text` in the source text
    pub byte_offset: usize,
    /// Character offset of `full_text` in the source text
    pub char_offset: usize,
}

impl CitationMatch {
    /// The text to style: everything before the bracketed year
    pub fn pre_date(&self) -> &str {
        pre_date_span(&self.full_text)
    }
}

/// A statute reference such as `The Interpretation Act (1971)`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActMatch {
    /// The whole matched text, year included
    pub full_text: String,
    /// The act name, ending in "Act"
    pub name_part: String,
    /// Four-digit year
    pub year: String,
    /// Byte offset of `full_text` in the source text
    pub byte_offset: usize,
    /// Character offset of `full_text` in the source text
    pub char_offset: usize,
}

impl ActMatch {
    /// The text to style: everything before the bracketed year
    pub fn pre_date(&self) -> &str {
        pre_date_span(&self.full_text)
    }
}

/// Which grammar produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MatchKind {
    /// Case citation
    Citation,
    /// Statute reference
    Act,
}

impl MatchKind {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            MatchKind::Citation => "citation",
            MatchKind::Act => "act",
        }
    }
}

/// Borrowed view over either kind of match
#[derive(Debug, Clone, Copy)]
pub enum MatchRef<'a> {
    /// A case citation
    Citation(&'a CitationMatch),
    /// A statute reference
    Act(&'a ActMatch),
}

impl<'a> MatchRef<'a> {
    /// Grammar that produced the match
    pub fn kind(&self) -> MatchKind {
        match self {
            MatchRef::Citation(_) => MatchKind::Citation,
            MatchRef::Act(_) => MatchKind::Act,
        }
    }

    /// The whole matched text, year included
    pub fn full_text(&self) -> &'a str {
        match self {
            MatchRef::Citation(m) => &m.full_text,
            MatchRef::Act(m) => &m.full_text,
        }
    }

    /// The text to style
    pub fn pre_date(&self) -> &'a str {
        pre_date_span(self.full_text())
    }

    /// Four-digit year
    pub fn year(&self) -> &'a str {
        match self {
            MatchRef::Citation(m) => &m.year,
            MatchRef::Act(m) => &m.year,
        }
    }

    /// Character offset in the source text
    pub fn char_offset(&self) -> usize {
        match self {
            MatchRef::Citation(m) => m.char_offset,
            MatchRef::Act(m) => m.char_offset,
        }
    }
}

/// Everything one extraction pass found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSet {
    /// Case citations in document order
    pub citations: Vec<CitationMatch>,
    /// Statute references in document order
    pub acts: Vec<ActMatch>,
}

impl MatchSet {
    /// True when neither grammar matched
    pub fn is_empty(&self) -> bool {
        self.citations.is_empty() && self.acts.is_empty()
    }

    /// Total number of matches
    pub fn len(&self) -> usize {
        self.citations.len() + self.acts.len()
    }

    /// Matches in processing order: every citation, then every act
    pub fn iter(&self) -> impl Iterator<Item = MatchRef<'_>> {
        self.citations
            .iter()
            .map(MatchRef::Citation)
            .chain(self.acts.iter().map(MatchRef::Act))
    }
}

/// Emphasis colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    /// Used for case citations
    Red,
    /// Used for statute references
    Blue,
}

impl Color {
    /// CSS / document color name
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "blue" => Ok(Color::Blue),
            _ => Err(CoreError::UnknownColor {
                name: s.to_string(),
            }),
        }
    }
}

/// Style applied to the pre-date text of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleSpec {
    /// Italicize the range
    pub italic: bool,
    /// Font color
    pub color: Color,
}

impl StyleSpec {
    /// Italic red
    pub const fn citation() -> Self {
        Self {
            italic: true,
            color: Color::Red,
        }
    }

    /// Italic blue
    pub const fn act() -> Self {
        Self {
            italic: true,
            color: Color::Blue,
        }
    }

    /// Default style for a grammar
    pub const fn for_kind(kind: MatchKind) -> Self {
        match kind {
            MatchKind::Citation => Self::citation(),
            MatchKind::Act => Self::act(),
        }
    }
}
