//! Contract with the rich-text document engine
//!
//! The engine never owns the document. It talks to it through [`Document`],
//! which mirrors what a word-processor scripting API exposes: read the body
//! text, search for a literal at body or range scope, read and queue font
//! changes on a range, and flush queued work with [`Document::sync`].
//!
//! Range handles are only meaningful for the document that produced them and
//! only until the document changes; callers use them immediately and never
//! keep them across runs.

use crate::error::DocumentResult;
use std::fmt;

pub mod memory;

pub use memory::{InMemoryDocument, StyledRun, TextRange};

/// Options for a literal search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOptions {
    /// Compare case-sensitively
    pub match_case: bool,
    /// Only accept hits that are whole words
    pub match_whole_word: bool,
}

impl SearchOptions {
    /// Case-insensitive substring search, the mode used for re-locating matches
    pub const fn literal() -> Self {
        Self {
            match_case: false,
            match_whole_word: false,
        }
    }
}

/// Where a search looks
#[derive(Debug)]
pub enum Scope<'r, R> {
    /// The whole document body
    Body,
    /// Only inside an existing range
    Within(&'r R),
}

impl<R> Clone for Scope<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Scope<'_, R> {}

/// Font attributes as the document reports them for a range
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Font {
    /// True only when the whole range is italic
    pub italic: bool,
    /// Color name, `None` when unset or mixed across the range
    pub color: Option<String>,
}

/// A queued font change; `None` fields are left untouched
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FontPatch {
    /// New italic flag
    pub italic: Option<bool>,
    /// New color name
    pub color: Option<String>,
}

impl FontPatch {
    /// True when applying the patch would change nothing
    pub fn is_empty(&self) -> bool {
        self.italic.is_none() && self.color.is_none()
    }
}

/// A formatted document that can be searched and styled.
///
/// Writes made through [`set_font`](Document::set_font) are pending until
/// [`sync`](Document::sync) returns; they are not observable through
/// [`font`](Document::font) before that. All methods take `&mut self` so two
/// unflushed batches can never be in flight at once.
pub trait Document {
    /// Opaque handle to a contiguous span of the document
    type Range: Clone + fmt::Debug;

    /// The document body flattened to plain text
    fn full_text(&mut self) -> DocumentResult<String>;

    /// Find every non-overlapping occurrence of `needle` inside `scope`,
    /// in document order
    fn search(
        &mut self,
        scope: Scope<'_, Self::Range>,
        needle: &str,
        options: SearchOptions,
    ) -> DocumentResult<Vec<Self::Range>>;

    /// Current (committed) font of a range
    fn font(&mut self, range: &Self::Range) -> DocumentResult<Font>;

    /// Queue a font change on a range
    fn set_font(&mut self, range: &Self::Range, patch: FontPatch) -> DocumentResult<()>;

    /// Flush pending reads and writes
    fn sync(&mut self) -> DocumentResult<()>;
}

impl<D: Document + ?Sized> Document for &mut D {
    type Range = D::Range;

    fn full_text(&mut self) -> DocumentResult<String> {
        (**self).full_text()
    }

    fn search(
        &mut self,
        scope: Scope<'_, Self::Range>,
        needle: &str,
        options: SearchOptions,
    ) -> DocumentResult<Vec<Self::Range>> {
        (**self).search(scope, needle, options)
    }

    fn font(&mut self, range: &Self::Range) -> DocumentResult<Font> {
        (**self).font(range)
    }

    fn set_font(&mut self, range: &Self::Range, patch: FontPatch) -> DocumentResult<()> {
        (**self).set_font(range, patch)
    }

    fn sync(&mut self) -> DocumentResult<()> {
        (**self).sync()
    }
}
