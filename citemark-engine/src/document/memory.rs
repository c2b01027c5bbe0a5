//! In-memory reference document
//!
//! Stores text as characters with a font per character. Searches behave like
//! a word processor's find: literal, optionally case-insensitive, optionally
//! whole-word, non-overlapping. Font writes are queued and only applied on
//! [`sync`](Document::sync).

use super::{Document, Font, FontPatch, Scope, SearchOptions};
use crate::error::{DocumentError, DocumentResult};
use citemark_core::escape_html;

/// Half-open character range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// Create a range; `end` is clamped to be at least `start`
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// First character
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last character
    pub fn end(&self) -> usize {
        self.end
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for a zero-length range
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CharStyle {
    italic: bool,
    color: Option<String>,
}

/// A maximal run of characters sharing one style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    /// Run text
    pub text: String,
    /// Italic flag
    pub italic: bool,
    /// Color name, if any
    pub color: Option<String>,
}

/// A document held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocument {
    chars: Vec<char>,
    styles: Vec<CharStyle>,
    pending: Vec<(TextRange, FontPatch)>,
    sync_count: usize,
}

impl InMemoryDocument {
    /// Unformatted document
    pub fn new(text: &str) -> Self {
        Self::default().with_run(text, Font::default())
    }

    /// Append a run of text in a given font
    pub fn with_run(mut self, text: &str, font: Font) -> Self {
        for ch in text.chars() {
            self.chars.push(ch);
            self.styles.push(CharStyle {
                italic: font.italic,
                color: font.color.clone(),
            });
        }
        self
    }

    /// Document text
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True for an empty document
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Text covered by a range
    pub fn slice(&self, range: &TextRange) -> String {
        let end = range.end.min(self.chars.len());
        let start = range.start.min(end);
        self.chars[start..end].iter().collect()
    }

    /// Number of queued, unflushed font writes
    pub fn pending_writes(&self) -> usize {
        self.pending.len()
    }

    /// Number of completed syncs
    pub fn sync_count(&self) -> usize {
        self.sync_count
    }

    /// Committed font of a single character
    pub fn font_at(&self, index: usize) -> Option<Font> {
        self.styles.get(index).map(|style| Font {
            italic: style.italic,
            color: style.color.clone(),
        })
    }

    /// The document split into maximal runs of identical style
    pub fn runs(&self) -> Vec<StyledRun> {
        let mut runs: Vec<StyledRun> = Vec::new();

        for (ch, style) in self.chars.iter().zip(&self.styles) {
            match runs.last_mut() {
                Some(run) if run.italic == style.italic && run.color == style.color => {
                    run.text.push(*ch);
                }
                _ => runs.push(StyledRun {
                    text: ch.to_string(),
                    italic: style.italic,
                    color: style.color.clone(),
                }),
            }
        }

        runs
    }

    /// Render the committed document as HTML, one `<span>` per styled run
    pub fn to_html(&self) -> String {
        let mut html = String::new();

        for run in self.runs() {
            let text = escape_html(&run.text).replace('\n', "<br>\n");
            let mut css = Vec::new();
            if run.italic {
                css.push("font-style:italic".to_string());
            }
            if let Some(color) = &run.color {
                css.push(format!("color:{}", escape_html(color)));
            }

            if css.is_empty() {
                html.push_str(&text);
            } else {
                html.push_str(&format!("<span style=\"{}\">{}</span>", css.join(";"), text));
            }
        }

        html
    }

    fn check(&self, range: &TextRange) -> DocumentResult<()> {
        if range.end > self.chars.len() {
            return Err(DocumentError::InvalidRange {
                start: range.start,
                end: range.end,
                len: self.chars.len(),
            });
        }
        Ok(())
    }

    fn is_word_char(&self, index: usize) -> bool {
        self.chars
            .get(index)
            .is_some_and(|c| c.is_alphanumeric() || *c == '_')
    }

    fn matches_at(&self, at: usize, needle: &[char], match_case: bool) -> bool {
        needle.iter().enumerate().all(|(i, n)| {
            let c = self.chars[at + i];
            c == *n || (!match_case && c.to_lowercase().eq(n.to_lowercase()))
        })
    }

    fn find_all(&self, within: TextRange, needle: &[char], options: SearchOptions) -> Vec<TextRange> {
        let mut hits = Vec::new();
        if needle.len() > within.len() {
            return hits;
        }

        let last_start = within.end - needle.len();
        let mut at = within.start;
        while at <= last_start {
            let end = at + needle.len();
            let whole_word_ok = !options.match_whole_word
                || ((at == 0 || !self.is_word_char(at - 1)) && !self.is_word_char(end));

            if whole_word_ok && self.matches_at(at, needle, options.match_case) {
                hits.push(TextRange::new(at, end));
                at = end;
            } else {
                at += 1;
            }
        }

        hits
    }

    fn apply(&mut self, range: TextRange, patch: &FontPatch) {
        for style in &mut self.styles[range.start..range.end] {
            if let Some(italic) = patch.italic {
                style.italic = italic;
            }
            if let Some(color) = &patch.color {
                style.color = Some(color.clone());
            }
        }
    }
}

impl Document for InMemoryDocument {
    type Range = TextRange;

    fn full_text(&mut self) -> DocumentResult<String> {
        Ok(self.text())
    }

    fn search(
        &mut self,
        scope: Scope<'_, TextRange>,
        needle: &str,
        options: SearchOptions,
    ) -> DocumentResult<Vec<TextRange>> {
        if needle.is_empty() {
            return Err(DocumentError::Search {
                needle: String::new(),
                reason: "search text is empty".to_string(),
            });
        }

        let within = match scope {
            Scope::Body => TextRange::new(0, self.chars.len()),
            Scope::Within(range) => {
                self.check(range)?;
                *range
            }
        };

        let needle: Vec<char> = needle.chars().collect();
        Ok(self.find_all(within, &needle, options))
    }

    fn font(&mut self, range: &TextRange) -> DocumentResult<Font> {
        self.check(range)?;

        let styles = &self.styles[range.start..range.end];
        let italic = !styles.is_empty() && styles.iter().all(|s| s.italic);
        let color = match styles.split_first() {
            Some((first, rest)) if rest.iter().all(|s| s.color == first.color) => {
                first.color.clone()
            }
            _ => None,
        };

        Ok(Font { italic, color })
    }

    fn set_font(&mut self, range: &TextRange, patch: FontPatch) -> DocumentResult<()> {
        self.check(range)?;
        if !patch.is_empty() {
            self.pending.push((*range, patch));
        }
        Ok(())
    }

    fn sync(&mut self) -> DocumentResult<()> {
        let pending = std::mem::take(&mut self.pending);
        for (range, patch) in &pending {
            self.apply(*range, patch);
        }
        self.sync_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_italic() -> FontPatch {
        FontPatch {
            italic: Some(true),
            color: Some("red".to_string()),
        }
    }

    #[test]
    fn test_case_insensitive_search() {
        let mut doc = InMemoryDocument::new("Lee v Smith and LEE V SMITH");
        let hits = doc
            .search(Scope::Body, "lee v smith", SearchOptions::literal())
            .unwrap();

        assert_eq!(hits, vec![TextRange::new(0, 11), TextRange::new(16, 27)]);
    }

    #[test]
    fn test_case_sensitive_search() {
        let mut doc = InMemoryDocument::new("Lee v Smith and LEE V SMITH");
        let options = SearchOptions {
            match_case: true,
            match_whole_word: false,
        };
        let hits = doc.search(Scope::Body, "Lee v Smith", options).unwrap();

        assert_eq!(hits, vec![TextRange::new(0, 11)]);
    }

    #[test]
    fn test_scoped_search_stays_inside_range() {
        let mut doc = InMemoryDocument::new("Smith. Lee v Smith [2003]. Smith.");
        let outer = doc
            .search(Scope::Body, "Lee v Smith [2003]", SearchOptions::literal())
            .unwrap();
        assert_eq!(outer.len(), 1);

        let inner = doc
            .search(Scope::Within(&outer[0]), "Smith", SearchOptions::literal())
            .unwrap();
        assert_eq!(inner, vec![TextRange::new(13, 18)]);
    }

    #[test]
    fn test_whole_word_search() {
        let mut doc = InMemoryDocument::new("Act Actor Act");
        let options = SearchOptions {
            match_case: false,
            match_whole_word: true,
        };
        let hits = doc.search(Scope::Body, "act", options).unwrap();

        assert_eq!(hits, vec![TextRange::new(0, 3), TextRange::new(10, 13)]);
    }

    #[test]
    fn test_non_overlapping_hits() {
        let mut doc = InMemoryDocument::new("aaaa");
        let hits = doc.search(Scope::Body, "aa", SearchOptions::literal()).unwrap();

        assert_eq!(hits, vec![TextRange::new(0, 2), TextRange::new(2, 4)]);
    }

    #[test]
    fn test_empty_needle_is_rejected() {
        let mut doc = InMemoryDocument::new("text");
        let err = doc
            .search(Scope::Body, "", SearchOptions::literal())
            .unwrap_err();
        assert!(matches!(err, DocumentError::Search { .. }));
    }

    #[test]
    fn test_writes_are_pending_until_sync() {
        let mut doc = InMemoryDocument::new("Lee v Smith");
        let range = TextRange::new(0, 3);

        doc.set_font(&range, red_italic()).unwrap();
        assert_eq!(doc.pending_writes(), 1);
        assert!(!doc.font(&range).unwrap().italic);

        doc.sync().unwrap();
        assert_eq!(doc.pending_writes(), 0);
        assert_eq!(doc.sync_count(), 1);

        let font = doc.font(&range).unwrap();
        assert!(font.italic);
        assert_eq!(font.color.as_deref(), Some("red"));
    }

    #[test]
    fn test_mixed_font_reporting() {
        let mut doc = InMemoryDocument::default()
            .with_run(
                "Lee",
                Font {
                    italic: true,
                    color: Some("red".to_string()),
                },
            )
            .with_run(" v Smith", Font::default());

        let font = doc.font(&TextRange::new(0, 5)).unwrap();
        assert!(!font.italic);
        assert_eq!(font.color, None);

        let font = doc.font(&TextRange::new(0, 3)).unwrap();
        assert!(font.italic);
    }

    #[test]
    fn test_invalid_range() {
        let mut doc = InMemoryDocument::new("short");
        let err = doc.font(&TextRange::new(2, 40)).unwrap_err();
        assert_eq!(
            err,
            DocumentError::InvalidRange {
                start: 2,
                end: 40,
                len: 5
            }
        );
    }

    #[test]
    fn test_runs_and_html() {
        let mut doc = InMemoryDocument::new("See Lee v <Smith> [2003].");
        doc.set_font(&TextRange::new(4, 17), red_italic()).unwrap();
        doc.sync().unwrap();

        let runs = doc.runs();
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[1].text, "Lee v <Smith>");

        assert_eq!(
            doc.to_html(),
            "See <span style=\"font-style:italic;color:red\">Lee v &lt;Smith&gt;</span> [2003]."
        );
    }

    #[test]
    fn test_unicode_offsets_are_characters() {
        let mut doc = InMemoryDocument::new("Résumé: Lee v Smith [2003]");
        let hits = doc
            .search(Scope::Body, "Lee v Smith", SearchOptions::literal())
            .unwrap();

        assert_eq!(hits, vec![TextRange::new(8, 19)]);
        assert_eq!(doc.slice(&hits[0]), "Lee v Smith");
    }
}
