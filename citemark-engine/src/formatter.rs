//! Applying a [`StyleSpec`] to a document range

use crate::document::{Document, FontPatch};
use crate::error::DocumentResult;
use citemark_core::StyleSpec;

/// What a style application queued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleChange {
    /// Italic was switched on (it was off before)
    pub italic_set: bool,
}

/// Queues style writes on single ranges.
///
/// Italic is only ever switched on, never toggled, so running the formatter
/// again over an already styled range leaves it italic. The color is always
/// written.
#[derive(Debug, Clone, Copy, Default)]
pub struct Formatter;

impl Formatter {
    /// Queue `style` on `range`. The write is committed by the caller's next
    /// [`Document::sync`].
    pub fn apply<D: Document>(
        doc: &mut D,
        range: &D::Range,
        style: &StyleSpec,
    ) -> DocumentResult<StyleChange> {
        let current = doc.font(range)?;
        let italic_set = style.italic && !current.italic;

        let patch = FontPatch {
            italic: italic_set.then_some(true),
            color: Some(style.color.as_str().to_string()),
        };
        doc.set_font(range, patch)?;

        Ok(StyleChange { italic_set })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Font, InMemoryDocument, TextRange};

    #[test]
    fn test_apply_sets_italic_and_color() {
        let mut doc = InMemoryDocument::new("Lee v Smith [2003]");
        let range = TextRange::new(0, 11);

        let change = Formatter::apply(&mut doc, &range, &StyleSpec::citation()).unwrap();
        doc.sync().unwrap();

        assert!(change.italic_set);
        let font = doc.font(&range).unwrap();
        assert!(font.italic);
        assert_eq!(font.color.as_deref(), Some("red"));
    }

    #[test]
    fn test_apply_twice_is_stable() {
        let mut doc = InMemoryDocument::new("The Interpretation Act (1971)");
        let range = TextRange::new(0, 22);

        Formatter::apply(&mut doc, &range, &StyleSpec::act()).unwrap();
        doc.sync().unwrap();
        let second = Formatter::apply(&mut doc, &range, &StyleSpec::act()).unwrap();
        doc.sync().unwrap();

        assert!(!second.italic_set);
        let font = doc.font(&range).unwrap();
        assert!(font.italic);
        assert_eq!(font.color.as_deref(), Some("blue"));
    }

    #[test]
    fn test_already_italic_text_is_not_rewritten() {
        let mut doc = InMemoryDocument::default().with_run(
            "Lee v Smith",
            Font {
                italic: true,
                color: None,
            },
        );
        let range = TextRange::new(0, 11);

        let change = Formatter::apply(&mut doc, &range, &StyleSpec::citation()).unwrap();
        assert!(!change.italic_set);
        doc.sync().unwrap();
        assert!(doc.font(&range).unwrap().italic);
    }

    #[test]
    fn test_invalid_range_fails() {
        let mut doc = InMemoryDocument::new("short");
        let result = Formatter::apply(&mut doc, &TextRange::new(0, 50), &StyleSpec::citation());
        assert!(result.is_err());
        assert_eq!(doc.pending_writes(), 0);
    }
}
