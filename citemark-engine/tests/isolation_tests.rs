//! Failure isolation: range, match and run scopes

use citemark_engine::*;

/// Wraps an [`InMemoryDocument`] and injects collaborator failures
struct FlakyDocument {
    inner: InMemoryDocument,
    set_font_calls: usize,
    fail_set_font_on: Vec<usize>,
    fail_search_containing: Option<&'static str>,
    sync_calls: usize,
    fail_sync_on: Option<usize>,
    empty_scoped_searches: bool,
    unreadable: bool,
}

impl FlakyDocument {
    fn new(text: &str) -> Self {
        Self {
            inner: InMemoryDocument::new(text),
            set_font_calls: 0,
            fail_set_font_on: Vec::new(),
            fail_search_containing: None,
            sync_calls: 0,
            fail_sync_on: None,
            empty_scoped_searches: false,
            unreadable: false,
        }
    }

    fn italic(&mut self, needle: &str) -> bool {
        let options = SearchOptions {
            match_case: true,
            match_whole_word: false,
        };
        let hits = self.inner.search(Scope::Body, needle, options).unwrap();
        self.inner.font(&hits[0]).unwrap().italic
    }
}

impl Document for FlakyDocument {
    type Range = TextRange;

    fn full_text(&mut self) -> DocumentResult<String> {
        if self.unreadable {
            return Err(DocumentError::Unavailable("document is locked".to_string()));
        }
        self.inner.full_text()
    }

    fn search(
        &mut self,
        scope: Scope<'_, TextRange>,
        needle: &str,
        options: SearchOptions,
    ) -> DocumentResult<Vec<TextRange>> {
        if let Some(trigger) = self.fail_search_containing {
            if needle.contains(trigger) {
                return Err(DocumentError::Search {
                    needle: needle.to_string(),
                    reason: "search service unavailable".to_string(),
                });
            }
        }
        if self.empty_scoped_searches && matches!(scope, Scope::Within(_)) {
            return Ok(Vec::new());
        }
        self.inner.search(scope, needle, options)
    }

    fn font(&mut self, range: &TextRange) -> DocumentResult<Font> {
        self.inner.font(range)
    }

    fn set_font(&mut self, range: &TextRange, patch: FontPatch) -> DocumentResult<()> {
        self.set_font_calls += 1;
        if self.fail_set_font_on.contains(&self.set_font_calls) {
            return Err(DocumentError::Style("transient write failure".to_string()));
        }
        self.inner.set_font(range, patch)
    }

    fn sync(&mut self) -> DocumentResult<()> {
        self.sync_calls += 1;
        if self.fail_sync_on == Some(self.sync_calls) {
            return Err(DocumentError::Sync("request timed out".to_string()));
        }
        self.inner.sync()
    }
}

const THREE_CASES: &str =
    "Lee v Smith [2003].\nHeld: Brown v Green [2010].\nThe Crimes Act (1961) applies.";

#[test]
fn test_failed_range_does_not_stop_siblings() {
    // One match with three verbatim occurrences: sub-range 2 of 3 fails
    let text = "Lee v Smith [2003]; Lee v Smith [2003]; Lee v Smith [2003].";
    let mut doc = FlakyDocument::new(text);
    doc.fail_set_font_on = vec![2];

    let processor = CitationProcessorBuilder::new().acts(false).build().unwrap();
    let matches = processor.extract(&mut doc).unwrap();
    assert_eq!(matches.citations.len(), 3);

    let summary = processor.format_matches(&mut doc, &matches);

    // 3 matches x 3 occurrences
    assert_eq!(doc.set_font_calls, 9);
    assert_eq!(summary.failed_ranges, 1);
    assert_eq!(summary.formatted_ranges, 8);
    assert_eq!(summary.failed_matches, 0);
}

#[test]
fn test_failed_range_does_not_stop_later_matches() {
    let mut doc = FlakyDocument::new(THREE_CASES);
    doc.fail_set_font_on = vec![1];

    let output = CitationProcessor::new().process(&mut doc).unwrap();

    assert_eq!(output.summary.failed_ranges, 1);
    assert_eq!(output.summary.formatted_ranges, 2);
    assert!(!doc.italic("Lee v Smith"));
    assert!(doc.italic("Brown v Green"));
    assert!(doc.italic("The Crimes Act"));
}

#[test]
fn test_failed_search_skips_only_that_match() {
    let mut doc = FlakyDocument::new(THREE_CASES);
    doc.fail_search_containing = Some("Brown");

    let output = CitationProcessor::new().process(&mut doc).unwrap();

    assert_eq!(output.summary.failed_matches, 1);
    assert_eq!(output.summary.formatted_ranges, 2);
    assert!(doc.italic("Lee v Smith"));
    assert!(!doc.italic("Brown v Green"));
    assert!(doc.italic("The Crimes Act"));
}

#[test]
fn test_failed_sync_is_scoped_to_one_match() {
    let mut doc = FlakyDocument::new(THREE_CASES);
    doc.fail_sync_on = Some(2);

    let output = CitationProcessor::new().process(&mut doc).unwrap();

    assert_eq!(output.summary.failed_matches, 1);
    assert_eq!(output.summary.formatted_ranges, 2);
    assert_eq!(doc.sync_calls, 3);
    assert!(doc.italic("The Crimes Act"));
}

#[test]
fn test_outer_range_without_sub_range_stays_unstyled() {
    let mut doc = FlakyDocument::new(THREE_CASES);
    doc.empty_scoped_searches = true;

    let output = CitationProcessor::new().process(&mut doc).unwrap();

    assert_eq!(output.summary.outer_ranges, 3);
    assert_eq!(output.summary.empty_outer_ranges, 3);
    assert_eq!(output.summary.formatted_ranges, 0);
    assert!(!output.summary.has_failures());
    assert!(!doc.italic("Lee v Smith"));
}

#[test]
fn test_unreadable_document_is_fatal() {
    let mut doc = FlakyDocument::new(THREE_CASES);
    doc.unreadable = true;

    let err = CitationProcessor::new().process(&mut doc).unwrap_err();

    assert!(matches!(
        err,
        EngineError::Document(DocumentError::Unavailable(_))
    ));
    assert_eq!(doc.sync_calls, 0);
    assert_eq!(doc.set_font_calls, 0);
}
