//! Host-to-sink scenarios

use citemark_api::*;
use citemark_engine::{
    Document, DocumentError, DocumentResult, Font, FontPatch, InMemoryDocument, Scope,
    SearchOptions, TextRange,
};

fn ready_add_in() -> AddIn {
    initialize(&HostDescriptor::word(), Config::default())
        .into_add_in()
        .unwrap()
        .with_default_triggers()
}

fn run(text: &str) -> (InMemoryDocument, MemorySink, Output) {
    let add_in = ready_add_in();
    let mut doc = InMemoryDocument::new(text);
    let mut sink = MemorySink::new();
    let mut event = CompletionFlag::new();

    let output = add_in
        .invoke(RUN_TRIGGER, &mut doc, Some(&mut sink), &mut event)
        .unwrap()
        .unwrap();
    assert_eq!(event.count(), 1);

    (doc, sink, output)
}

/// A document whose text can never be read
struct LockedDocument;

impl Document for LockedDocument {
    type Range = TextRange;

    fn full_text(&mut self) -> DocumentResult<String> {
        Err(DocumentError::Unavailable("document is locked".to_string()))
    }

    fn search(
        &mut self,
        _scope: Scope<'_, TextRange>,
        _needle: &str,
        _options: SearchOptions,
    ) -> DocumentResult<Vec<TextRange>> {
        panic!("search must not run when the text is unreadable");
    }

    fn font(&mut self, _range: &TextRange) -> DocumentResult<Font> {
        panic!("font must not run when the text is unreadable");
    }

    fn set_font(&mut self, _range: &TextRange, _patch: FontPatch) -> DocumentResult<()> {
        panic!("set_font must not run when the text is unreadable");
    }

    fn sync(&mut self) -> DocumentResult<()> {
        panic!("sync must not run when the text is unreadable");
    }
}

#[test]
fn test_citation_is_styled_and_reported() {
    let text = "Lee v The Minister of Foreign Affairs [2003] was applied.";
    let (mut doc, sink, output) = run(text);

    let dto = &output.matches[0];
    assert_eq!(dto.claimant.as_deref(), Some("Lee"));
    assert_eq!(
        dto.respondent.as_deref(),
        Some("The Minister of Foreign Affairs")
    );
    assert_eq!(dto.year, "2003");

    let styled = doc.font(&TextRange::new(0, 37)).unwrap();
    assert!(styled.italic);
    assert_eq!(styled.color.as_deref(), Some("red"));
    let date = doc.font(&TextRange::new(37, 44)).unwrap();
    assert!(!date.italic);

    let report = sink.current().unwrap();
    assert!(report.is_html());
    assert!(report.as_str().contains(
        "Claimant: Lee | Respondent: The Minister of Foreign Affairs | Year: 2003"
    ));
}

#[test]
fn test_act_is_styled_blue() {
    let (mut doc, sink, output) = run("The Interpretation Act (1971) governs this.");

    assert_eq!(output.act_count(), 1);
    assert_eq!(output.matches[0].act.as_deref(), Some("The Interpretation Act"));

    let styled = doc.font(&TextRange::new(0, 22)).unwrap();
    assert!(styled.italic);
    assert_eq!(styled.color.as_deref(), Some("blue"));

    assert!(sink
        .current()
        .unwrap()
        .as_str()
        .contains("<div class=\"match act\"><strong>#1</strong>"));
}

#[test]
fn test_no_matches_leaves_document_untouched() {
    let text = "No citations here.";
    let (doc, sink, output) = run(text);

    assert_eq!(sink.current(), Some(&Content::Text(NO_MATCHES.to_string())));
    assert!(output.matches.is_empty());
    assert_eq!(doc.sync_count(), 0);

    let runs = doc.runs();
    assert_eq!(runs.len(), 1);
    assert!(!runs[0].italic);
    assert_eq!(runs[0].color, None);
}

#[test]
fn test_party_names_are_escaped_in_report() {
    let (_, sink, _) = run("O'Brien & Sons v Smith [2003]");

    let html = sink.current().unwrap().as_str().to_string();
    assert!(html.contains("Claimant: O&#39;Brien &amp; Sons"));
    assert!(!html.contains("O'Brien"));
}

#[test]
fn test_unreadable_document_reports_error() {
    let add_in = ready_add_in();
    let mut sink = MemorySink::new();
    let mut event = CompletionFlag::new();

    let err = add_in
        .invoke(RUN_TRIGGER, &mut LockedDocument, Some(&mut sink), &mut event)
        .unwrap_err();

    assert!(matches!(err, ApiError::DocumentUnavailable(_)));
    assert_eq!(event.count(), 1);
    assert_eq!(
        sink.current(),
        Some(&Content::Text(
            "Error: document unavailable: document is locked".to_string()
        ))
    );
}

#[test]
fn test_other_hosts_are_not_applicable() {
    for host in [HostType::Excel, HostType::Outlook, HostType::OneNote] {
        let readiness = initialize(&HostDescriptor::new(host.clone()), Config::default());
        assert!(matches!(readiness, Readiness::NotApplicable(h) if h == host));
    }
}

#[test]
fn test_rerun_reports_again_without_restyling() {
    let add_in = ready_add_in();
    let mut doc = InMemoryDocument::new("Lee v Smith [2003]");
    let mut sink = MemorySink::new();

    for _ in 0..2 {
        let mut event = CompletionFlag::new();
        add_in
            .invoke(RUN_TRIGGER, &mut doc, Some(&mut sink), &mut event)
            .unwrap();
    }

    assert_eq!(sink.writes().len(), 2);
    assert_eq!(sink.writes()[0], sink.writes()[1]);
    let font = doc.font(&TextRange::new(0, 11)).unwrap();
    assert!(font.italic);
    assert_eq!(font.color.as_deref(), Some("red"));
}
