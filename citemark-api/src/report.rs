//! HTML report of what a run found

use crate::sink::Content;
use citemark_core::{escape_html, ActMatch, CitationMatch, MatchSet};
use std::fmt::Write;

/// Text shown when neither grammar matched
pub const NO_MATCHES: &str = "No matches found.";

/// Renders a [`MatchSet`] as a numbered list
#[derive(Debug, Clone, Copy)]
pub struct ReportBuilder {
    include_acts: bool,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self { include_acts: true }
    }
}

impl ReportBuilder {
    /// Report listing citations, then acts
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave acts out of the listing
    pub fn with_acts(mut self, include: bool) -> Self {
        self.include_acts = include;
        self
    }

    /// Render the report. Every piece of matched text is escaped.
    pub fn render(&self, matches: &MatchSet) -> Content {
        let acts: &[ActMatch] = if self.include_acts { &matches.acts } else { &[] };
        if matches.citations.is_empty() && acts.is_empty() {
            return Content::Text(NO_MATCHES.to_string());
        }

        let mut html = String::new();
        let mut number = 0;
        for citation in &matches.citations {
            number += 1;
            push_citation(&mut html, number, citation);
        }
        for act in acts {
            number += 1;
            push_act(&mut html, number, act);
        }
        Content::Html(html)
    }
}

fn push_citation(html: &mut String, number: usize, m: &CitationMatch) {
    // Writing to a String cannot fail
    let _ = write!(
        html,
        "<div class=\"match\"><strong>#{}</strong>: {}<div class=\"meta\">Claimant: {} | Respondent: {} | Year: {}</div></div>",
        number,
        escape_html(&m.full_text),
        escape_html(&m.claimant),
        escape_html(&m.respondent),
        escape_html(&m.year),
    );
}

fn push_act(html: &mut String, number: usize, m: &ActMatch) {
    let _ = write!(
        html,
        "<div class=\"match act\"><strong>#{}</strong>: {}<div class=\"meta\">Act: {} | Year: {}</div></div>",
        number,
        escape_html(&m.full_text),
        escape_html(&m.name_part),
        escape_html(&m.year),
    );
}
