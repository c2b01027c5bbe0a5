//! Plain text output formatter

use super::{FileResult, OutputFormatter};
use anyhow::Result;
use citemark_api::NO_MATCHES;
use std::io::Write;

/// Plain text formatter - one line per match, then a summary
pub struct TextFormatter<W: Write> {
    writer: W,
    files: usize,
    citations: usize,
    acts: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            files: 0,
            citations: 0,
            acts: 0,
        }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_file(&mut self, file: &FileResult) -> Result<()> {
        let output = &file.output;
        self.files += 1;
        self.citations += output.citation_count();
        self.acts += output.act_count();

        writeln!(self.writer, "== {} ==", file.path)?;
        if output.matches.is_empty() {
            writeln!(self.writer, "{NO_MATCHES}")?;
        }
        for (i, m) in output.matches.iter().enumerate() {
            writeln!(
                self.writer,
                "{}. [{}] {}",
                i + 1,
                m.kind.label(),
                m.full_text
            )?;
        }

        let summary = &output.summary;
        writeln!(
            self.writer,
            "-- {} citations, {} acts, {} ranges styled, {} failed",
            summary.citations,
            summary.acts,
            summary.formatted_ranges,
            summary.failed_ranges + summary.failed_matches
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.files > 1 {
            writeln!(
                self.writer,
                "Total: {} files, {} citations, {} acts",
                self.files, self.citations, self.acts
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
