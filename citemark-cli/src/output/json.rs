//! JSON output formatter

use super::{FileResult, OutputFormatter};
use anyhow::Result;
use citemark_api::MatchDTO;
use citemark_engine::RunSummary;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs one object per file as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    files: Vec<FileData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct FileData {
    /// Input path
    pub file: String,
    /// Matches in processing order
    pub matches: Vec<MatchDTO>,
    /// Styling counters
    pub summary: RunSummary,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
            files: Vec::new(),
        }
    }

    /// Toggle pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_file(&mut self, file: &FileResult) -> Result<()> {
        self.files.push(FileData {
            file: file.path.clone(),
            matches: file.output.matches.clone(),
            summary: file.output.summary,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.files)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.files)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
