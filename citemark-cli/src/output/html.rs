//! HTML output formatter

use super::{FileResult, OutputFormatter};
use anyhow::Result;
use citemark_core::escape_html;
use std::io::Write;

const HEADER: &str = "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>citemark</title>\n<style>\n.match { margin: 0.5em 0; }\n.meta { color: #666; font-size: 0.9em; }\n</style>\n</head>\n<body>\n";
const FOOTER: &str = "</body>\n</html>\n";

/// HTML formatter - styled documents followed by their match reports
pub struct HtmlFormatter<W: Write> {
    writer: W,
    include_document: bool,
    started: bool,
}

impl<W: Write> HtmlFormatter<W> {
    /// Create a new HTML formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            include_document: true,
            started: false,
        }
    }

    /// Include or leave out the styled document
    pub fn include_document(mut self, include: bool) -> Self {
        self.include_document = include;
        self
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn start(&mut self) -> Result<()> {
        if !self.started {
            self.writer.write_all(HEADER.as_bytes())?;
            self.started = true;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for HtmlFormatter<W> {
    fn format_file(&mut self, file: &FileResult) -> Result<()> {
        self.start()?;

        writeln!(self.writer, "<section class=\"file\">")?;
        writeln!(self.writer, "<h2>{}</h2>", escape_html(&file.path))?;
        if self.include_document {
            writeln!(
                self.writer,
                "<div class=\"document\">{}</div>",
                file.document_html
            )?;
        }

        let report = &file.output.report;
        let body = if report.is_html() {
            report.as_str().to_string()
        } else {
            escape_html(report.as_str())
        };
        writeln!(self.writer, "<div class=\"report\">{body}</div>")?;
        writeln!(self.writer, "</section>")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.start()?;
        self.writer.write_all(FOOTER.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
