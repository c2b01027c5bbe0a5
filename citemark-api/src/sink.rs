//! Output surface for run reports
//!
//! A run never looks its output surface up; the caller passes an
//! [`OutputSink`] in, or passes nothing and gets log output instead.

use crate::error::{ApiError, Result};
use std::fmt;
use std::io::Write;

/// Content written to a sink
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", content = "body", rename_all = "lowercase")
)]
pub enum Content {
    /// Plain text, shown as-is
    Text(String),
    /// Markup, rendered by the surface
    Html(String),
}

impl Content {
    /// The raw body
    pub fn as_str(&self) -> &str {
        match self {
            Content::Text(body) | Content::Html(body) => body,
        }
    }

    /// True for markup
    pub fn is_html(&self) -> bool {
        matches!(self, Content::Html(_))
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a run writes its report or error message
pub trait OutputSink {
    /// Replace whatever the surface currently shows
    fn write(&mut self, content: Content) -> Result<()>;
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write(&mut self, content: Content) -> Result<()> {
        (**self).write(content)
    }
}

/// Keeps every write in memory
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    writes: Vec<Content>,
}

impl MemorySink {
    /// Empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// What the surface shows now
    pub fn current(&self) -> Option<&Content> {
        self.writes.last()
    }

    /// Every write, oldest first
    pub fn writes(&self) -> &[Content] {
        &self.writes
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, content: Content) -> Result<()> {
        self.writes.push(content);
        Ok(())
    }
}

/// Streams every write to an [`std::io::Write`], one body per line
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn write(&mut self, content: Content) -> Result<()> {
        writeln!(self.writer, "{}", content.as_str())
            .and_then(|_| self.writer.flush())
            .map_err(|e| ApiError::Sink(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_keeps_latest() {
        let mut sink = MemorySink::new();
        sink.write(Content::Text("first".to_string())).unwrap();
        sink.write(Content::Html("<b>second</b>".to_string())).unwrap();

        assert_eq!(sink.writes().len(), 2);
        assert_eq!(
            sink.current(),
            Some(&Content::Html("<b>second</b>".to_string()))
        );
    }

    #[test]
    fn test_writer_sink() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write(Content::Text("No matches found.".to_string()))
            .unwrap();

        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(written, "No matches found.\n");
    }

    #[test]
    fn test_sink_through_mut_reference() {
        let mut sink = MemorySink::new();
        {
            let by_ref: &mut dyn OutputSink = &mut sink;
            by_ref.write(Content::Text("x".to_string())).unwrap();
        }
        assert_eq!(sink.writes().len(), 1);
        assert!(!sink.current().unwrap().is_html());
    }
}
