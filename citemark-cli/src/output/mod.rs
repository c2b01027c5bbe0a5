//! Output formatting module

use anyhow::Result;
use citemark_api::Output;

/// One processed file
#[derive(Debug, Clone)]
pub struct FileResult {
    /// Path as given on the command line
    pub path: String,
    /// Styled document rendered as HTML
    pub document_html: String,
    /// What the run produced
    pub output: Output,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one processed file
    fn format_file(&mut self, file: &FileResult) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod html;
pub mod json;
pub mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;
