//! Public API for citemark
//!
//! This crate is what a host embeds. It decides whether the host can run the
//! add-in at all ([`initialize`]), keeps the registry of named triggers the
//! host invokes ([`AddIn::invoke`]), runs the engine against the host's
//! document and writes an HTML report of the matches to an injected
//! [`OutputSink`].
//!
//! ```
//! use citemark_api::{initialize, CompletionFlag, Config, HostDescriptor, MemorySink, RUN_TRIGGER};
//! use citemark_engine::InMemoryDocument;
//!
//! let add_in = initialize(&HostDescriptor::word(), Config::default())
//!     .into_add_in()
//!     .expect("word hosts are supported")
//!     .with_default_triggers();
//!
//! let mut doc = InMemoryDocument::new("Held: Lee v Smith [2003].");
//! let mut sink = MemorySink::new();
//! let mut event = CompletionFlag::new();
//!
//! let output = add_in
//!     .invoke(RUN_TRIGGER, &mut doc, Some(&mut sink), &mut event)
//!     .unwrap()
//!     .unwrap();
//!
//! assert_eq!(output.citation_count(), 1);
//! assert!(event.is_completed());
//! assert!(sink.current().unwrap().as_str().contains("Claimant: Lee"));
//! ```

#![warn(missing_docs)]

pub mod addin;
pub mod config;
pub mod dto;
pub mod error;
pub mod host;
pub mod report;
pub mod sink;
pub mod trigger;

use citemark_engine::InMemoryDocument;

// Re-export key types
pub use addin::AddIn;
pub use config::{Config, ConfigBuilder};
pub use dto::{MatchDTO, Metadata, Output};
pub use error::{ApiError, Result};
pub use host::{initialize, HostDescriptor, HostType, Readiness};
pub use report::{ReportBuilder, NO_MATCHES};
pub use sink::{Content, MemorySink, OutputSink, WriterSink};
pub use trigger::{ActionEvent, CompletionFlag, TriggerAction, RUN_TRIGGER, SHOW_PANE_TRIGGER};

// Convenience functions

/// Style the citations in `text` with default configuration
///
/// Returns the styled document together with the run output.
pub fn annotate_text(text: &str) -> Result<(InMemoryDocument, Output)> {
    annotate_text_with_config(text, Config::default())
}

/// Style the citations in `text` with a custom configuration
pub fn annotate_text_with_config(text: &str, config: Config) -> Result<(InMemoryDocument, Output)> {
    let add_in = AddIn::new(HostDescriptor::word(), config);
    let mut doc = InMemoryDocument::new(text);
    let output = add_in.run(&mut doc, None)?;
    Ok((doc, output))
}
