//! The running add-in: trigger registry and pipeline

use crate::config::Config;
use crate::dto::{MatchDTO, Metadata, Output};
use crate::error::{ApiError, Result};
use crate::host::HostDescriptor;
use crate::report::ReportBuilder;
use crate::sink::{Content, OutputSink};
use crate::trigger::{ActionEvent, TriggerAction, RUN_TRIGGER, SHOW_PANE_TRIGGER};
use citemark_core::MatchSet;
use citemark_engine::{CitationProcessor, Document, EngineError};
use log::{debug, error, info, warn};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Instant;

/// Add-in bound to an applicable host
///
/// Obtained from [`initialize`](crate::initialize).
pub struct AddIn {
    descriptor: HostDescriptor,
    config: Config,
    processor: CitationProcessor,
    report: ReportBuilder,
    triggers: BTreeMap<String, TriggerAction>,
}

impl fmt::Debug for AddIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddIn")
            .field("descriptor", &self.descriptor)
            .field("config", &self.config)
            .field("triggers", &self.triggers)
            .finish()
    }
}

impl AddIn {
    pub(crate) fn new(descriptor: HostDescriptor, config: Config) -> Self {
        Self {
            processor: config.processor(),
            descriptor,
            config,
            report: ReportBuilder::new(),
            triggers: BTreeMap::new(),
        }
    }

    /// Register the run and show-pane triggers under their standard names
    pub fn with_default_triggers(mut self) -> Self {
        self.triggers
            .insert(RUN_TRIGGER.to_string(), TriggerAction::RunPipeline);
        self.triggers
            .insert(SHOW_PANE_TRIGGER.to_string(), TriggerAction::ShowPane);
        self
    }

    /// Host this add-in was initialized for
    pub fn host(&self) -> &HostDescriptor {
        &self.descriptor
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Register a parameterless action under `name`
    pub fn register_trigger(&mut self, name: impl Into<String>, action: TriggerAction) -> Result<()> {
        let name = name.into();
        if self.triggers.contains_key(&name) {
            return Err(ApiError::DuplicateTrigger(name));
        }
        debug!("Registered trigger '{}' -> {:?}", name, action);
        self.triggers.insert(name, action);
        Ok(())
    }

    /// Registered triggers, sorted by name
    pub fn triggers(&self) -> impl Iterator<Item = (&str, TriggerAction)> {
        self.triggers.iter().map(|(name, action)| (name.as_str(), *action))
    }

    /// Invoke a registered trigger
    ///
    /// `event` is completed exactly once whatever happens, including an
    /// unknown trigger name or a failed run. Returns `None` for actions that
    /// do not run the pipeline.
    pub fn invoke<D: Document>(
        &self,
        name: &str,
        doc: &mut D,
        sink: Option<&mut dyn OutputSink>,
        event: &mut dyn ActionEvent,
    ) -> Result<Option<Output>> {
        let result = match self.triggers.get(name) {
            None => {
                warn!("Invoked unknown trigger '{}'", name);
                Err(ApiError::UnknownTrigger(name.to_string()))
            }
            Some(TriggerAction::ShowPane) => Ok(None),
            Some(TriggerAction::RunPipeline) => self.run(doc, sink).map(Some),
        };

        event.completed();
        result
    }

    /// Find, style and report every match in `doc`
    ///
    /// The report goes to `sink`; without a sink the matches are logged
    /// instead. If the document text cannot be read, `Error: <message>` is
    /// written to the sink and nothing is styled.
    pub fn run<D: Document>(&self, doc: &mut D, sink: Option<&mut dyn OutputSink>) -> Result<Output> {
        let start = Instant::now();

        let matches = match self.processor.extract(doc) {
            Ok(matches) => matches,
            Err(err) => {
                let err = match err {
                    EngineError::Document(e) => ApiError::DocumentUnavailable(e.to_string()),
                    other => ApiError::Engine(other),
                };
                error!("Error searching document: {}", err);
                if let Some(sink) = sink {
                    sink.write(Content::Text(format!("Error: {err}")))?;
                }
                return Err(err);
            }
        };

        let summary = self.processor.format_matches(doc, &matches);
        let report = self.report.render(&matches);

        match sink {
            Some(sink) => sink.write(report.clone())?,
            None if self.config.log_matches => log_matches(&matches),
            None => {}
        }

        Ok(Output {
            matches: MatchDTO::from_set(&matches),
            summary,
            report,
            metadata: Metadata {
                host: self.descriptor.host.clone(),
                processing_time_ms: start.elapsed().as_millis() as u64,
            },
        })
    }
}

fn log_matches(matches: &MatchSet) {
    if matches.is_empty() {
        info!("No matches found.");
        return;
    }
    for (i, m) in matches.iter().enumerate() {
        info!("#{} {}: {}", i + 1, m.kind().label(), m.full_text());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{initialize, HostType};
    use crate::sink::MemorySink;
    use crate::trigger::CompletionFlag;
    use citemark_engine::InMemoryDocument;

    fn add_in() -> AddIn {
        initialize(&HostDescriptor::word(), Config::default())
            .into_add_in()
            .unwrap()
            .with_default_triggers()
    }

    #[test]
    fn test_duplicate_trigger_rejected() {
        let mut add_in = add_in();
        let err = add_in
            .register_trigger(RUN_TRIGGER, TriggerAction::RunPipeline)
            .unwrap_err();
        assert!(matches!(err, ApiError::DuplicateTrigger(name) if name == RUN_TRIGGER));

        add_in
            .register_trigger("styleCitations", TriggerAction::RunPipeline)
            .unwrap();
        let names: Vec<_> = add_in.triggers().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["action", "run", "styleCitations"]);
    }

    #[test]
    fn test_show_pane_completes_without_running() {
        let add_in = add_in();
        let mut doc = InMemoryDocument::new("Lee v Smith [2003]");
        let mut sink = MemorySink::new();
        let mut event = CompletionFlag::new();

        let output = add_in
            .invoke(SHOW_PANE_TRIGGER, &mut doc, Some(&mut sink), &mut event)
            .unwrap();

        assert!(output.is_none());
        assert_eq!(event.count(), 1);
        assert!(sink.current().is_none());
        assert_eq!(doc.sync_count(), 0);
    }

    #[test]
    fn test_unknown_trigger_still_completes() {
        let add_in = add_in();
        let mut doc = InMemoryDocument::new("");
        let mut event = CompletionFlag::new();

        let err = add_in
            .invoke("nope", &mut doc, None, &mut event)
            .unwrap_err();

        assert!(matches!(err, ApiError::UnknownTrigger(_)));
        assert_eq!(event.count(), 1);
    }

    #[test]
    fn test_run_without_sink() {
        let add_in = add_in();
        let mut doc = InMemoryDocument::new("Lee v Smith [2003]");

        let output = add_in.run(&mut doc, None).unwrap();
        assert_eq!(output.citation_count(), 1);
        assert_eq!(output.metadata.host, HostType::Word);
        assert!(output.report.is_html());
    }
}
