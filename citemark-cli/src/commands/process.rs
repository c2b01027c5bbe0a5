//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{FileResult, HtmlFormatter, JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use citemark_api::{
    initialize, AddIn, CompletionFlag, HostDescriptor, OutputSink, WriterSink, RUN_TRIGGER,
};
use citemark_engine::InMemoryDocument;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also write every match report to this file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "CITEMARK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per match with a per-file summary
    Text,
    /// JSON array of files with matches and counters
    Json,
    /// Styled documents followed by their match reports
    Html,
}

impl OutputFormat {
    /// Every format, in listing order
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Html];

    /// Name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "one line per match with a per-file summary",
            OutputFormat::Json => "JSON array of files with matches and counters",
            OutputFormat::Html => "styled documents followed by their match reports",
        }
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting citation processing");
        log::debug!("Arguments: {:?}", self);

        let cli_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let format = self.resolve_format(&cli_config)?;
        let add_in = create_add_in(&cli_config)?;

        let files = resolve_patterns(&self.input)?;
        log::info!("Processing {} file(s)", files.len());

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };
        let mut formatter = create_formatter(format, writer, &cli_config);

        let mut report_sink = match &self.report {
            Some(path) => Some(WriterSink::new(File::create(path).with_context(|| {
                format!("Failed to create report file: {}", path.display())
            })?)),
            None => None,
        };

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        for path in &files {
            let sink = report_sink.as_mut().map(|s| s as &mut dyn OutputSink);
            let result = process_file(&add_in, path, sink)?;
            formatter.format_file(&result)?;
            progress.file_completed(&result.path);
        }

        progress.finish();
        formatter.finish()?;

        Ok(())
    }

    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        <OutputFormat as ValueEnum>::from_str(&config.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                config.output.default_format
            ))
            .into()
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

/// Bring the add-in up as a word-processor host
fn create_add_in(config: &CliConfig) -> Result<AddIn> {
    let api_config = config.to_api_config()?;
    let add_in = initialize(&HostDescriptor::word().with_platform("cli"), api_config)
        .into_add_in()
        .ok_or_else(|| CliError::ProcessingError("host is not supported".to_string()))?;
    Ok(add_in.with_default_triggers())
}

fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    config: &CliConfig,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => {
            Box::new(JsonFormatter::new(writer).pretty(config.output.pretty_json))
        }
        OutputFormat::Html => {
            Box::new(HtmlFormatter::new(writer).include_document(config.output.include_document))
        }
    }
}

/// Load one file into a document and run the add-in's trigger on it
fn process_file(
    add_in: &AddIn,
    path: &Path,
    sink: Option<&mut dyn OutputSink>,
) -> Result<FileResult> {
    let size = FileReader::file_size(path)?;
    log::debug!("Reading {} ({} bytes)", path.display(), size);

    let text = FileReader::read_text(path)?;
    let mut doc = InMemoryDocument::new(&text);
    let mut event = CompletionFlag::new();

    let output = add_in
        .invoke(RUN_TRIGGER, &mut doc, sink, &mut event)
        .with_context(|| format!("Failed to process {}", path.display()))?
        .ok_or_else(|| {
            CliError::ProcessingError(format!("trigger '{RUN_TRIGGER}' did not run"))
        })?;

    let summary = &output.summary;
    if summary.has_failures() {
        log::warn!(
            "{}: {} ranges and {} matches could not be styled",
            path.display(),
            summary.failed_ranges,
            summary.failed_matches
        );
    }

    Ok(FileResult {
        path: path.display().to_string(),
        document_html: doc.to_html(),
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use citemark_api::MemorySink;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: Vec<String>) -> ProcessArgs {
        ProcessArgs {
            input,
            output: None,
            format: None,
            report: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_format_from_config() {
        let mut config = CliConfig::default();
        config.output.default_format = "JSON".to_string();

        let process = args(vec!["a.txt".to_string()]);
        assert_eq!(process.resolve_format(&config).unwrap(), OutputFormat::Json);

        let explicit = ProcessArgs {
            format: Some(OutputFormat::Html),
            ..args(vec!["a.txt".to_string()])
        };
        assert_eq!(explicit.resolve_format(&config).unwrap(), OutputFormat::Html);

        config.output.default_format = "pdf".to_string();
        assert!(process.resolve_format(&config).is_err());
    }

    #[test]
    fn test_process_file_writes_report_to_sink() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("judgment.txt");
        fs::write(&path, "Held: Lee v Smith [2003].").unwrap();

        let add_in = create_add_in(&CliConfig::default()).unwrap();
        let mut sink = MemorySink::new();
        let result = process_file(&add_in, &path, Some(&mut sink)).unwrap();

        assert_eq!(result.output.citation_count(), 1);
        assert!(result.document_html.contains("color:red"));
        assert!(sink.current().unwrap().as_str().contains("Claimant: Lee"));
    }

    #[test]
    fn test_execute_writes_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("judgment.txt");
        let output = temp_dir.path().join("out.json");
        fs::write(&input, "The Crimes Act (1961) applies.").unwrap();

        let process = ProcessArgs {
            output: Some(output.clone()),
            format: Some(OutputFormat::Json),
            ..args(vec![input.display().to_string()])
        };
        process.execute().unwrap();

        let json = fs::read_to_string(&output).unwrap();
        assert!(json.contains("\"act\": \"The Crimes Act\""));
    }
}
