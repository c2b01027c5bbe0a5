//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Styling configuration
    #[serde(default)]
    pub styles: StylesConfig,

    /// Grammar and search configuration
    #[serde(default)]
    pub patterns: PatternsConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Styling-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct StylesConfig {
    /// Color for case citations
    pub citation_color: String,

    /// Color for statute references
    pub act_color: String,

    /// Italicize styled text
    pub italic: bool,
}

impl Default for StylesConfig {
    fn default() -> Self {
        Self {
            citation_color: "red".to_string(),
            act_color: "blue".to_string(),
            italic: true,
        }
    }
}

/// Grammar-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct PatternsConfig {
    /// Find case citations
    pub citations: bool,

    /// Find statute references
    pub acts: bool,

    /// Case-sensitive document search
    pub match_case: bool,

    /// Whole-word document search
    pub match_whole_word: bool,
}

impl Default for PatternsConfig {
    fn default() -> Self {
        Self {
            citations: true,
            acts: true,
            match_case: false,
            match_whole_word: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Include the styled document in HTML output
    pub include_document: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            include_document: true,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config = toml::from_str(content)?;
        Ok(config)
    }

    /// Build the add-in configuration
    pub fn to_api_config(&self) -> Result<citemark_api::Config> {
        citemark_api::Config::builder()
            .citation_color(&self.styles.citation_color)
            .and_then(|b| b.act_color(&self.styles.act_color))
            .and_then(|b| {
                b.italic(self.styles.italic)
                    .citations(self.patterns.citations)
                    .acts(self.patterns.acts)
                    .match_case(self.patterns.match_case)
                    .match_whole_word(self.patterns.match_whole_word)
                    .build()
            })
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}
