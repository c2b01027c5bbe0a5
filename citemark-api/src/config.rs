//! High-level configuration API

use crate::error::{ApiError, Result};
use citemark_engine::{CitationProcessor, Color, EngineConfig};

/// High-level configuration for the add-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) inner: EngineConfig,
    pub(crate) log_matches: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inner: EngineConfig::default(),
            log_matches: true,
        }
    }
}

impl Config {
    /// Only case citations are found and styled
    pub fn citations_only() -> Self {
        Self {
            inner: EngineConfig::citations_only(),
            ..Self::default()
        }
    }

    /// Only statute references are found and styled
    pub fn acts_only() -> Self {
        Self {
            inner: EngineConfig::acts_only(),
            ..Self::default()
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Underlying engine configuration
    pub fn engine(&self) -> &EngineConfig {
        &self.inner
    }

    /// Whether matches are logged when no output sink is attached
    pub fn log_matches(&self) -> bool {
        self.log_matches
    }

    pub(crate) fn processor(&self) -> CitationProcessor {
        CitationProcessor::with_config(self.inner.clone())
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Color for case citations, by name
    pub fn citation_color(mut self, name: &str) -> Result<Self> {
        self.config.inner.citation_style.color = parse_color(name)?;
        Ok(self)
    }

    /// Color for statute references, by name
    pub fn act_color(mut self, name: &str) -> Result<Self> {
        self.config.inner.act_style.color = parse_color(name)?;
        Ok(self)
    }

    /// Italicize styled ranges (both grammars)
    pub fn italic(mut self, enabled: bool) -> Self {
        self.config.inner.citation_style.italic = enabled;
        self.config.inner.act_style.italic = enabled;
        self
    }

    /// Enable or disable the case citation grammar
    pub fn citations(mut self, enabled: bool) -> Self {
        self.config.inner.citations = enabled;
        self
    }

    /// Enable or disable the statute grammar
    pub fn acts(mut self, enabled: bool) -> Self {
        self.config.inner.acts = enabled;
        self
    }

    /// Case-sensitive document searches
    pub fn match_case(mut self, enabled: bool) -> Self {
        self.config.inner.search.match_case = enabled;
        self
    }

    /// Whole-word document searches
    pub fn match_whole_word(mut self, enabled: bool) -> Self {
        self.config.inner.search.match_whole_word = enabled;
        self
    }

    /// Log matches at info level when no output sink is attached
    pub fn log_matches(mut self, enabled: bool) -> Self {
        self.config.log_matches = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if !self.config.inner.citations && !self.config.inner.acts {
            return Err(ApiError::Config(
                "at least one of citations or acts must be enabled".to_string(),
            ));
        }

        Ok(self.config)
    }
}

fn parse_color(name: &str) -> Result<Color> {
    name.parse::<Color>()
        .map_err(|e| ApiError::Config(e.to_string()))
}
