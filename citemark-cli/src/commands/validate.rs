//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match CliConfig::from_file(&self.config).and_then(|c| c.to_api_config().map(|_| c)) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!(
                    "  Citations: {} ({}{})",
                    enabled(config.patterns.citations),
                    if config.styles.italic { "italic " } else { "" },
                    config.styles.citation_color
                );
                println!(
                    "  Acts: {} ({}{})",
                    enabled(config.patterns.acts),
                    if config.styles.italic { "italic " } else { "" },
                    config.styles.act_color
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}

fn enabled(flag: bool) -> &'static str {
    if flag {
        "enabled"
    } else {
        "disabled"
    }
}
