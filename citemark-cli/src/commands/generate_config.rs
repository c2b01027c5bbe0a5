//! Generate config command implementation

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to change colors or grammars");
        println!("2. Validate your configuration:");
        println!("   citemark validate -c {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   citemark process -i judgment.txt -c {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template configuration content; every value is the default
    pub fn template() -> &'static str {
        r#"# citemark configuration

# How matched text is styled. Only the text before the bracketed year
# is styled; the year itself is left alone.
[styles]
# Color for case citations such as "Lee v Smith [2003]" (red or blue)
citation_color = "red"
# Color for statute references such as "The Crimes Act (1961)" (red or blue)
act_color = "blue"
italic = true

[patterns]
# Find "A v B [YEAR]" case citations
citations = true
# Find "Name Act (YEAR)" statute references
acts = true
# Case-sensitive search when re-locating matches in the document
match_case = false
# Only match whole words when re-locating matches in the document
match_whole_word = false

[output]
# text, json or html
default_format = "text"
# Include the styled document in html output
include_document = true
pretty_json = true
"#
    }
}
