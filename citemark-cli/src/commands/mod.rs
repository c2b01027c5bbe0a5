//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find and style citations in text files
    Process(process::ProcessArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List available style colors
    Colors,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Lines printed by the subcommand
    pub fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Formats => process::OutputFormat::ALL
                .iter()
                .map(|format| format!("{:<6}{}", format.name(), format.description()))
                .collect(),
            ListCommands::Colors => [citemark_core::Color::Red, citemark_core::Color::Blue]
                .iter()
                .map(|color| color.to_string())
                .collect(),
        }
    }

    /// Print the listing
    pub fn execute(&self) {
        for line in self.lines() {
            println!("{line}");
        }
    }
}
