//! citemark command-line entry point

use citemark_cli::commands::Commands;
use clap::Parser;

/// Find and style legal citations in text files
#[derive(Debug, Parser)]
#[command(name = "citemark", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    Cli::parse().command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_process() {
        let cli = Cli::try_parse_from(["citemark", "process", "-i", "a.txt", "-f", "json"]).unwrap();
        assert!(matches!(cli.command, Commands::Process(_)));
    }
}
