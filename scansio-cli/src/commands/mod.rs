//! CLI command implementations

use clap::{Parser, Subcommand};

pub mod generate_config;
pub mod scan;

/// Prosimetric scansion of macronized Latin text
#[derive(Debug, Parser)]
#[command(name = "scansio", version, about)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan text files and print their long/short syllable patterns
    Scan(scan::ScanArgs),

    /// Generate a default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_scan_command_parses() {
        let cli = Cli::try_parse_from(["scansio", "scan", "-i", "cicero.txt"]).unwrap();
        match cli.command {
            Commands::Scan(args) => {
                assert_eq!(args.input, vec!["cicero.txt".to_string()]);
                assert!(!args.sequential);
            }
            _ => panic!("expected scan command"),
        }
    }

    #[test]
    fn test_generate_config_command_parses() {
        let cli = Cli::try_parse_from(["scansio", "generate-config"]).unwrap();
        assert!(matches!(cli.command, Commands::GenerateConfig(_)));
    }

    #[test]
    fn test_scan_requires_input() {
        assert!(Cli::try_parse_from(["scansio", "scan"]).is_err());
    }
}
