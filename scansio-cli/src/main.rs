//! scansio command-line entry point

use clap::Parser;
use scansio_cli::commands::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scan(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
