//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = generate_template()?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, &template)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                println!("Configuration written to {}", path.display());
            }
            None => print!("{template}"),
        }

        Ok(())
    }
}

/// Render the default configuration with a usage header
fn generate_template() -> Result<String> {
    let defaults = CliConfig::default().to_toml()?;
    Ok(format!(
        "# scansio configuration\n\
         #\n\
         # Pass with: scansio scan -i input.txt -c scansio.toml\n\
         # Glyphs must be single characters; worker_threads = 0 uses all cores.\n\n\
         {defaults}"
    ))
}
