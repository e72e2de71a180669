//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// Tokenizer configuration
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Default output format ("text" or "json")
    pub default_format: String,

    /// Glyph printed for a long syllable
    pub long_glyph: char,

    /// Glyph printed for a short syllable
    pub short_glyph: char,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            long_glyph: '-',
            short_glyph: 'u',
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct PerformanceConfig {
    /// Disable per-sentence parallelism
    pub sequential: bool,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            sequential: false,
            worker_threads: 0,
        }
    }
}

/// Tokenizer-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct TokenizerConfig {
    /// Abbreviation tokens to drop in addition to the built-in
    /// Latin praenomen list
    pub extra_abbreviations: Vec<String>,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Serialize this configuration to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
