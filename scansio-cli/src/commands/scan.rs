//! Scan command implementation

use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, ScansionFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use scansio_core::{ScansionProcessor, WeightGlyphs};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the scan command
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Glyph for a long syllable
    #[arg(long, value_name = "CHAR")]
    pub long_glyph: Option<char>,

    /// Glyph for a short syllable
    #[arg(long, value_name = "CHAR")]
    pub short_glyph: Option<char>,

    /// Print the syllable breakdown next to each scansion line
    #[arg(short = 's', long)]
    pub syllables: bool,

    /// Process sentences sequentially instead of in parallel
    #[arg(long)]
    pub sequential: bool,

    /// Number of worker threads (default: all cores)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One glyph string per sentence per line
    Text,
    /// JSON array of sentence scansions with syllables and diagnostics
    Json,
}

impl ScanArgs {
    /// Execute the scan command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let glyphs = WeightGlyphs {
            long: self.long_glyph.unwrap_or(config.output.long_glyph),
            short: self.short_glyph.unwrap_or(config.output.short_glyph),
        };
        let format = self.format.unwrap_or_else(|| {
            if config.output.default_format.eq_ignore_ascii_case("json") {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            }
        });

        let files = resolve_patterns(&self.input)?;
        let processor = self.build_processor(&config);

        log::info!(
            "Scanning {} file(s) with {} thread(s)",
            files.len(),
            self.thread_count(&config)
        );

        let writer = self.open_writer()?;
        let mut formatter: Box<dyn ScansionFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, self.syllables)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
        };

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        for path in &files {
            let text = FileReader::read_text(path)?;
            let output = processor.scan_text(&text);

            if output.metadata.skipped_tokens > 0 {
                log::warn!(
                    "{}: skipped {} token(s) without a vocalic nucleus",
                    path.display(),
                    output.metadata.skipped_tokens
                );
            }
            log::debug!(
                "{}: {} sentence(s), {} syllable(s) in {:.2} ms",
                path.display(),
                output.metadata.sentence_count,
                output.metadata.syllable_count,
                output.metadata.processing_time_ms
            );

            for sentence in &output.sentences {
                formatter.format_sentence(sentence, glyphs)?;
            }
            progress.file_completed(&path.display().to_string());
        }

        formatter.finish()?;
        progress.finish();

        Ok(())
    }

    fn build_processor(&self, config: &CliConfig) -> ScansionProcessor {
        let mut builder = ScansionProcessor::builder()
            .abbreviations(config.tokenizer.extra_abbreviations.iter().cloned());

        if self.sequential || config.performance.sequential {
            builder = builder.sequential();
        }
        let threads = self.threads.or(match config.performance.worker_threads {
            0 => None,
            n => Some(n),
        });
        builder.threads(threads).build()
    }

    fn thread_count(&self, config: &CliConfig) -> usize {
        if self.sequential || config.performance.sequential {
            return 1;
        }
        self.threads
            .or(match config.performance.worker_threads {
                0 => None,
                n => Some(n),
            })
            .unwrap_or_else(num_cpus::get)
    }

    fn open_writer(&self) -> Result<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
