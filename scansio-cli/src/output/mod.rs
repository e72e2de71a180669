//! Output formatting module

use anyhow::Result;
use scansio_core::{SentenceScansion, WeightGlyphs};

/// Trait for scansion output formatters
pub trait ScansionFormatter {
    /// Format and output the scansion of a single sentence
    fn format_sentence(&mut self, sentence: &SentenceScansion, glyphs: WeightGlyphs) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
