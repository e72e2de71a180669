//! JSON output formatter

use super::ScansionFormatter;
use anyhow::Result;
use scansio_core::{SentenceScansion, WeightGlyphs};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs sentence scansions as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    sentences: Vec<SentenceData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceData {
    /// Zero-based sentence position
    pub index: usize,
    /// Rendered weight glyphs, one per syllable
    pub scansion: String,
    /// Surviving syllables after elision
    pub syllables: Vec<String>,
    /// Tokens skipped in this sentence
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub skipped: Vec<SkippedData>,
}

/// A skipped token with its position and reason
#[derive(Debug, Serialize, Deserialize)]
pub struct SkippedData {
    /// Zero-based token position within the sentence
    pub word_index: usize,
    /// The skipped token
    pub token: String,
    /// Human-readable reason
    pub reason: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            sentences: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> ScansionFormatter for JsonFormatter<W> {
    fn format_sentence(&mut self, sentence: &SentenceScansion, glyphs: WeightGlyphs) -> Result<()> {
        self.sentences.push(SentenceData {
            index: sentence.index,
            scansion: sentence.render(glyphs),
            syllables: sentence
                .syllables
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
            skipped: sentence
                .skipped
                .iter()
                .map(|s| SkippedData {
                    word_index: s.word_index,
                    token: s.token.clone(),
                    reason: s.reason.to_string(),
                })
                .collect(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.sentences)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.sentences)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
