//! Pipeline orchestration
//!
//! [`ScansionProcessor`] runs the full pipeline — tokenize, syllabify,
//! normalize digraphs, elide, condense, scan — and packages the result with
//! per-sentence diagnostics and run metadata.
//!
//! Sentences never share state, so the processor can fan them out across a
//! rayon thread pool; output order always matches input order.

use crate::digraph::fix_qu;
use crate::elision::elide;
use crate::error::CoreError;
use crate::scansion::{render, scan, Weight, WeightGlyphs};
use crate::sentence::{Sentence, Syllable};
use crate::syllabifier::syllabify;
use crate::tokenizer::Tokenizer;
use serde::Serialize;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Processor configuration.
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Process sentences in parallel. Has no effect without the `parallel`
    /// feature.
    pub parallel: bool,
    /// Worker thread count for parallel runs; `None` uses the global pool.
    pub threads: Option<usize>,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        ProcessorConfig {
            parallel: true,
            threads: None,
        }
    }
}

/// A word token skipped because the pipeline could not syllabify it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedToken {
    /// Zero-based position of the token within its sentence.
    pub word_index: usize,
    /// The token as handed to the syllabifier.
    pub token: String,
    /// Why it was skipped.
    pub reason: CoreError,
}

/// Scansion of one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceScansion {
    /// Zero-based sentence position within the input.
    pub index: usize,
    /// One weight per surviving syllable, in order.
    pub weights: Vec<Weight>,
    /// The surviving syllables after elision, in order.
    pub syllables: Vec<Syllable>,
    /// Tokens skipped in this sentence, with positions.
    pub skipped: Vec<SkippedToken>,
}

impl SentenceScansion {
    /// Render the weight sequence as a glyph string.
    pub fn render(&self, glyphs: WeightGlyphs) -> String {
        render(&self.weights, glyphs)
    }
}

/// Metadata for one processing run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessingMetadata {
    /// Number of sentences processed.
    pub sentence_count: usize,
    /// Total surviving syllables across all sentences.
    pub syllable_count: usize,
    /// Total tokens skipped across all sentences.
    pub skipped_tokens: usize,
    /// Wall-clock processing time in milliseconds.
    pub processing_time_ms: f64,
    /// Whether sentences were processed in parallel.
    pub parallel: bool,
}

/// Full output of a processing run: one scansion per input sentence, in
/// input order, plus run metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Output {
    /// Per-sentence scansions.
    pub sentences: Vec<SentenceScansion>,
    /// Run metadata.
    pub metadata: ProcessingMetadata,
}

/// Main entry point for Latin scansion.
///
/// # Examples
///
/// ```
/// use scansio_core::{ScansionProcessor, WeightGlyphs};
///
/// let processor = ScansionProcessor::new();
/// let output = processor.scan_text("quō usque tandem abūtēre, Catilīna, patientiā nostrā.");
///
/// assert_eq!(output.sentences.len(), 1);
/// let glyphs = output.sentences[0].render(WeightGlyphs::default());
/// assert_eq!(glyphs.chars().count(), output.sentences[0].syllables.len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScansionProcessor {
    tokenizer: Tokenizer,
    config: ProcessorConfig,
}

impl ScansionProcessor {
    /// Create a processor with the default tokenizer and configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a customized processor.
    pub fn builder() -> ScansionProcessorBuilder {
        ScansionProcessorBuilder::new()
    }

    /// Tokenize raw text and scan it.
    pub fn scan_text(&self, text: &str) -> Output {
        let sentences = self.tokenizer.tokenize(text);
        self.scan_tokens(&sentences)
    }

    /// Scan pre-tokenized sentences: lowercase word tokens, diacritics
    /// preserved, in textual order. Use this to plug in an external
    /// sentence tokenizer.
    ///
    /// Malformed tokens are skipped and reported in the sentence's
    /// `skipped` list; one bad token never aborts the rest of the run.
    pub fn scan_tokens(&self, sentences: &[Vec<String>]) -> Output {
        let start = Instant::now();
        let (scanned, parallel) = self.scan_all(sentences);

        let metadata = ProcessingMetadata {
            sentence_count: scanned.len(),
            syllable_count: scanned.iter().map(|s| s.syllables.len()).sum(),
            skipped_tokens: scanned.iter().map(|s| s.skipped.len()).sum(),
            processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
            parallel,
        };

        Output {
            sentences: scanned,
            metadata,
        }
    }

    #[cfg(feature = "parallel")]
    fn scan_all(&self, sentences: &[Vec<String>]) -> (Vec<SentenceScansion>, bool) {
        if !self.config.parallel {
            return (self.scan_sequential(sentences), false);
        }
        let scanned = match self.config.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build();
                match pool {
                    Ok(pool) => pool.install(|| self.scan_parallel(sentences)),
                    // Pool construction is best-effort; fall back to the
                    // global pool rather than failing the run.
                    Err(_) => self.scan_parallel(sentences),
                }
            }
            None => self.scan_parallel(sentences),
        };
        (scanned, true)
    }

    #[cfg(not(feature = "parallel"))]
    fn scan_all(&self, sentences: &[Vec<String>]) -> (Vec<SentenceScansion>, bool) {
        (self.scan_sequential(sentences), false)
    }

    fn scan_sequential(&self, sentences: &[Vec<String>]) -> Vec<SentenceScansion> {
        sentences
            .iter()
            .enumerate()
            .map(|(index, tokens)| scan_sentence(index, tokens))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn scan_parallel(&self, sentences: &[Vec<String>]) -> Vec<SentenceScansion> {
        sentences
            .par_iter()
            .enumerate()
            .map(|(index, tokens)| scan_sentence(index, tokens))
            .collect()
    }
}

/// Run the pipeline over one sentence worth of tokens.
fn scan_sentence(index: usize, tokens: &[String]) -> SentenceScansion {
    let mut words = Vec::with_capacity(tokens.len());
    let mut skipped = Vec::new();

    for (word_index, token) in tokens.iter().enumerate() {
        match syllabify(token) {
            Ok(mut word) => {
                fix_qu(&mut word);
                words.push(word);
            }
            Err(reason) => skipped.push(SkippedToken {
                word_index,
                token: token.clone(),
                reason,
            }),
        }
    }

    let mut sentence = Sentence::from_words(words);
    elide(&mut sentence);
    let syllables = sentence.condense();
    let weights = scan(&syllables);

    SentenceScansion {
        index,
        weights,
        syllables,
        skipped,
    }
}

/// Builder for [`ScansionProcessor`].
#[derive(Debug, Clone, Default)]
pub struct ScansionProcessorBuilder {
    tokenizer: Option<Tokenizer>,
    config: ProcessorConfig,
}

impl ScansionProcessorBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom tokenizer.
    pub fn tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Drop additional abbreviation tokens during tokenization.
    pub fn abbreviations<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tokenizer = Some(Tokenizer::with_abbreviations(extra));
        self
    }

    /// Disable per-sentence parallelism.
    pub fn sequential(mut self) -> Self {
        self.config.parallel = false;
        self
    }

    /// Set the worker thread count for parallel runs.
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.config.threads = threads;
        self
    }

    /// Build the processor.
    pub fn build(self) -> ScansionProcessor {
        ScansionProcessor {
            tokenizer: self.tokenizer.unwrap_or_default(),
            config: self.config,
        }
    }
}
