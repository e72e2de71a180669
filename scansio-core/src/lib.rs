//! Prosimetric scansion of macronized Latin text
//!
//! Computes, per sentence, the pattern of metrically long and short
//! syllables of classical Latin prose or verse. Input must be macronized:
//! long vowels carry a macron (ā ē ī ō ū); nothing is inferred for
//! unmarked text.
//!
//! # Pipeline
//!
//! The stages run strictly in order, each consuming the previous stage's
//! structure:
//!
//! 1. **Tokenizer** — sentences of lowercase word tokens ([`Tokenizer`])
//! 2. **Syllabifier** — words into syllables ([`syllabify`])
//! 3. **Digraph normalizer** — "qu" rejoined to its vowel ([`fix_qu`])
//! 4. **Elision merger** — cross-word vowel slurring ([`elide`])
//! 5. **Condenser** — flat per-sentence syllables ([`Sentence::condense`])
//! 6. **Scansion engine** — long/short weights ([`scan`])
//!
//! [`ScansionProcessor`] wires the stages together and is the usual entry
//! point; the stage functions are public for callers that bring their own
//! tokenization or want partial results.
//!
//! # Example
//!
//! ```rust
//! use scansio_core::{ScansionProcessor, WeightGlyphs};
//!
//! let processor = ScansionProcessor::new();
//! let output = processor.scan_text("quam diū etiam furor iste tuus nōs ēlūdet.");
//!
//! assert_eq!(output.sentences.len(), 1);
//! assert_eq!(output.sentences[0].render(WeightGlyphs::default()), "-u-u-uu-uu----u");
//! ```

#![warn(missing_docs)]

pub mod alphabet;
pub mod digraph;
pub mod elision;
pub mod error;
pub mod processor;
pub mod scansion;
pub mod sentence;
pub mod syllabifier;
pub mod tokenizer;

pub use digraph::fix_qu;
pub use elision::elide;
pub use error::{CoreError, Result};
pub use processor::{
    Output, ProcessingMetadata, ProcessorConfig, ScansionProcessor, ScansionProcessorBuilder,
    SentenceScansion, SkippedToken,
};
pub use scansion::{long_by_nature, long_by_position, render, scan, Weight, WeightGlyphs};
pub use sentence::{Sentence, Syllable, SyllableVec, Word};
pub use syllabifier::syllabify;
pub use tokenizer::{Tokenizer, PRAENOMEN_ABBREVIATIONS};
