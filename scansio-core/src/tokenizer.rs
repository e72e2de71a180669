//! Whitespace/period tokenizer for pre-cleaned Latin text
//!
//! Turns raw macronized text into the shape the pipeline consumes: an
//! ordered list of sentences, each an ordered list of lowercase word tokens
//! with diacritics preserved. Numerals, symbolic punctuation and a fixed
//! abbreviation list are discarded, and only '.' ends a sentence.
//!
//! This is a deliberately simple splitter. Anything needing real
//! sentence-boundary detection should pre-segment the text and feed the
//! pipeline through [`crate::ScansionProcessor::scan_tokens`] instead.

use crate::alphabet;
use std::collections::HashSet;

/// Latin praenomen abbreviations, dropped before scansion. The list is
/// matched case-sensitively against the raw token, before lowercasing.
pub const PRAENOMEN_ABBREVIATIONS: [&str; 30] = [
    "Agr.", "Ap.", "A.", "K.", "D.", "F.", "C.", "Cn.", "L.", "Mam.", "M'", "M.", "N.", "Oct.",
    "Opet.", "Post.", "Pro.", "P.", "Q.", "Sert.", "Ser.", "Sex.", "S.", "St.", "Ti.", "T.", "V.",
    "Vol.", "Vop.", "Pl.",
];

/// Sentence and word tokenizer for relatively clean Latin text.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    abbreviations: HashSet<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer {
            abbreviations: PRAENOMEN_ABBREVIATIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Tokenizer {
    /// Create a tokenizer with the default praenomen abbreviation list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer that drops additional abbreviations on top of the
    /// default praenomen list.
    pub fn with_abbreviations<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokenizer = Self::default();
        tokenizer
            .abbreviations
            .extend(extra.into_iter().map(Into::into));
        tokenizer
    }

    /// Split text into sentences of lowercase word tokens.
    ///
    /// Tokens are whitespace-delimited. A token containing '.' closes the
    /// current sentence. Digits and symbolic punctuation are stripped from
    /// each token; abbreviation tokens and tokens left without any vocalic
    /// character are dropped entirely, so every emitted token satisfies the
    /// syllabifier's input contract.
    pub fn tokenize(&self, text: &str) -> Vec<Vec<String>> {
        let mut sentences = Vec::new();
        let mut current = Vec::new();

        for raw in text.split_whitespace() {
            if self.abbreviations.contains(raw) {
                continue;
            }
            let ends_sentence = raw.contains('.');
            let cleaned: String = raw
                .to_lowercase()
                .chars()
                .filter(|ch| !is_discarded(*ch))
                .collect();
            if cleaned.chars().any(alphabet::is_vocalic) {
                current.push(cleaned);
            }
            if ends_sentence && !current.is_empty() {
                sentences.push(std::mem::take(&mut current));
            }
        }

        if !current.is_empty() {
            sentences.push(current);
        }
        sentences
    }
}

fn is_discarded(ch: char) -> bool {
    ch.is_ascii_digit() || ch.is_ascii_punctuation()
}
