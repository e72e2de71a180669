//! Syllable weight classification
//!
//! A syllable is long by nature (its own vowel content) or long by position
//! (the consonant pattern opening the next syllable); otherwise it is short.
//! Position rules look ahead one syllable by index within the sentence, so
//! the sentence-final syllable can only be long by nature.

use crate::alphabet;
use crate::sentence::Syllable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Metrical weight of one syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weight {
    /// Long syllable, by nature or by position.
    Long,
    /// Short syllable.
    Short,
}

/// Output glyphs for rendering a weight sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightGlyphs {
    /// Glyph for a long syllable.
    pub long: char,
    /// Glyph for a short syllable.
    pub short: char,
}

impl Default for WeightGlyphs {
    fn default() -> Self {
        // The traditional macron/breve shorthand of printed scansions.
        WeightGlyphs {
            long: '-',
            short: 'u',
        }
    }
}

impl Weight {
    /// Render this weight with the given glyphs.
    pub fn glyph(self, glyphs: WeightGlyphs) -> char {
        match self {
            Weight::Long => glyphs.long,
            Weight::Short => glyphs.short,
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph(WeightGlyphs::default()))
    }
}

/// True if the syllable is long by nature: it contains a long vowel, or its
/// vocalic group (the non-consonant characters) is a recognized diphthong.
pub fn long_by_nature(syllable: &Syllable) -> bool {
    let mut group = String::new();
    for ch in syllable.as_str().chars() {
        if alphabet::is_long_vowel(ch) {
            return true;
        }
        if !alphabet::is_single_consonant(ch) {
            group.push(ch);
        }
    }

    let mut chars = group.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(a), Some(b), None) if alphabet::is_diphthong(a, b)
    )
}

/// True if the syllable is long by position, judged against the next
/// syllable of the same sentence:
///
/// 1. the next syllable opens with two single consonants, unless the pair is
///    a stop followed by a liquid;
/// 2. this syllable ends in a plain vowel and the next opens with a double
///    consonant (x, z);
/// 3. this syllable ends in a single consonant and the next opens with one.
///
/// Rules are tried in that order; the first match decides. With no next
/// syllable, no position rule applies.
pub fn long_by_position(syllable: &Syllable, next: Option<&Syllable>) -> bool {
    let Some(next) = next else {
        return false;
    };
    let Some(next_initial) = next.first_char() else {
        return false;
    };

    if let Some((a, b)) = next.first_pair() {
        if alphabet::is_single_consonant(a)
            && alphabet::is_single_consonant(b)
            && !(alphabet::is_stop(a) && alphabet::is_liquid(b))
        {
            return true;
        }
    }

    let Some(last) = syllable.last_char() else {
        return false;
    };
    if alphabet::is_vowel(last) && alphabet::is_double_consonant(next_initial) {
        return true;
    }
    alphabet::is_single_consonant(last) && alphabet::is_single_consonant(next_initial)
}

/// Classify every syllable of a condensed sentence, in order.
///
/// Lookahead is by sequence position, so repeated syllable text within a
/// sentence is classified against its own neighbor, not the first match.
pub fn scan(syllables: &[Syllable]) -> Vec<Weight> {
    syllables
        .iter()
        .enumerate()
        .map(|(i, syllable)| {
            if long_by_nature(syllable) || long_by_position(syllable, syllables.get(i + 1)) {
                Weight::Long
            } else {
                Weight::Short
            }
        })
        .collect()
}

/// Render a weight sequence as a glyph string.
pub fn render(weights: &[Weight], glyphs: WeightGlyphs) -> String {
    weights.iter().map(|w| w.glyph(glyphs)).collect()
}
