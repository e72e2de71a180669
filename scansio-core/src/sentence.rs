//! Core data structures for the scansion pipeline
//!
//! A [`Sentence`] owns its [`Word`]s and each word owns its [`Syllable`]s;
//! nothing is shared across sentences, which is what makes per-sentence
//! parallelism safe without synchronization.
//!
//! All positional logic is `char`-based. Macronized vowels are multi-byte in
//! UTF-8, so byte indexing would split them.

use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

/// Inline storage for the common case; few Latin words exceed four syllables.
pub type SyllableVec = SmallVec<[Syllable; 4]>;

/// A single syllable: letters only, diacritics preserved, exactly one vocalic
/// nucleus plus zero or more leading/trailing consonants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Syllable(String);

impl Syllable {
    /// Create a syllable from its text.
    pub fn new(text: impl Into<String>) -> Self {
        Syllable(text.into())
    }

    /// Create a syllable from a slice of characters.
    pub(crate) fn from_chars(chars: &[char]) -> Self {
        Syllable(chars.iter().collect())
    }

    /// The syllable text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (not bytes).
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// First character, if any.
    pub fn first_char(&self) -> Option<char> {
        self.0.chars().next()
    }

    /// Last character, if any.
    pub fn last_char(&self) -> Option<char> {
        self.0.chars().next_back()
    }

    /// The first two characters, if the syllable has at least two.
    pub fn first_pair(&self) -> Option<(char, char)> {
        let mut chars = self.0.chars();
        Some((chars.next()?, chars.next()?))
    }

    /// The last two characters, if the syllable has at least two.
    pub fn last_pair(&self) -> Option<(char, char)> {
        let mut chars = self.0.chars();
        let last = chars.next_back()?;
        let second_last = chars.next_back()?;
        Some((second_last, last))
    }

    /// Whether the syllable text contains the given substring.
    pub fn contains(&self, pat: &str) -> bool {
        self.0.contains(pat)
    }

    /// Append text to the end of the syllable (digraph merge, trailing
    /// consonant absorption).
    pub(crate) fn push_str(&mut self, text: &str) {
        self.0.push_str(text);
    }

    /// Prepend another syllable's text (cross-word elision merge).
    pub(crate) fn prepend(&mut self, other: &Syllable) {
        self.0.insert_str(0, &other.0);
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Syllable {
    fn from(text: &str) -> Self {
        Syllable::new(text)
    }
}

/// One lexical token, split into syllables in textual order.
///
/// Words mutate in place during digraph normalization (adjacent syllables
/// merged) and elision (last syllable removed, prepended to the neighbor).
/// A word emptied by elision stays in its sentence but contributes nothing
/// downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Word {
    pub(crate) syllables: SyllableVec,
}

impl Word {
    /// Create a word from already-split syllables.
    pub fn from_syllables(syllables: impl IntoIterator<Item = Syllable>) -> Self {
        Word {
            syllables: syllables.into_iter().collect(),
        }
    }

    /// The syllables of this word, in order.
    pub fn syllables(&self) -> &[Syllable] {
        &self.syllables
    }

    /// Number of syllables.
    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    /// True once every syllable has been elided away.
    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    /// First syllable, if any.
    pub fn first(&self) -> Option<&Syllable> {
        self.syllables.first()
    }

    /// Last syllable, if any.
    pub fn last(&self) -> Option<&Syllable> {
        self.syllables.last()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for syllable in &self.syllables {
            f.write_str(syllable.as_str())?;
        }
        Ok(())
    }
}

/// An ordered sequence of words; insertion order is textual order.
///
/// Order is semantically significant: both elision and the position rules of
/// scansion depend on adjacency, and neighbors are always resolved by index,
/// never by value (repeated words and syllables are common in real text).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Sentence {
    pub(crate) words: Vec<Word>,
}

impl Sentence {
    /// Create a sentence from words in textual order.
    pub fn from_words(words: Vec<Word>) -> Self {
        Sentence { words }
    }

    /// The words of this sentence, in order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// True if the sentence has no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Flatten the word-grouped structure into one ordered syllable list,
    /// discarding word boundaries permanently. Words emptied by elision
    /// contribute nothing.
    pub fn condense(self) -> Vec<Syllable> {
        self.words
            .into_iter()
            .flat_map(|word| word.syllables)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(syllables: &[&str]) -> Word {
        Word::from_syllables(syllables.iter().map(|s| Syllable::new(*s)))
    }

    #[test]
    fn syllable_char_accessors_handle_macrons() {
        let syl = Syllable::new("strā");
        assert_eq!(syl.char_count(), 4);
        assert_eq!(syl.first_char(), Some('s'));
        assert_eq!(syl.last_char(), Some('ā'));
        assert_eq!(syl.first_pair(), Some(('s', 't')));
        assert_eq!(syl.last_pair(), Some(('r', 'ā')));
    }

    #[test]
    fn syllable_pairs_need_two_chars() {
        let syl = Syllable::new("ō");
        assert_eq!(syl.char_count(), 1);
        assert_eq!(syl.first_pair(), None);
        assert_eq!(syl.last_pair(), None);
    }

    #[test]
    fn prepend_inserts_before_existing_text() {
        let mut target = Syllable::new("u");
        target.prepend(&Syllable::new("quō"));
        assert_eq!(target.as_str(), "quōu");
    }

    #[test]
    fn word_display_reconstructs_token() {
        let w = word(&["ta", "ndem"]);
        assert_eq!(w.to_string(), "tandem");
    }

    #[test]
    fn condense_flattens_and_skips_empty_words() {
        let sentence = Sentence::from_words(vec![
            word(&[]),
            word(&["quōu", "sque"]),
            word(&["ta"]),
        ]);
        let flat = sentence.condense();
        let texts: Vec<&str> = flat.iter().map(|s| s.as_str()).collect();
        assert_eq!(texts, ["quōu", "sque", "ta"]);
    }

    #[test]
    fn empty_sentence_condenses_to_nothing() {
        assert!(Sentence::default().condense().is_empty());
    }
}
