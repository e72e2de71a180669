//! "qu" digraph normalization
//!
//! The syllabifier closes a syllable on every vowel, so the 'u' of "qu"
//! produces a false split: "quoque" comes out as qu-o-qu-e. Phonologically
//! "qu" is a single consonant unit attached to the following vowel, so any
//! syllable containing "qu" is merged with its immediate successor.

use crate::sentence::Word;

/// Merge every syllable containing "qu" with the syllable that follows it,
/// in place.
///
/// The merge applies at most once per qualifying syllable and never recurses
/// into the merged result; the word-final syllable has no successor and is
/// left alone. Successors are found by index, so repeated syllable text
/// within a word cannot misdirect the merge.
pub fn fix_qu(word: &mut Word) {
    let mut i = 0;
    while i + 1 < word.syllables.len() {
        if word.syllables[i].contains("qu") {
            let next = word.syllables.remove(i + 1);
            word.syllables[i].push_str(next.as_str());
        }
        i += 1;
    }
}
