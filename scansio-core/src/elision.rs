//! Cross-word elision
//!
//! When a word ends in a vowel-like sound and the next word begins with one,
//! classical prosody slurs the two together: the final syllable of the first
//! word is pronounced as part of the first syllable of the second. The merge
//! happens here, before word boundaries are discarded.

use crate::alphabet;
use crate::sentence::{Sentence, Word};

/// True if the word's ending can elide into a following word: its last
/// syllable ends in 'm', or in a vowel (plain or long), or its final two
/// characters form a diphthong.
fn elidable_end(word: &Word) -> bool {
    let Some(last) = word.last() else {
        return false;
    };
    if last.last_char() == Some('m') {
        return true;
    }
    if last.last_char().is_some_and(alphabet::is_vocalic) {
        return true;
    }
    last.last_pair()
        .is_some_and(|(a, b)| alphabet::is_diphthong(a, b))
}

/// True if the word's beginning can absorb a preceding elision: its first
/// syllable starts with 'h', or with a vowel (plain or long), or the first
/// and last characters of that syllable form a diphthong.
fn elidable_begin(word: &Word) -> bool {
    let Some(first) = word.first() else {
        return false;
    };
    if first.first_char() == Some('h') {
        return true;
    }
    let Some(initial) = first.first_char() else {
        return false;
    };
    if alphabet::is_vocalic(initial) {
        return true;
    }
    first
        .last_char()
        .is_some_and(|fin| alphabet::is_diphthong(initial, fin))
}

/// Apply elision across adjacent word boundaries, in place.
///
/// Each word is compared against its immediate right neighbor exactly once,
/// in original textual order; neighbors are resolved by index, never by
/// value, so repeated words cannot misdirect a merge. When both sides are
/// elidable the current word's last syllable is prepended onto the next
/// word's first syllable and removed from the current word. A word emptied
/// this way stays in the sentence as an empty word. The sentence boundary is
/// a hard stop; the last word has no neighbor and is skipped.
///
/// # Examples
///
/// ```
/// use scansio_core::{elide, Sentence, Syllable, Word};
///
/// let mut sentence = Sentence::from_words(vec![
///     Word::from_syllables([Syllable::new("quo")]),
///     Word::from_syllables([Syllable::new("us"), Syllable::new("que")]),
/// ]);
/// elide(&mut sentence);
///
/// assert!(sentence.words()[0].is_empty());
/// assert_eq!(sentence.words()[1].syllables()[0].as_str(), "quous");
/// ```
pub fn elide(sentence: &mut Sentence) {
    if sentence.words.is_empty() {
        return;
    }
    for i in 0..sentence.words.len() - 1 {
        let (left, right) = sentence.words.split_at_mut(i + 1);
        let word = &mut left[i];
        let next = &mut right[0];
        if elidable_end(word) && elidable_begin(next) {
            if let (Some(last), Some(first)) = (word.syllables.pop(), next.syllables.first_mut()) {
                first.prepend(&last);
            }
        }
    }
}
