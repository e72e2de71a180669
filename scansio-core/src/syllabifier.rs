//! Word syllabification
//!
//! A syllable is anchored on a vocalic group (a vowel or a diphthong), so
//! every syllable except possibly the last ends on its nucleus. Consonants
//! after the final nucleus are absorbed into the last syllable.

use crate::alphabet;
use crate::error::{CoreError, Result};
use crate::sentence::{Syllable, SyllableVec, Word};

/// Split a word token into syllables.
///
/// The scan runs left to right with a syllable-start cursor: a recognized
/// diphthong closes the syllable after both of its characters, otherwise any
/// vowel closes the syllable after itself. Whatever trails the final nucleus
/// is a consonant cluster and is appended to the last syllable.
///
/// A token without any nucleus is rejected with [`CoreError::NoNucleus`];
/// the tokenizer contract should make that unreachable, but the check keeps
/// malformed input from ever walking off the end of the buffer.
///
/// # Examples
///
/// ```
/// use scansio_core::syllabify;
///
/// let word = syllabify("tandem").unwrap();
/// let texts: Vec<&str> = word.syllables().iter().map(|s| s.as_str()).collect();
/// assert_eq!(texts, ["ta", "ndem"]);
/// ```
pub fn syllabify(token: &str) -> Result<Word> {
    let chars: Vec<char> = token.chars().collect();
    let mut syllables = SyllableVec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        if i + 1 < chars.len() && alphabet::is_diphthong(chars[i], chars[i + 1]) {
            // Syllable ends with a diphthong
            syllables.push(Syllable::from_chars(&chars[start..=i + 1]));
            i += 2;
            start = i;
        } else if alphabet::is_vocalic(chars[i]) {
            // Syllable ends with a vowel
            syllables.push(Syllable::from_chars(&chars[start..=i]));
            i += 1;
            start = i;
        } else {
            i += 1;
        }
    }

    if syllables.is_empty() {
        return Err(CoreError::NoNucleus {
            token: token.to_string(),
        });
    }

    // Consonants after the last nucleus never closed a syllable of their own.
    if start < chars.len() {
        let trailing: String = chars[start..].iter().collect();
        if let Some(last) = syllables.last_mut() {
            last.push_str(&trailing);
        }
    }

    Ok(Word { syllables })
}
