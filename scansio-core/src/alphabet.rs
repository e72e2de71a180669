//! Character classification tables for classical Latin
//!
//! Every stage of the pipeline consults these predicates. The tables are
//! process-wide immutable constants; there is no state and no failure mode.
//!
//! The alphabet assumes macronized input: long vowels carry a macron and are
//! distinct characters (ā ē ī ō ū). Plain vowels without a macron are treated
//! as short unless position rules apply.

/// Short (unmarked) vowels.
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Macronized long vowels.
pub const LONG_VOWELS: [char; 5] = ['ā', 'ē', 'ī', 'ō', 'ū'];

/// Recognized diphthongs as ordered character pairs.
///
/// "uī" keeps its macron: the pair is only a diphthong with the long vowel.
pub const DIPHTHONGS: [(char, char); 7] = [
    ('a', 'e'),
    ('a', 'u'),
    ('e', 'u'),
    ('e', 'i'),
    ('o', 'e'),
    ('u', 'i'),
    ('u', 'ī'),
];

/// Single consonants. Note that 'h' is deliberately absent: it never makes
/// position and never closes a syllable.
pub const SINGLE_CONSONANTS: [char; 19] = [
    'b', 'c', 'd', 'f', 'g', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x', 'z',
];

/// Double consonants: a single letter pronounced as two consonant sounds.
pub const DOUBLE_CONSONANTS: [char; 2] = ['x', 'z'];

/// Stop consonants, for the stop+liquid exemption.
pub const STOPS: [char; 5] = ['t', 'p', 'd', 'k', 'b'];

/// Liquid consonants, for the stop+liquid exemption.
pub const LIQUIDS: [char; 2] = ['r', 'l'];

/// Returns true for a short (unmarked) vowel.
pub fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}

/// Returns true for a macronized long vowel.
pub fn is_long_vowel(ch: char) -> bool {
    LONG_VOWELS.contains(&ch)
}

/// Returns true for any vowel, long or short.
pub fn is_vocalic(ch: char) -> bool {
    is_vowel(ch) || is_long_vowel(ch)
}

/// Returns true if the two adjacent characters form a recognized diphthong.
pub fn is_diphthong(first: char, second: char) -> bool {
    DIPHTHONGS.contains(&(first, second))
}

/// Returns true for a single consonant.
pub fn is_single_consonant(ch: char) -> bool {
    SINGLE_CONSONANTS.contains(&ch)
}

/// Returns true for a double consonant (x, z).
pub fn is_double_consonant(ch: char) -> bool {
    DOUBLE_CONSONANTS.contains(&ch)
}

/// Returns true for a stop consonant.
pub fn is_stop(ch: char) -> bool {
    STOPS.contains(&ch)
}

/// Returns true for a liquid consonant.
pub fn is_liquid(ch: char) -> bool {
    LIQUIDS.contains(&ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowel_classes_are_disjoint() {
        for ch in VOWELS {
            assert!(!is_long_vowel(ch));
            assert!(is_vocalic(ch));
        }
        for ch in LONG_VOWELS {
            assert!(!is_vowel(ch));
            assert!(is_vocalic(ch));
        }
    }

    #[test]
    fn diphthong_pairs_are_ordered() {
        assert!(is_diphthong('a', 'e'));
        assert!(is_diphthong('u', 'ī'));
        assert!(!is_diphthong('e', 'a'));
        assert!(!is_diphthong('u', 'o'));
    }

    #[test]
    fn h_is_not_a_consonant() {
        assert!(!is_single_consonant('h'));
        assert!(!is_vocalic('h'));
    }

    #[test]
    fn double_consonants_are_also_single() {
        for ch in DOUBLE_CONSONANTS {
            assert!(is_single_consonant(ch));
        }
    }

    #[test]
    fn stops_and_liquids_are_consonants() {
        for ch in STOPS.iter().chain(LIQUIDS.iter()) {
            assert!(is_single_consonant(*ch));
        }
    }
}
