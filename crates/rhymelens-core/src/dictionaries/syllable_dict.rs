//! Syllable dictionary for word-level syllable counting.
//!
//! Provides a curated table of high-frequency words (function words plus
//! vocabulary typical of lyric writing) with known syllable counts, and a
//! vowel-transition estimation fallback for everything else.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Common words with known syllable counts.
pub static SYLLABLE_DICT: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Single syllable words
    map.extend([
        ("the", 1),
        ("be", 1),
        ("to", 1),
        ("of", 1),
        ("and", 1),
        ("a", 1),
        ("in", 1),
        ("that", 1),
        ("have", 1),
        ("it", 1),
        ("for", 1),
        ("not", 1),
        ("on", 1),
        ("with", 1),
        ("you", 1),
        ("do", 1),
        ("at", 1),
        ("this", 1),
        ("but", 1),
        ("my", 1),
        ("your", 1),
        ("all", 1),
        ("we", 1),
        ("me", 1),
        ("so", 1),
        ("up", 1),
        ("out", 1),
        ("down", 1),
        ("know", 1),
        ("take", 1),
        ("see", 1),
        ("way", 1),
        ("day", 1),
        ("night", 1),
        ("time", 1),
        ("life", 1),
        ("love", 1),
        ("heart", 1),
        ("world", 1),
        ("girl", 1),
        ("boy", 1),
        ("home", 1),
        ("road", 1),
        ("rain", 1),
        ("pain", 1),
        ("dream", 1),
        ("eyes", 1),
        ("mind", 1),
        ("soul", 1),
        ("fire", 1),
        ("light", 1),
        ("dark", 1),
        ("gone", 1),
        ("here", 1),
        ("there", 1),
        ("through", 1),
        ("blues", 1),
        ("streets", 1),
        ("truth", 1),
        ("young", 1),
        ("wild", 1),
        ("loved", 1),
        ("dreamed", 1),
    ]);

    // Two syllable words
    map.extend([
        ("baby", 2),
        ("money", 2),
        ("party", 2),
        ("lonely", 2),
        ("crazy", 2),
        ("lady", 2),
        ("heaven", 2),
        ("angel", 2),
        ("devil", 2),
        ("trouble", 2),
        ("hustle", 2),
        ("rhythm", 2),
        ("music", 2),
        ("city", 2),
        ("story", 2),
        ("glory", 2),
        ("feeling", 2),
        ("falling", 2),
        ("calling", 2),
        ("rolling", 2),
        ("shining", 2),
        ("burning", 2),
        ("running", 2),
        ("morning", 2),
        ("midnight", 2),
        ("sunshine", 2),
        ("heartbreak", 2),
        ("goodbye", 2),
        ("hello", 2),
        ("never", 2),
        ("always", 2),
        ("maybe", 2),
        ("only", 2),
        ("into", 2),
        ("other", 2),
        ("over", 2),
        ("under", 2),
        ("again", 2),
        ("away", 2),
        ("alone", 2),
        ("alive", 2),
        ("higher", 2),
        ("desire", 2),
        ("diamond", 2),
        ("flying", 2),
        ("dying", 2),
        ("trying", 2),
        ("lying", 2),
        ("crying", 2),
        ("going", 2),
        ("doing", 2),
        ("being", 2),
        ("real", 2),
        ("every", 2),
        ("evening", 2),
        ("ocean", 2),
        ("motion", 2),
        ("quiet", 2),
        ("woman", 2),
        ("little", 2),
        ("shorty", 2),
    ]);

    // Three syllable words
    map.extend([
        ("forever", 3),
        ("remember", 3),
        ("together", 3),
        ("tomorrow", 3),
        ("yesterday", 3),
        ("beautiful", 3),
        ("melody", 3),
        ("harmony", 3),
        ("memory", 3),
        ("energy", 3),
        ("enemy", 3),
        ("family", 3),
        ("fantasy", 3),
        ("destiny", 3),
        ("everything", 3),
        ("anything", 3),
        ("emotion", 3),
        ("devotion", 3),
        ("paradise", 3),
        ("holiday", 3),
        ("dangerous", 3),
        ("wonderful", 3),
        ("anymore", 3),
        ("radio", 3),
        ("video", 3),
        ("violet", 3),
        ("another", 3),
        ("important", 3),
        ("different", 3),
        ("probably", 3),
        ("honestly", 3),
        ("suddenly", 3),
    ]);

    // Four and five syllable words
    map.extend([
        ("everybody", 4),
        ("anybody", 4),
        ("america", 4),
        ("california", 4),
        ("generation", 4),
        ("celebration", 4),
        ("revolution", 4),
        ("television", 4),
        ("reality", 4),
        ("eternity", 4),
        ("infinity", 4),
        ("emergency", 4),
        ("unbelievable", 5),
        ("opportunity", 5),
        ("imagination", 5),
    ]);

    map
});

/// Look up the syllable count of a word in the curated table.
pub fn lookup_syllables(word: &str) -> Option<usize> {
    SYLLABLE_DICT.get(word.to_lowercase().as_str()).copied()
}

/// Estimate syllables by counting non-vowel to vowel transitions.
///
/// The vowel set includes `y`. Corrections: a trailing silent `e` after a
/// consonant removes a count, a trailing `-le` after a consonant adds one,
/// and a trailing `-ed` counts only after `d` or `t`. Fallback for words
/// missing from the dictionary; clamped to a minimum of 1.
pub fn estimate_syllables(word: &str) -> usize {
    let word: String = word
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if word.is_empty() {
        return 1;
    }

    let is_vowel = |b: u8| matches!(b, b'a' | b'e' | b'i' | b'o' | b'u' | b'y');
    let bytes = word.as_bytes();
    let mut syllables: usize = 0;
    let mut previous_was_vowel = false;

    for &b in bytes {
        let vowel = is_vowel(b);
        if vowel && !previous_was_vowel {
            syllables += 1;
        }
        previous_was_vowel = vowel;
    }

    // Trailing silent e after a consonant
    if word.ends_with('e') && bytes.len() >= 2 && !is_vowel(bytes[bytes.len() - 2]) && syllables > 1
    {
        syllables -= 1;
    }

    // -le after a consonant forms its own syllable (table, hustle)
    if word.ends_with("le") && bytes.len() >= 3 && !is_vowel(bytes[bytes.len() - 3]) {
        syllables += 1;
    }

    // -ed is silent unless it follows d or t (jumped vs landed)
    if word.ends_with("ed")
        && bytes.len() >= 3
        && !matches!(bytes[bytes.len() - 3], b'd' | b't')
        && syllables > 1
    {
        syllables -= 1;
    }

    syllables.max(1)
}

/// Count syllables: dictionary lookup with estimation fallback.
pub fn count_syllables(word: &str) -> usize {
    if let Some(count) = lookup_syllables(word) {
        return count;
    }
    estimate_syllables(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_lookup() {
        assert_eq!(lookup_syllables("forever"), Some(3));
        assert_eq!(lookup_syllables("baby"), Some(2));
        assert_eq!(lookup_syllables("fire"), Some(1));
        assert_eq!(lookup_syllables("the"), Some(1));
        assert_eq!(lookup_syllables("Maybe"), Some(2));
    }

    #[test]
    fn estimation_basics() {
        assert_eq!(estimate_syllables("cat"), 1);
        assert_eq!(estimate_syllables("window"), 2);
        assert_eq!(estimate_syllables("banana"), 3);
    }

    #[test]
    fn silent_e_dropped() {
        assert_eq!(estimate_syllables("make"), 1);
        assert_eq!(estimate_syllables("stone"), 1);
    }

    #[test]
    fn le_ending_adds_syllable() {
        assert_eq!(estimate_syllables("table"), 2);
        assert_eq!(estimate_syllables("handle"), 2);
    }

    #[test]
    fn ed_ending_rules() {
        assert_eq!(estimate_syllables("jumped"), 1);
        assert_eq!(estimate_syllables("landed"), 2);
        assert_eq!(estimate_syllables("started"), 2);
    }

    #[test]
    fn minimum_is_one() {
        assert_eq!(estimate_syllables(""), 1);
        assert_eq!(estimate_syllables("sky"), 1);
        assert_eq!(count_syllables("x"), 1);
    }

    #[test]
    fn count_uses_dict_then_fallback() {
        assert_eq!(count_syllables("melody"), 3);
        // Not in the dictionary, estimated
        assert_eq!(count_syllables("glimmer"), 2);
    }
}
