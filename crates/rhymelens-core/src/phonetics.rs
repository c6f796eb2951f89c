//! Heuristic phonetic encoding for rhyme comparison.
//!
//! Maps a word's spelling to an approximate phoneme string using
//! longest-match substitution: a table of common word-ending patterns is
//! consulted first, then the word is scanned left to right trying 4-, 3-,
//! 2-, and 1-character substrings against a substitution table.
//!
//! The output is a concatenation of uppercase ARPABET-flavoured symbols
//! (`KAET` for "cat", `LAHV` for "love"). This is a rule-table
//! approximation intended only for rhyme-key comparison — it is *not* a
//! pronunciation dictionary and makes no claim of IPA accuracy. Unknown
//! characters pass through unchanged rather than failing.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Word-ending patterns mapped directly to phoneme sequences.
///
/// Checked longest-first against the cleaned word before the general scan.
/// The stem before the matched ending is encoded by the regular scan.
static ENDING_PATTERNS: LazyLock<Vec<(&'static str, &'static str)>> = LazyLock::new(|| {
    let mut patterns = vec![
        ("ation", "EYSHAHN"),
        ("ition", "IHSHAHN"),
        ("ought", "AOT"),
        ("aught", "AOT"),
        ("tion", "SHAHN"),
        ("sion", "ZHAHN"),
        ("ight", "AYT"),
        ("ound", "AWND"),
        ("ture", "CHER"),
        ("sure", "ZHER"),
        ("ould", "UHD"),
        ("ough", "OW"),
        ("ace", "EYS"),
        ("ade", "EYD"),
        ("age", "EYJ"),
        ("ake", "EYK"),
        ("ale", "EYL"),
        ("ame", "EYM"),
        ("ane", "EYN"),
        ("ape", "EYP"),
        ("ate", "EYT"),
        ("ave", "EYV"),
        ("ice", "AYS"),
        ("ide", "AYD"),
        ("ife", "AYF"),
        ("ike", "AYK"),
        ("ile", "AYL"),
        ("ime", "AYM"),
        ("ine", "AYN"),
        ("ire", "AYER"),
        ("ise", "AYZ"),
        ("ite", "AYT"),
        ("ive", "IHV"),
        ("ize", "AYZ"),
        ("obe", "OWB"),
        ("ode", "OWD"),
        ("oke", "OWK"),
        ("ole", "OWL"),
        ("ome", "OWM"),
        ("one", "OWN"),
        ("ope", "OWP"),
        ("ose", "OWZ"),
        ("ote", "OWT"),
        ("ove", "AHV"),
        ("ube", "UWB"),
        ("ude", "UWD"),
        ("uke", "UWK"),
        ("ule", "UWL"),
        ("une", "UWN"),
        ("ute", "UWT"),
        ("ble", "BAHL"),
        ("dle", "DAHL"),
        ("fle", "FAHL"),
        ("gle", "GAHL"),
        ("kle", "KAHL"),
        ("ple", "PAHL"),
        ("tle", "TAHL"),
        ("zle", "ZAHL"),
        ("ay", "EY"),
        ("ey", "EY"),
        ("ew", "UW"),
        ("ue", "UW"),
    ];
    // Longest pattern wins when several could match.
    patterns.sort_by_key(|(p, _)| std::cmp::Reverse(p.len()));
    patterns
});

/// General substitution table for the greedy left-to-right scan.
///
/// Vowel digraphs/diphthongs and consonant digraphs before single letters;
/// the scan tries 4-character substrings down to 1.
static SUBSTITUTIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Four-character sequences
        ("augh", "AO"),
        ("eigh", "EY"),
        ("ough", "OW"),
        ("tion", "SHAHN"),
        // Three-character sequences
        ("igh", "AY"),
        ("tch", "CH"),
        ("dge", "J"),
        ("ear", "IHR"),
        ("air", "EHR"),
        ("sch", "SK"),
        // Vowel digraphs and r-coloured vowels
        ("ee", "IY"),
        ("ea", "IY"),
        ("ai", "EY"),
        ("ay", "EY"),
        ("oa", "OW"),
        ("ow", "OW"),
        ("ou", "AW"),
        ("oo", "UW"),
        ("oi", "OY"),
        ("oy", "OY"),
        ("ue", "UW"),
        ("ew", "UW"),
        ("ie", "IY"),
        ("ei", "EY"),
        ("au", "AO"),
        ("aw", "AO"),
        ("ar", "AAR"),
        ("or", "AOR"),
        ("er", "ER"),
        ("ir", "ER"),
        ("ur", "ER"),
        // Consonant digraphs
        ("ch", "CH"),
        ("sh", "SH"),
        ("th", "TH"),
        ("ph", "F"),
        ("wh", "W"),
        ("ck", "K"),
        ("ng", "NG"),
        ("qu", "KW"),
        ("kn", "N"),
        ("wr", "R"),
        // Single letters
        ("a", "AE"),
        ("e", "EH"),
        ("i", "IH"),
        ("o", "AA"),
        ("u", "AH"),
        ("b", "B"),
        ("c", "K"),
        ("d", "D"),
        ("f", "F"),
        ("g", "G"),
        ("h", "H"),
        ("j", "J"),
        ("k", "K"),
        ("l", "L"),
        ("m", "M"),
        ("n", "N"),
        ("p", "P"),
        ("q", "K"),
        ("r", "R"),
        ("s", "S"),
        ("t", "T"),
        ("v", "V"),
        ("w", "W"),
        ("x", "KS"),
        ("z", "Z"),
    ])
});

/// Vowel phoneme symbols, longest first so the scan prefers digraph symbols.
const VOWEL_SYMBOLS: &[&str] = &[
    "AE", "EH", "IH", "AA", "AH", "AO", "IY", "EY", "AY", "OW", "AW", "OY", "UW", "UH", "ER",
];

/// Consonant symbols wider than one character.
const WIDE_CONSONANTS: &[&str] = &["CH", "SH", "TH", "NG", "ZH", "KS", "KW"];

/// Approximate the phonetic encoding of a word.
///
/// Input is lowercased and stripped of non-letter characters; words of
/// length ≤ 1 are returned unchanged. The result degrades to literal
/// letters for sequences the tables do not cover.
pub fn approximate_phonemes(word: &str) -> String {
    let cleaned = clean(word);
    if cleaned.chars().count() <= 1 {
        return cleaned;
    }

    for (pattern, phoneme) in ENDING_PATTERNS.iter() {
        if let Some(stem) = cleaned.strip_suffix(pattern) {
            let mut encoded = scan(stem, false);
            encoded.push_str(phoneme);
            return encoded;
        }
    }

    scan(&cleaned, true)
}

/// Positions and lengths of vowel phoneme symbols within an encoding.
///
/// Bare vowel letters that passed through unmapped count as one-character
/// vowel symbols so degraded encodings still classify.
pub fn vowel_spans(encoding: &str) -> Vec<(usize, usize)> {
    let bytes = encoding.as_bytes();
    let mut spans = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if i + 2 <= bytes.len() && VOWEL_SYMBOLS.contains(&&encoding[i..i + 2]) {
            spans.push((i, 2));
            i += 2;
        } else if matches!(bytes[i], b'A' | b'E' | b'I' | b'O' | b'U') {
            spans.push((i, 1));
            i += 1;
        } else {
            i += 1;
        }
    }
    spans
}

/// Split a trailing consonant cluster into individual consonant symbols.
///
/// Two-character symbols (`NG`, `CH`, `KS`, ...) count as one consonant, so
/// cluster weight is measured in sounds rather than characters.
pub fn consonant_symbols(cluster: &str) -> Vec<&str> {
    let mut symbols = Vec::new();
    let mut i = 0;
    while i < cluster.len() {
        if i + 2 <= cluster.len() && WIDE_CONSONANTS.contains(&&cluster[i..i + 2]) {
            symbols.push(&cluster[i..i + 2]);
            i += 2;
        } else {
            symbols.push(&cluster[i..=i]);
            i += 1;
        }
    }
    symbols
}

/// Lowercase, keep letters only, and collapse doubled consonants.
fn clean(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut prev = '\0';
    for ch in word.chars().filter(char::is_ascii_alphabetic) {
        let ch = ch.to_ascii_lowercase();
        if ch == prev && !matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u') {
            continue;
        }
        out.push(ch);
        prev = ch;
    }
    out
}

/// Greedy longest-match substitution over the cleaned word.
fn scan(word: &str, full_word: bool) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut encoded = String::with_capacity(word.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        // Trailing silent e: drop only when a vowel sound already exists.
        if full_word && i == chars.len() - 1 && chars[i] == 'e' && !vowel_spans(&encoded).is_empty()
        {
            break;
        }

        // Initial y is a consonant; elsewhere it behaves as a vowel.
        if chars[i] == 'y' {
            encoded.push_str(if i == 0 { "Y" } else { "IY" });
            i += 1;
            continue;
        }

        let mut matched = false;
        for len in (1..=4.min(chars.len() - i)).rev() {
            let segment: String = chars[i..i + len].iter().collect();
            if let Some(phoneme) = SUBSTITUTIONS.get(segment.as_str()) {
                encoded.push_str(phoneme);
                i += len;
                matched = true;
                break;
            }
        }
        if !matched {
            encoded.push(chars[i]);
            i += 1;
        }
    }

    encoded
}
