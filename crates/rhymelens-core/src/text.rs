//! Text processing utilities.
//!
//! Provides line tokenization with character offsets, word normalization,
//! and section-marker detection for use by the extractor.

use regex::Regex;
use std::sync::LazyLock;

/// Whole-line section markers such as `[Chorus]` or `[Verse 2]`.
static SECTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[.*\]$").expect("valid regex"));

/// A whitespace-delimited token with surrounding punctuation stripped.
///
/// Offsets are character positions within the source line, `end` exclusive,
/// covering the token after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineToken {
    /// The token text after punctuation trimming (original casing kept).
    pub text: String,
    /// Character offset of the first kept character.
    pub start: usize,
    /// Character offset one past the last kept character.
    pub end: usize,
}

/// Whether a line is a non-content section marker.
pub fn is_section_marker(line: &str) -> bool {
    SECTION_MARKER.is_match(line.trim())
}

/// Split a line into tokens, recording character offsets.
///
/// Surrounding punctuation is stripped; interior apostrophes and hyphens
/// stay so contractions and compounds survive as single tokens. Tokens
/// that are all punctuation disappear.
pub fn tokenize_line(line: &str) -> Vec<LineToken> {
    let mut tokens = Vec::new();
    let mut current: Vec<(usize, char)> = Vec::new();

    for (idx, ch) in line.chars().chain(std::iter::once(' ')).enumerate() {
        if ch.is_whitespace() {
            if let Some(token) = finish_token(&current) {
                tokens.push(token);
            }
            current.clear();
        } else {
            current.push((idx, ch));
        }
    }

    tokens
}

/// Normalize a token for rhyme keying: letters only, lowercased.
pub fn normalize_word(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Trim surrounding punctuation from a raw token, keeping offsets.
fn finish_token(chars: &[(usize, char)]) -> Option<LineToken> {
    let keep = |c: char| c.is_alphanumeric() || c == '\'' || c == '-';
    let first = chars.iter().position(|&(_, c)| keep(c))?;
    let last = chars.iter().rposition(|&(_, c)| keep(c))?;

    let text: String = chars[first..=last].iter().map(|&(_, c)| c).collect();
    Some(LineToken {
        text,
        start: chars[first].0,
        end: chars[last].0 + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_markers_detected() {
        assert!(is_section_marker("[Chorus]"));
        assert!(is_section_marker("  [Verse 2]  "));
        assert!(!is_section_marker("not [a] marker"));
        assert!(!is_section_marker("plain line"));
    }

    #[test]
    fn tokenizes_with_offsets() {
        let tokens = tokenize_line("the cat sat");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].text, "cat");
        assert_eq!(tokens[1].start, 4);
        assert_eq!(tokens[1].end, 7);
    }

    #[test]
    fn strips_surrounding_punctuation() {
        let tokens = tokenize_line("  \"hello,\" (world)!");
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        // Offsets point at the kept characters, not the punctuation.
        assert_eq!(tokens[0].start, 3);
        assert_eq!(tokens[0].end, 8);
    }

    #[test]
    fn keeps_interior_apostrophes() {
        let tokens = tokenize_line("don't stop-believing");
        assert_eq!(tokens[0].text, "don't");
        assert_eq!(tokens[1].text, "stop-believing");
    }

    #[test]
    fn all_punctuation_tokens_vanish() {
        assert!(tokenize_line("!!! ...").is_empty());
        // Hyphens are keep-characters, so a bare "---" survives tokenization;
        // normalization downstream reduces it to nothing.
        assert_eq!(normalize_word("---"), "");
    }

    #[test]
    fn normalization_drops_non_letters() {
        assert_eq!(normalize_word("Don't"), "dont");
        assert_eq!(normalize_word("123"), "");
        assert_eq!(normalize_word("Night!"), "night");
    }

    #[test]
    fn empty_line_yields_no_tokens() {
        assert!(tokenize_line("").is_empty());
        assert!(tokenize_line("   ").is_empty());
    }
}
