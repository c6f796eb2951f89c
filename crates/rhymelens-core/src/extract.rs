//! Line and word extraction from raw lyric text.
//!
//! Scans lyrics line by line, skipping `[Section]` markers, and builds
//! [`RhymeWord`] records for end-of-line words and interior words. Each
//! word's syllable count and phonetic encoding are computed on creation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dictionaries::syllable_dict;
use crate::phonetics;
use crate::text;

/// Interior words shorter than this never enter rhyme analysis, which
/// keeps function words ("a", "to", "it") from producing noise groups.
const MIN_INTERNAL_LEN: usize = 3;

/// One occurrence of a word considered for rhyme analysis.
///
/// `(line, position)` identifies the occurrence throughout the pipeline
/// and never collides within one analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RhymeWord {
    /// Normalized surface text: letters only, lowercased.
    pub word: String,
    /// The token as it appeared, punctuation-trimmed, casing kept.
    pub display: String,
    /// Zero-based content-line index (section markers excluded).
    pub line: usize,
    /// Token index within the line.
    pub position: usize,
    /// Character offset of the occurrence within its source line.
    pub start: usize,
    /// Character offset one past the occurrence, for highlighting.
    pub end: usize,
    /// Whether this is the last word of its line.
    pub is_end_rhyme: bool,
    /// Estimated syllable count, at least 1.
    pub syllables: usize,
    /// Approximate phonetic encoding of the word.
    pub phonetic: String,
}

impl RhymeWord {
    /// The `(line, position)` identity of this occurrence.
    pub const fn id(&self) -> (usize, usize) {
        (self.line, self.position)
    }
}

/// Extraction output: words plus the content-line to source-line mapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedLyrics {
    /// All extracted word occurrences, in reading order.
    pub words: Vec<RhymeWord>,
    /// For each content line, the zero-based index of its source line.
    ///
    /// Section markers are excluded from content numbering; callers that
    /// need absolute line numbers in the original text map through this.
    pub line_map: Vec<usize>,
}

/// Extract rhyme-candidate words from lyric text.
///
/// Lines wholly matching `[...]` are skipped without consuming a content
/// line index. The final token of each line (>1 letters) becomes an
/// end-rhyme word; other tokens need ≥3 letters. Empty input degrades to
/// an empty result.
#[tracing::instrument(skip_all, fields(text_len = lyrics.len()))]
pub fn extract(lyrics: &str) -> ExtractedLyrics {
    let mut words = Vec::new();
    let mut line_map = Vec::new();

    for (source_idx, line) in lyrics.lines().enumerate() {
        if text::is_section_marker(line) {
            continue;
        }

        let content_idx = line_map.len();
        line_map.push(source_idx);

        let tokens = text::tokenize_line(line);
        let Some(last) = tokens.len().checked_sub(1) else {
            continue;
        };

        for (position, token) in tokens.iter().enumerate() {
            let normalized = text::normalize_word(&token.text);
            let eligible = if position == last {
                normalized.len() > 1
            } else {
                normalized.len() >= MIN_INTERNAL_LEN
            };
            if !eligible {
                continue;
            }

            words.push(RhymeWord {
                phonetic: phonetics::approximate_phonemes(&normalized),
                syllables: syllable_dict::count_syllables(&normalized),
                word: normalized,
                display: token.text.clone(),
                line: content_idx,
                position,
                start: token.start,
                end: token.end,
                is_end_rhyme: position == last,
            });
        }
    }

    ExtractedLyrics { words, line_map }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn empty_input_extracts_nothing() {
        let extracted = extract("");
        assert!(extracted.words.is_empty());
        assert!(extracted.line_map.is_empty());
    }

    #[test]
    fn end_words_flagged() {
        let extracted = extract("the cat sat on the mat\nanother line here");
        let end_words: Vec<_> = extracted
            .words
            .iter()
            .filter(|w| w.is_end_rhyme)
            .map(|w| w.word.as_str())
            .collect();
        assert_eq!(end_words, vec!["mat", "here"]);
    }

    #[test]
    fn section_markers_skipped_without_gap() {
        let extracted = extract("[Chorus]\nlove\ndove");
        assert_eq!(extracted.words.len(), 2);
        // Content lines are numbered consecutively; the map recovers the
        // original positions.
        assert_eq!(extracted.words[0].line, 0);
        assert_eq!(extracted.words[1].line, 1);
        assert_eq!(extracted.line_map, vec![1, 2]);
    }

    #[test]
    fn short_interior_words_excluded() {
        let extracted = extract("a to it\nso do sit");
        // Only the end words survive ("it" and "sit"); interior function
        // words are below the 3-letter minimum.
        let interior: Vec<_> = extracted.words.iter().filter(|w| !w.is_end_rhyme).collect();
        assert!(interior.is_empty());
        assert_eq!(extracted.words.len(), 2);
    }

    #[test]
    fn one_letter_end_word_excluded() {
        let extracted = extract("singing to a");
        assert!(extracted.words.iter().all(|w| !w.is_end_rhyme));
    }

    #[test]
    fn identity_is_unique() {
        let lyrics = "walking down the lonely street tonight\n\
                      holding onto every fading light\n\
                      [Bridge]\n\
                      nothing feels the same without you here";
        let extracted = extract(lyrics);
        let ids: HashSet<_> = extracted.words.iter().map(RhymeWord::id).collect();
        assert_eq!(ids.len(), extracted.words.len());
    }

    #[test]
    fn words_carry_phonetics_and_syllables() {
        let extracted = extract("tonight");
        let word = &extracted.words[0];
        assert!(!word.phonetic.is_empty());
        assert!(word.syllables >= 1);
        assert_eq!(word.word, "tonight");
    }

    #[test]
    fn offsets_cover_the_token() {
        let extracted = extract("oh, \"Tonight!\" she said");
        let tonight = extracted
            .words
            .iter()
            .find(|w| w.word == "tonight")
            .unwrap();
        assert_eq!(tonight.display, "Tonight");
        assert_eq!(tonight.start, 5);
        assert_eq!(tonight.end, 12);
    }

    #[test]
    fn casing_preserved_for_display_only() {
        let extracted = extract("Shining BRIGHT tonight");
        assert_eq!(extracted.words[0].word, "shining");
        assert_eq!(extracted.words[0].display, "Shining");
    }
}
