//! The composed rhyme analysis pipeline.
//!
//! Extraction, group building, and merging run as one pure pass over the
//! lyric text; [`connections::generate_connections`] is invoked separately
//! (and repeatedly) as interactive view filters change. Everything is
//! recomputed from scratch per call — there is no incremental state.

pub mod connections;
pub mod groups;
pub mod merge;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use connections::{ConnectionOptions, RhymeConnection, generate_connections};
pub use groups::RhymeGroup;

use crate::extract;
use crate::palette::Palette;

/// Options for a full analysis pass.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AnalyzeOptions {
    /// Whether interior words participate, or end-of-line words only.
    pub include_internal: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            include_internal: true,
        }
    }
}

/// Result of a full analysis pass.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// Final, stable rhyme groups (merged, each with ≥2 members).
    pub groups: Vec<RhymeGroup>,
    /// Number of word occurrences that entered analysis.
    pub word_count: usize,
    /// Number of content lines processed (section markers excluded).
    pub content_lines: usize,
    /// Content-line index to source-line index mapping.
    pub line_map: Vec<usize>,
}

/// Run the full rhyme analysis pipeline over lyric text.
///
/// Degenerate input never errors: empty text, punctuation-only lines, and
/// unknown words all degrade to empty or low-strength results.
#[tracing::instrument(skip(lyrics), fields(text_len = lyrics.len()))]
pub fn analyze(lyrics: &str, options: &AnalyzeOptions) -> AnalysisReport {
    let extracted = extract::extract(lyrics);

    let words: Vec<_> = if options.include_internal {
        extracted.words
    } else {
        extracted
            .words
            .into_iter()
            .filter(|w| w.is_end_rhyme)
            .collect()
    };

    let mut palette = Palette::new();
    let initial = groups::build_groups(&words, &mut palette);
    let merged = merge::merge_groups(initial);

    tracing::debug!(
        words = words.len(),
        groups = merged.len(),
        "analysis complete"
    );

    AnalysisReport {
        groups: merged,
        word_count: words.len(),
        content_lines: extracted.line_map.len(),
        line_map: extracted.line_map,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::RhymeType;
    use std::collections::HashSet;

    #[test]
    fn empty_text_yields_empty_report() {
        let report = analyze("", &AnalyzeOptions::default());
        assert!(report.groups.is_empty());
        assert_eq!(report.word_count, 0);
        assert_eq!(report.content_lines, 0);
    }

    #[test]
    fn simple_couplet() {
        let report = analyze("cat\nhat", &AnalyzeOptions::default());
        assert_eq!(report.groups.len(), 1);
        assert_eq!(report.groups[0].rhyme_type, RhymeType::Perfect);
        assert_eq!(report.groups[0].words.len(), 2);
    }

    #[test]
    fn heavy_codas_surface_as_family() {
        let report = analyze("hand in the sand\nfeeling so sad", &AnalyzeOptions::default());
        assert_eq!(report.groups.len(), 1);
        assert_eq!(report.groups[0].rhyme_type, RhymeType::Family);
        assert_eq!(report.groups[0].words.len(), 3);
    }

    #[test]
    fn no_rhyme_no_groups() {
        let report = analyze("apple\norange", &AnalyzeOptions::default());
        assert!(report.groups.is_empty());
    }

    #[test]
    fn section_markers_excluded() {
        let report = analyze("[Chorus]\nlove\ndove", &AnalyzeOptions::default());
        assert_eq!(report.word_count, 2);
        assert_eq!(report.content_lines, 2);
        assert_eq!(report.groups.len(), 1);
    }

    #[test]
    fn repeated_analysis_is_identical() {
        let lyrics = "walking through the pouring rain\n\
                      trying hard to ease the pain\n\
                      [Verse 2]\n\
                      every memory remains";
        let a = analyze(lyrics, &AnalyzeOptions::default());
        let b = analyze(lyrics, &AnalyzeOptions::default());
        assert_eq!(a.groups, b.groups);
    }

    #[test]
    fn merged_groups_have_two_or_more_members() {
        let lyrics = "shine a light tonight\nhold me tight alright\nnothing else in sight";
        let report = analyze(lyrics, &AnalyzeOptions::default());
        assert!(!report.groups.is_empty());
        for group in &report.groups {
            assert!(group.words.len() >= 2);
        }
    }

    #[test]
    fn identities_unique_across_groups() {
        let lyrics = "fire higher desire\nwire liar entire";
        let report = analyze(lyrics, &AnalyzeOptions::default());
        let mut seen = HashSet::new();
        for group in &report.groups {
            for word in &group.words {
                // The same occurrence may appear in only one merged group.
                assert!(seen.insert(word.id()), "duplicate occurrence {:?}", word.id());
            }
        }
    }

    #[test]
    fn end_rhyme_only_mode() {
        let lyrics = "tonight the light is bright\nalright we fight tonight";
        let all = analyze(lyrics, &AnalyzeOptions::default());
        let ends = analyze(
            lyrics,
            &AnalyzeOptions {
                include_internal: false,
            },
        );
        assert!(ends.word_count < all.word_count);
        for group in &ends.groups {
            assert!(group.words.iter().all(|w| w.is_end_rhyme));
        }
    }

    #[test]
    fn report_serializes_to_json() {
        let report = analyze("cat\nhat", &AnalyzeOptions::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["groups"][0]["rhyme_type"], "perfect");
        assert_eq!(json["word_count"], 2);
        assert_eq!(json["line_map"], serde_json::json!([0, 1]));
    }

    #[test]
    fn adversarial_input_degrades_gracefully() {
        let report = analyze("!!! ... ???\n12345 67890\n\n\n", &AnalyzeOptions::default());
        assert!(report.groups.is_empty());
    }
}
