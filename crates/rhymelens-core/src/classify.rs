//! Rhyme classification.
//!
//! Derives rhyme-relevant keys from a word's phonetic encoding and assigns
//! a five-tier type with a strength score in (0, 1]. Tiers are selected by
//! coda weight measured in phoneme symbols: a single consonant after the
//! last vowel demands an exact tail match (perfect), a heavier cluster
//! matches on vowel plus final consonant (family), a word with no vowel
//! sound at all can only slant-match on its raw consonants, and an open
//! syllable matches on vowel sounds alone (assonance), falling back to
//! trailing consonants (consonance) when no vowel key can be formed.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dictionaries::syllable_dict;
use crate::phonetics;

/// Strength floor below which end-of-line words are not grouped.
pub const END_RHYME_FLOOR: f64 = 0.2;

/// Strength floor for interior words. Stricter than the end-rhyme floor to
/// avoid a combinatorial explosion of incidental matches.
pub const INTERNAL_FLOOR: f64 = 0.5;

/// Five-tier rhyme taxonomy, ordered strongest to weakest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum RhymeType {
    /// Exact phonetic match from the last vowel onward (cat / hat).
    Perfect,
    /// Vowel and final consonant match (land / sad).
    Family,
    /// Trailing consonant cluster matches, vowel quality ignored.
    Slant,
    /// Vowel sounds match (stay / fade).
    Assonance,
    /// Trailing consonant sounds match only.
    Consonance,
}

impl RhymeType {
    /// Returns the type as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::Family => "family",
            Self::Slant => "slant",
            Self::Assonance => "assonance",
            Self::Consonance => "consonance",
        }
    }

    /// Rank from strongest (0) to weakest (4), used for group ordering.
    pub const fn rank(&self) -> u8 {
        *self as u8
    }
}

impl std::fmt::Display for RhymeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying a single word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RhymeClassification {
    /// The literal key used to bucket words into rhyme groups.
    pub key: String,
    /// Which tier of the taxonomy was selected.
    pub rhyme_type: RhymeType,
    /// Strength in (0, 1]. Each tier scores within its own band; the
    /// vowel-less degenerate case sits below every band at 0.1.
    pub strength: f64,
}

/// Classify a word's rhyme potential from its phonetic encoding.
///
/// A word with no identifiable vowel phoneme can only slant-match on its
/// consonant sounds, so it is keyed on the raw encoding at a fixed 0.1
/// strength rather than being rejected.
pub fn classify_word(word: &str) -> RhymeClassification {
    let encoding = phonetics::approximate_phonemes(word);
    let spans = phonetics::vowel_spans(&encoding);

    let Some(&(v_idx, v_len)) = spans.last() else {
        return RhymeClassification {
            key: encoding,
            rhyme_type: RhymeType::Slant,
            strength: 0.1,
        };
    };

    let vowel = &encoding[v_idx..v_idx + v_len];
    let cluster = &encoding[v_idx + v_len..];
    let consonants = phonetics::consonant_symbols(cluster);
    let syllables = syllable_dict::count_syllables(word);

    // A single consonant after the vowel: the whole tail must match.
    if consonants.len() == 1 {
        let tail = &encoding[v_idx..];
        let strength = scaled(0.90, 0.02, tail.len().saturating_sub(3), 0.96);
        return with_syllable_bonus(tail.to_string(), RhymeType::Perfect, strength, syllables);
    }

    // Heavier codas match on vowel plus final consonant; interior coda
    // consonants carry little rhyme identity (land / sad).
    if let Some(last) = consonants.last() {
        let key = format!("{vowel}{last}");
        let strength = scaled(0.70, 0.04, consonants.len() - 2, 0.82);
        return with_syllable_bonus(key, RhymeType::Family, strength, syllables);
    }

    // Open syllable: the last one or two vowel sounds.
    let assonance_key: String = spans
        .iter()
        .rev()
        .take(2)
        .rev()
        .map(|&(idx, len)| &encoding[idx..idx + len])
        .collect();
    if !assonance_key.is_empty() {
        let strength = scaled(0.30, 0.05, assonance_key.len().saturating_sub(1), 0.40);
        return RhymeClassification {
            key: assonance_key,
            rhyme_type: RhymeType::Assonance,
            strength,
        };
    }

    // Last rung: trailing consonant sounds only.
    RhymeClassification {
        key: cluster.to_string(),
        rhyme_type: RhymeType::Consonance,
        strength: scaled(0.20, 0.02, cluster.len().saturating_sub(1), 0.30),
    }
}

/// Base strength plus a per-length increment, clamped to the band ceiling.
fn scaled(base: f64, step: f64, extra: usize, ceiling: f64) -> f64 {
    (step.mul_add(extra as f64, base)).min(ceiling)
}

/// Multi-syllable words with a perfect or family tail get a small bonus.
fn with_syllable_bonus(
    key: String,
    rhyme_type: RhymeType,
    strength: f64,
    syllables: usize,
) -> RhymeClassification {
    let bonus = 0.02 * syllables.saturating_sub(1) as f64;
    RhymeClassification {
        key,
        rhyme_type,
        strength: (strength + bonus).min(1.0),
    }
}
