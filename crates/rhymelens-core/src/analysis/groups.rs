//! Rhyme group construction.
//!
//! Buckets extracted words by their classifier key, discards buckets that
//! fall below the strength/size thresholds, and emits initial groups in a
//! stable order for the merger.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::classify::{self, RhymeType};
use crate::extract::RhymeWord;
use crate::palette::Palette;

/// A cluster of word occurrences judged to rhyme with each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RhymeGroup {
    /// Opaque stable identifier, unique within one analysis pass.
    pub id: String,
    /// Tier of the rhyme taxonomy binding the members. A bucket can mix
    /// tiers (a heavy coda's family key equals a light coda's perfect key),
    /// in which case the weakest member tier labels the group.
    pub rhyme_type: RhymeType,
    /// Strength in (0, 1]; the strongest classification within the
    /// group's tier.
    pub strength: f64,
    /// Presentation-only color hint.
    pub color: String,
    /// Member occurrences; always at least 2.
    pub words: Vec<RhymeWord>,
}

impl RhymeGroup {
    /// Whether an occurrence identity belongs to this group.
    pub fn contains(&self, id: (usize, usize)) -> bool {
        self.words.iter().any(|w| w.id() == id)
    }
}

/// Build candidate rhyme groups from extracted words.
///
/// End-rhyme words use a lower strength floor than interior words, since
/// end rhyme is structurally significant and should surface weaker
/// matches. Buckets with fewer than 2 surviving words are dropped. Output
/// is sorted by type rank, then descending strength.
#[tracing::instrument(skip_all, fields(words = words.len()))]
pub fn build_groups(words: &[RhymeWord], palette: &mut Palette) -> Vec<RhymeGroup> {
    // BTreeMap keeps bucket iteration (and so ids and colors) deterministic.
    let mut buckets: BTreeMap<String, (RhymeType, f64, Vec<RhymeWord>)> = BTreeMap::new();

    for word in words {
        let classification = classify::classify_word(&word.word);
        let floor = if word.is_end_rhyme {
            classify::END_RHYME_FLOOR
        } else {
            classify::INTERNAL_FLOOR
        };
        if classification.strength < floor {
            continue;
        }

        let entry = buckets
            .entry(classification.key)
            .or_insert((classification.rhyme_type, 0.0, Vec::new()));
        // The group is only as strong as its loosest member.
        if classification.rhyme_type.rank() > entry.0.rank() {
            entry.0 = classification.rhyme_type;
            entry.1 = classification.strength;
        } else if classification.rhyme_type == entry.0 {
            entry.1 = entry.1.max(classification.strength);
        }
        entry.2.push(word.clone());
    }

    let mut groups: Vec<RhymeGroup> = buckets
        .into_values()
        .filter(|(_, _, members)| members.len() >= 2)
        .enumerate()
        .map(|(idx, (rhyme_type, strength, members))| RhymeGroup {
            id: format!("group-{idx}"),
            rhyme_type,
            strength,
            color: palette.next(rhyme_type).to_string(),
            words: members,
        })
        .collect();

    groups.sort_by(|a, b| {
        a.rhyme_type
            .rank()
            .cmp(&b.rhyme_type.rank())
            .then(b.strength.total_cmp(&a.strength))
    });
    groups
}
