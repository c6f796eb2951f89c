//! Merging of overlapping, phonetically compatible rhyme groups.
//!
//! A single greedy pass over groups in their sorted order. The result can
//! depend on input ordering when three or more groups overlap pairwise
//! but are not all mutually compatible; under the fixed sort produced by
//! the builder the output is stable, which is all lyric-sized inputs need.

use std::collections::HashSet;

use crate::classify::RhymeType;

use super::groups::RhymeGroup;

/// Whether two group types may collapse into one group.
///
/// Identical types always merge. Across types, only perfect↔family and
/// slant↔assonance / slant↔consonance are close enough phonetically.
pub const fn compatible(a: RhymeType, b: RhymeType) -> bool {
    use RhymeType::{Assonance, Consonance, Family, Perfect, Slant};
    matches!(
        (a, b),
        (Perfect, Family)
            | (Family, Perfect)
            | (Slant, Assonance)
            | (Assonance, Slant)
            | (Slant, Consonance)
            | (Consonance, Slant)
    ) || a as u8 == b as u8
}

/// Collapse groups that share member occurrences and have compatible types.
///
/// The surviving group keeps its own type, strength, and color; absorbed
/// members are unioned in with duplicates (by `(line, position)`) dropped.
/// Only groups with at least 2 members remain afterwards.
#[tracing::instrument(skip_all, fields(groups = groups.len()))]
pub fn merge_groups(groups: Vec<RhymeGroup>) -> Vec<RhymeGroup> {
    let mut processed = vec![false; groups.len()];
    let mut merged = Vec::new();

    for i in 0..groups.len() {
        if processed[i] {
            continue;
        }
        processed[i] = true;

        let mut current = groups[i].clone();
        let mut identities: HashSet<(usize, usize)> =
            current.words.iter().map(|w| w.id()).collect();

        for j in (i + 1)..groups.len() {
            if processed[j] || !compatible(current.rhyme_type, groups[j].rhyme_type) {
                continue;
            }
            if !groups[j].words.iter().any(|w| identities.contains(&w.id())) {
                continue;
            }

            for word in &groups[j].words {
                if identities.insert(word.id()) {
                    current.words.push(word.clone());
                }
            }
            processed[j] = true;
        }

        if current.words.len() >= 2 {
            merged.push(current);
        }
    }

    merged
}
