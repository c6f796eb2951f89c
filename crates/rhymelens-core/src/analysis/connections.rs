//! Connection graph generation for visualization.
//!
//! Turns a set of rhyme groups into a bounded, prioritized list of
//! pairwise connections annotated with line distance and local density.
//! Pure and deterministic: the same groups and options always produce the
//! same list, and empty input produces an empty list. Cheap enough to
//! re-run on every interactive filter change.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::classify::RhymeType;
use crate::extract::RhymeWord;

use super::groups::RhymeGroup;

/// Options controlling connection generation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ConnectionOptions {
    /// Upper bound on the number of returned connections.
    pub max_connections: usize,
    /// Visualization complexity from 1 (sparse) to 5 (dense); values
    /// outside the range are clamped.
    pub complexity_level: u8,
    /// When set, only fan-out connections from this occurrence are made.
    pub focus_word: Option<(usize, usize)>,
    /// Connections touching this occurrence sort first.
    pub hovered_word: Option<(usize, usize)>,
    /// Rhyme types to include. Empty means no filtering.
    pub type_filter: Vec<RhymeType>,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            max_connections: 100,
            complexity_level: 3,
            focus_word: None,
            hovered_word: None,
            type_filter: Vec::new(),
        }
    }
}

/// A pairwise rhyme edge between two members of one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RhymeConnection {
    /// Identifier of the group both endpoints belong to.
    pub group_id: String,
    /// First endpoint, earlier in reading order unless focused.
    pub source: RhymeWord,
    /// Second endpoint.
    pub target: RhymeWord,
    /// Absolute line distance between the endpoints.
    pub distance: usize,
    /// Average number of connections whose line span covers the region
    /// between the endpoints; used to de-emphasize crowded areas.
    pub density: f64,
}

struct Candidate {
    connection: RhymeConnection,
    strength: f64,
}

/// Generate a bounded, prioritized connection list for the given groups.
#[tracing::instrument(skip_all, fields(groups = groups.len()))]
pub fn generate_connections(
    groups: &[RhymeGroup],
    options: &ConnectionOptions,
) -> Vec<RhymeConnection> {
    let complexity = usize::from(options.complexity_level.clamp(1, 5));
    let fan_out = complexity * 2;
    let max_span = 10 + complexity * 5;

    let selected: Vec<&RhymeGroup> = groups
        .iter()
        .filter(|g| options.type_filter.is_empty() || options.type_filter.contains(&g.rhyme_type))
        .collect();

    let mut candidates = Vec::new();
    for group in selected {
        if let Some(focus) = options.focus_word {
            collect_focused(group, focus, &mut candidates);
        } else {
            collect_pairs(group, fan_out, max_span, &mut candidates);
        }
    }

    annotate_density(&mut candidates);

    candidates.sort_by(|a, b| {
        let a_hover = touches(&a.connection, options.hovered_word);
        let b_hover = touches(&b.connection, options.hovered_word);
        b_hover
            .cmp(&a_hover)
            .then(b.strength.total_cmp(&a.strength))
            .then(a.connection.distance.cmp(&b.connection.distance))
    });

    candidates.truncate(options.max_connections);
    candidates.into_iter().map(|c| c.connection).collect()
}

/// One-to-many fan-out from the focused occurrence within its group(s).
fn collect_focused(group: &RhymeGroup, focus: (usize, usize), out: &mut Vec<Candidate>) {
    let Some(source) = group.words.iter().find(|w| w.id() == focus) else {
        return;
    };
    for target in &group.words {
        if target.id() == focus {
            continue;
        }
        out.push(candidate(group, source.clone(), target.clone()));
    }
}

/// Connect each member to a few subsequent members, capped by distance.
fn collect_pairs(group: &RhymeGroup, fan_out: usize, max_span: usize, out: &mut Vec<Candidate>) {
    let mut members: Vec<&RhymeWord> = group.words.iter().collect();
    members.sort_by_key(|w| w.id());

    for (i, source) in members.iter().enumerate() {
        for target in members.iter().skip(i + 1).take(fan_out) {
            let distance = source.line.abs_diff(target.line);
            if distance > max_span {
                continue;
            }
            out.push(candidate(group, (*source).clone(), (*target).clone()));
        }
    }
}

fn candidate(group: &RhymeGroup, source: RhymeWord, target: RhymeWord) -> Candidate {
    let distance = source.line.abs_diff(target.line);
    Candidate {
        connection: RhymeConnection {
            group_id: group.id.clone(),
            source,
            target,
            distance,
            density: 0.0,
        },
        strength: group.strength,
    }
}

/// Fill in each candidate's density from per-line coverage counts.
///
/// Coverage is counted over all candidates before any are finalized, so
/// density reflects the full graph rather than the truncated result.
fn annotate_density(candidates: &mut [Candidate]) {
    let mut coverage: HashMap<usize, usize> = HashMap::new();
    for c in candidates.iter() {
        let (lo, hi) = span(&c.connection);
        for line in lo..=hi {
            *coverage.entry(line).or_default() += 1;
        }
    }

    for c in candidates.iter_mut() {
        let (lo, hi) = span(&c.connection);
        let lines = (hi - lo + 1) as f64;
        let covered: usize = (lo..=hi).map(|line| coverage[&line]).sum();
        c.connection.density = covered as f64 / lines;
    }
}

fn span(connection: &RhymeConnection) -> (usize, usize) {
    let lo = connection.source.line.min(connection.target.line);
    let hi = connection.source.line.max(connection.target.line);
    (lo, hi)
}

fn touches(connection: &RhymeConnection, id: Option<(usize, usize)>) -> bool {
    id.is_some_and(|id| connection.source.id() == id || connection.target.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis;
    use crate::analysis::AnalyzeOptions;

    fn analyzed(lyrics: &str) -> Vec<RhymeGroup> {
        analysis::analyze(lyrics, &AnalyzeOptions::default()).groups
    }

    #[test]
    fn couplet_yields_one_connection() {
        let groups = analyzed("cat\nhat");
        let connections = generate_connections(&groups, &ConnectionOptions::default());
        assert_eq!(connections.len(), 1);
        assert_eq!(connections[0].distance, 1);
        assert!((connections[0].density - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_groups_empty_connections() {
        let connections = generate_connections(&[], &ConnectionOptions::default());
        assert!(connections.is_empty());
    }

    #[test]
    fn respects_max_connections() {
        let lyrics = "light\nnight\nbright\nsight\nfight\nright\nmight\ntight";
        let groups = analyzed(lyrics);
        let options = ConnectionOptions {
            max_connections: 3,
            ..Default::default()
        };
        let connections = generate_connections(&groups, &options);
        assert!(connections.len() <= 3);
        assert!(!connections.is_empty());
    }

    #[test]
    fn endpoints_belong_to_their_group() {
        let lyrics = "walking in the light\nholding on tonight\nit will be alright";
        let groups = analyzed(lyrics);
        let connections = generate_connections(&groups, &ConnectionOptions::default());
        assert!(!connections.is_empty());
        for c in &connections {
            let group = groups.iter().find(|g| g.id == c.group_id).unwrap();
            assert!(group.contains(c.source.id()));
            assert!(group.contains(c.target.id()));
        }
    }

    #[test]
    fn type_filter_excludes_groups() {
        let groups = analyzed("cat\nhat");
        let options = ConnectionOptions {
            type_filter: vec![RhymeType::Assonance],
            ..Default::default()
        };
        assert!(generate_connections(&groups, &options).is_empty());

        let options = ConnectionOptions {
            type_filter: vec![RhymeType::Perfect],
            ..Default::default()
        };
        assert_eq!(generate_connections(&groups, &options).len(), 1);
    }

    #[test]
    fn focus_restricts_to_fan_out() {
        let lyrics = "light\nnight\nbright\nsight";
        let groups = analyzed(lyrics);
        let focus = groups[0].words[0].id();
        let options = ConnectionOptions {
            focus_word: Some(focus),
            ..Default::default()
        };
        let connections = generate_connections(&groups, &options);
        assert!(!connections.is_empty());
        assert!(connections.iter().all(|c| c.source.id() == focus));
    }

    #[test]
    fn distant_lines_skipped() {
        let mut lines = vec!["cat".to_string()];
        lines.extend(std::iter::repeat_n("tumbling".to_string(), 40));
        lines.push("hat".to_string());
        let groups = analyzed(&lines.join("\n"));
        // cat and hat still group, but 41 lines apart exceeds the span
        // cap at every complexity level.
        let connections = generate_connections(&groups, &ConnectionOptions::default());
        assert!(
            connections
                .iter()
                .all(|c| !(c.source.word == "cat" && c.target.word == "hat"))
        );
    }

    #[test]
    fn hovered_connections_sort_first() {
        // Two groups: a strong perfect cluster and a weak assonance pair.
        let lyrics = "light\nnight\nbright\nday\nway";
        let groups = analyzed(lyrics);
        assert!(groups.len() > 1);

        let weakest = groups.last().unwrap();
        let hover = weakest.words[0].id();
        let options = ConnectionOptions {
            hovered_word: Some(hover),
            ..Default::default()
        };
        let connections = generate_connections(&groups, &options);
        // Without hover the weak pair would sort after the perfect cluster.
        assert!(
            connections[0].source.id() == hover || connections[0].target.id() == hover,
            "hovered connection should be first"
        );
    }

    #[test]
    fn deterministic_output() {
        let lyrics = "light\nnight\nbright\nsight\ngo\nshow\nflow";
        let groups = analyzed(lyrics);
        let options = ConnectionOptions::default();
        assert_eq!(
            generate_connections(&groups, &options),
            generate_connections(&groups, &options)
        );
    }

    #[test]
    fn complexity_widens_fan_out() {
        let lyrics = "light\nnight\nbright\nsight\nfight\nright\nmight\ntight\nkite\nbite";
        let groups = analyzed(lyrics);
        let sparse = ConnectionOptions {
            complexity_level: 1,
            max_connections: 1000,
            ..Default::default()
        };
        let dense = ConnectionOptions {
            complexity_level: 5,
            max_connections: 1000,
            ..Default::default()
        };
        assert!(
            generate_connections(&groups, &sparse).len()
                < generate_connections(&groups, &dense).len()
        );
    }
}
