//! Curated word dictionaries backing the heuristic analyses.

pub mod syllable_dict;
