//! Core rhyme analysis library for rhymelens.
//!
//! Parses raw lyric text, approximates each word's pronunciation,
//! classifies words into a five-tier rhyme taxonomy, clusters them into
//! rhyme groups, and derives a bounded connection graph for downstream
//! visualizations.
//!
//! # Modules
//!
//! - [`analysis`] - The composed pipeline and connection generation
//! - [`classify`] - Rhyme key extraction and strength scoring
//! - [`config`] - Configuration loading and management
//! - [`dictionaries`] - Curated syllable counts
//! - [`extract`] - Line/word extraction from lyric text
//! - [`phonetics`] - Heuristic phonetic encoding
//!
//! # Quick Start
//!
//! ```
//! use rhymelens_core::analysis::{self, AnalyzeOptions, ConnectionOptions};
//!
//! let report = analysis::analyze("cat\nhat", &AnalyzeOptions::default());
//! assert_eq!(report.groups.len(), 1);
//!
//! let connections =
//!     analysis::generate_connections(&report.groups, &ConnectionOptions::default());
//! assert_eq!(connections.len(), 1);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod classify;
pub mod config;
pub mod dictionaries;
pub mod error;
pub mod extract;
pub mod palette;
pub mod phonetics;
pub mod text;

pub use analysis::{
    AnalysisReport, AnalyzeOptions, ConnectionOptions, RhymeConnection, RhymeGroup, analyze,
    generate_connections,
};
pub use classify::{RhymeClassification, RhymeType, classify_word};
pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{ConfigError, ConfigResult};
pub use extract::RhymeWord;

/// Default maximum input size in bytes (1 MiB).
///
/// Lyric sheets are small; anything larger is almost certainly not lyrics.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;
