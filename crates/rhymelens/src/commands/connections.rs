//! Connections command — the pairwise rhyme graph for a lyric file.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use rhymelens_core::analysis::{self, AnalyzeOptions, ConnectionOptions};
use rhymelens_core::classify::RhymeType;
use rhymelens_core::config::Config;

/// Arguments for the `connections` subcommand.
#[derive(Args, Debug)]
pub struct ConnectionsArgs {
    /// Lyric file to analyze.
    pub file: Utf8PathBuf,

    /// Maximum number of connections to return.
    #[arg(long)]
    pub max: Option<usize>,

    /// Visualization complexity from 1 (sparse) to 5 (dense).
    #[arg(long)]
    pub complexity: Option<u8>,

    /// Only fan out from this occurrence, given as LINE:POS (zero-based).
    #[arg(long, value_name = "LINE:POS")]
    pub focus: Option<String>,

    /// Rhyme types to include (comma-separated). Omit for all types.
    #[arg(long, value_delimiter = ',', value_enum)]
    pub types: Vec<RhymeType>,

    /// Only consider line-ending words.
    #[arg(long)]
    pub end_rhymes_only: bool,
}

/// Parse a `LINE:POS` occurrence reference.
fn parse_occurrence(raw: &str) -> anyhow::Result<(usize, usize)> {
    let (line, position) = raw
        .split_once(':')
        .with_context(|| format!("invalid occurrence {raw:?}: expected LINE:POS"))?;
    let line = line
        .parse()
        .with_context(|| format!("invalid line number in {raw:?}"))?;
    let position = position
        .parse()
        .with_context(|| format!("invalid word position in {raw:?}"))?;
    Ok((line, position))
}

/// Generate and print the connection graph for a lyric file.
#[instrument(name = "cmd_connections", skip_all, fields(file = %args.file))]
pub fn cmd_connections(
    args: ConnectionsArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(
        file = %args.file,
        max = ?args.max,
        complexity = ?args.complexity,
        focus = ?args.focus,
        types = ?args.types,
        "executing connections command"
    );

    let content = super::read_input_file(&args.file, max_input)?;

    let analyze_options = AnalyzeOptions {
        include_internal: !args.end_rhymes_only && config.include_internal,
    };
    let report = analysis::analyze(&content, &analyze_options);

    let focus_word = args.focus.as_deref().map(parse_occurrence).transpose()?;
    let options = ConnectionOptions {
        max_connections: args.max.unwrap_or(config.max_connections),
        complexity_level: args.complexity.unwrap_or(config.complexity_level),
        focus_word,
        hovered_word: None,
        type_filter: args.types,
    };
    let connections = analysis::generate_connections(&report.groups, &options);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&connections)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    println!(
        "\n  {} {} connections across {} groups",
        "Graph:".cyan(),
        connections.len(),
        report.groups.len(),
    );

    if connections.is_empty() {
        println!("\n  {}", "No connections found.".yellow());
        return Ok(());
    }

    for c in &connections {
        println!(
            "\n  {} {} ({}:{}) {} {} ({}:{})",
            format!("{}:", c.group_id).cyan(),
            c.source.display,
            c.source.line,
            c.source.position,
            "→".dimmed(),
            c.target.display,
            c.target.line,
            c.target.position,
        );
        println!("    distance {}, density {:.1}", c.distance, c.density);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_occurrence_accepts_line_pos() {
        assert_eq!(parse_occurrence("3:1").unwrap(), (3, 1));
        assert_eq!(parse_occurrence("0:0").unwrap(), (0, 0));
    }

    #[test]
    fn parse_occurrence_rejects_garbage() {
        assert!(parse_occurrence("3").is_err());
        assert!(parse_occurrence("a:b").is_err());
        assert!(parse_occurrence("3:").is_err());
    }
}
