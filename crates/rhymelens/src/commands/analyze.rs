//! Analyze command — rhyme groups for a lyric file.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use rhymelens_core::analysis::{self, AnalyzeOptions};
use rhymelens_core::config::Config;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Lyric file to analyze.
    pub file: Utf8PathBuf,

    /// Only consider line-ending words.
    #[arg(long)]
    pub end_rhymes_only: bool,
}

/// Run the rhyme analysis pipeline on a lyric file.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, end_rhymes_only = args.end_rhymes_only, "executing analyze command");

    let content = super::read_input_file(&args.file, max_input)?;

    let options = AnalyzeOptions {
        include_internal: !args.end_rhymes_only && config.include_internal,
    };
    let report = analysis::analyze(&content, &options);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    println!(
        "\n  {} {} words across {} lines, {} groups",
        "Input:".cyan(),
        report.word_count,
        report.content_lines,
        report.groups.len(),
    );

    if report.groups.is_empty() {
        println!("\n  {}", "No rhyme groups found.".yellow());
        return Ok(());
    }

    for group in &report.groups {
        println!(
            "\n  {} {} (strength {:.2})",
            format!("{}:", group.id).cyan(),
            group.rhyme_type,
            group.strength,
        );
        let members: Vec<String> = group
            .words
            .iter()
            .map(|w| format!("{} ({}:{})", w.display, w.line, w.position))
            .collect();
        println!("    {}", members.join(", "));
    }

    Ok(())
}
