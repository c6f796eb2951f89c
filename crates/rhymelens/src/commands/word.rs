//! Word command — phonetics and classification for a single word.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use rhymelens_core::classify::{self, RhymeType};
use rhymelens_core::dictionaries::syllable_dict;
use rhymelens_core::phonetics;

/// Arguments for the `word` subcommand.
#[derive(Args, Debug)]
pub struct WordArgs {
    /// Word to inspect.
    pub word: String,
}

#[derive(Serialize)]
struct WordReport {
    word: String,
    phonetic: String,
    syllables: usize,
    rhyme_key: String,
    rhyme_type: RhymeType,
    strength: f64,
}

/// Show how a single word is encoded and classified.
#[instrument(name = "cmd_word", skip_all, fields(word = %args.word))]
pub fn cmd_word(args: WordArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(word = %args.word, "executing word command");

    let classification = classify::classify_word(&args.word);
    let report = WordReport {
        phonetic: phonetics::approximate_phonemes(&args.word),
        syllables: syllable_dict::count_syllables(&args.word),
        rhyme_key: classification.key,
        rhyme_type: classification.rhyme_type,
        strength: classification.strength,
        word: args.word,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.word.bold());
    println!("{}: {}", "Phonetic".dimmed(), report.phonetic);
    println!("{}: {}", "Syllables".dimmed(), report.syllables);
    println!("{}: {}", "Rhyme key".dimmed(), report.rhyme_key);
    println!("{}: {}", "Rhyme type".dimmed(), report.rhyme_type);
    println!("{}: {:.2}", "Strength".dimmed(), report.strength);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cmd_word_text_succeeds() {
        let args = WordArgs {
            word: "tonight".to_string(),
        };
        assert!(cmd_word(args, false).is_ok());
    }

    #[test]
    fn cmd_word_json_succeeds() {
        let args = WordArgs {
            word: "love".to_string(),
        };
        assert!(cmd_word(args, true).is_ok());
    }
}
