use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use reibun_core::types::TargetLanguage;

/// Tatoeba example sentences for Anki notes
#[derive(Debug, Parser)]
#[command(name = "reibun")]
#[command(about = "Fetch Tatoeba example sentences and write them into Anki notes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Path to the config file (defaults to ./reibun.json when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List example sentences containing a word
    Search(SearchArgs),
    /// Pick an example and write it into a note's fields
    Insert(InsertArgs),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Japanese word to look up
    pub word: String,

    /// Translation language (eng or fra)
    #[arg(short, long, default_value = "eng", value_parser = parse_language)]
    pub language: TargetLanguage,
}

#[derive(Debug, Args)]
pub struct InsertArgs {
    /// Note id as shown in the Anki card browser
    pub note_id: u64,

    /// Field holding the word to search for (defaults to the note's first field)
    #[arg(short, long)]
    pub field: Option<String>,
}

fn parse_language(value: &str) -> Result<TargetLanguage, String> {
    value.parse()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_defaults_to_english() {
        let cli = Cli::parse_from(["reibun", "search", "猫"]);

        match cli.command {
            Commands::Search(args) => {
                assert_eq!(args.word, "猫");
                assert_eq!(args.language, TargetLanguage::English);
            }
            other => panic!("expected search, got {other:?}"),
        }
    }

    #[test]
    fn test_language_flag_accepts_short_spellings() {
        let cli = Cli::parse_from(["reibun", "search", "猫", "--language", "fr"]);

        match cli.command {
            Commands::Search(args) => assert_eq!(args.language, TargetLanguage::French),
            other => panic!("expected search, got {other:?}"),
        }
    }

    #[test]
    fn test_insert_takes_note_id_and_field() {
        let cli = Cli::parse_from(["reibun", "insert", "1502298033753", "--field", "Word"]);

        match cli.command {
            Commands::Insert(args) => {
                assert_eq!(args.note_id, 1502298033753);
                assert_eq!(args.field.as_deref(), Some("Word"));
            }
            other => panic!("expected insert, got {other:?}"),
        }
    }
}
