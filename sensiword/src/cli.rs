//! This file defines the command-line interface (CLI) for the sensiword application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "sensiword",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Detect, list and redact sensitive words in text",
    long_about = "sensiword scans text for the words of a sensitive-word dictionary. Matching tolerates noise characters inserted inside a word (e.g. `敏*#感词`) and can optionally ignore case. Matches can be reported with exact byte and character offsets, or redacted in place.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all log output.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `sensiword` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reports whether the input contains any sensitive word.
    #[command(about = "Report whether the input contains any sensitive word.")]
    Detect(DetectCommand),

    /// Lists the distinct sensitive words found in the input.
    #[command(about = "List the distinct sensitive words found in the input, in first-seen order.")]
    Search(SearchCommand),

    /// Reports every match with its byte and character offsets.
    #[command(about = "Report every match with its byte and character offsets.")]
    Match(MatchCommand),

    /// Redacts every sensitive word in the input.
    #[command(about = "Redact every sensitive word in the input.")]
    Filter(FilterCommand),

    /// Lists the loaded dictionary.
    #[command(about = "List the loaded dictionary, sorted.")]
    Words(WordsCommand),
}

/// Arguments that build the dictionary, shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct DictionaryArgs {
    /// Word-list files, one word per line.
    #[arg(long = "words", short = 'w', value_name = "FILE", help = "Load a word-list file (one word per line). May be repeated.")]
    pub word_lists: Vec<PathBuf>,

    /// Inline dictionary words.
    #[arg(long = "word", value_name = "WORD", help = "Add a single word to the dictionary. May be repeated.")]
    pub words: Vec<String>,

    /// Path to a detector configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a detector configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Fold case on insert and scan.
    #[arg(long = "ignore-case", short = 'I', help = "Match case-insensitively.")]
    pub ignore_case: bool,

    /// Match case exactly, overriding `case_insensitive` from the config file.
    #[arg(
        long = "case-sensitive",
        conflicts_with = "ignore_case",
        help = "Match case exactly, even if the config file enables case folding."
    )]
    pub case_sensitive: bool,

    /// Extra noise characters.
    #[arg(long = "noise", value_name = "CHARS", help = "Additional characters to skip inside a match.")]
    pub noise: Option<String>,

    /// Drop the configured noise set.
    #[arg(long = "no-noise", help = "Clear the configured noise characters (--noise still applies).")]
    pub no_noise: bool,
}

/// Where the text to scan comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,
}

/// Arguments for the `detect` command.
#[derive(Parser, Debug)]
pub struct DetectCommand {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    #[command(flatten)]
    pub input: InputArgs,

    /// Exit with status 1 when a sensitive word is found.
    #[arg(long = "fail-on-match", help = "Exit with a non-zero code if any sensitive word is found.")]
    pub fail_on_match: bool,
}

/// Arguments for the `search` command.
#[derive(Parser, Debug)]
pub struct SearchCommand {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the `match` command.
#[derive(Parser, Debug)]
pub struct MatchCommand {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    #[command(flatten)]
    pub input: InputArgs,

    /// Print matches as a JSON array.
    #[arg(long = "json", help = "Print matches to stdout as a JSON array.")]
    pub json: bool,
}

/// Arguments for the `filter` command.
#[derive(Parser, Debug)]
pub struct FilterCommand {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    #[command(flatten)]
    pub input: InputArgs,

    /// Replacement written once per matched character.
    #[arg(long, short = 'r', value_name = "TEXT", help = "Replacement written once per matched character (default from config, else '*').")]
    pub replacement: Option<String>,

    /// Write filtered output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Process input line by line (useful for streaming data from pipes).
    #[arg(long = "line-buffered", help = "Process input line by line (useful for streaming data from pipes).")]
    pub line_buffered: bool,
}

/// Arguments for the `words` command.
#[derive(Parser, Debug)]
pub struct WordsCommand {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,
}
