// sensiword/src/commands/mod.rs
//! Command implementations and the helpers they share: building a detector
//! from the dictionary arguments and opening the input.

pub mod filter;
pub mod query;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use sensiword_core::{merge_config, Detector, DetectorConfig};

use crate::cli::{Commands, DictionaryArgs, InputArgs};

/// Runs one parsed command and returns the process exit code.
pub fn run(command: Commands) -> Result<ExitCode> {
    let mut stdout = io::stdout();
    match command {
        Commands::Detect(cmd) => {
            let detector = build_detector(&cmd.dictionary)?;
            let text = read_input(&cmd.input)?;
            let hit = query::run_detect(&detector, &text, &mut stdout)?;
            Ok(if hit && cmd.fail_on_match { ExitCode::from(1) } else { ExitCode::SUCCESS })
        }
        Commands::Search(cmd) => {
            let detector = build_detector(&cmd.dictionary)?;
            let text = read_input(&cmd.input)?;
            query::run_search(&detector, &text, &mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Match(cmd) => {
            let detector = build_detector(&cmd.dictionary)?;
            let text = read_input(&cmd.input)?;
            let format = if cmd.json { query::MatchFormat::Json } else { query::MatchFormat::detect_human() };
            query::run_match(&detector, &text, format, &mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Filter(cmd) => {
            let detector = build_detector(&cmd.dictionary)?;
            let opts = filter::FilterOptions {
                replacement: cmd.replacement,
                line_buffered: cmd.line_buffered,
            };
            let reader = open_input(&cmd.input)?;
            let mut writer = open_output(cmd.output.as_deref())?;
            filter::run_filter(&detector, reader, &mut writer, &opts)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Words(cmd) => {
            let detector = build_detector(&cmd.dictionary)?;
            query::run_words(&detector, &mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Resolves the effective configuration: embedded defaults, then the user's
/// config file, then command-line overrides.
pub fn resolve_config(args: &DictionaryArgs) -> Result<DetectorConfig> {
    let default_config = DetectorConfig::load_default()?;
    let user_config = match &args.config {
        Some(path) => Some(
            DetectorConfig::load_from_file(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        ),
        None => None,
    };
    let mut config = merge_config(default_config, user_config);

    if args.ignore_case {
        config.case_insensitive = Some(true);
    } else if args.case_sensitive {
        config.case_insensitive = Some(false);
    }
    if args.no_noise {
        debug!("Clearing configured noise characters.");
        config.noise_characters = Some(String::new());
    }
    if let Some(extra) = &args.noise {
        config.noise_characters.get_or_insert_with(String::new).push_str(extra);
    }
    config.word_lists.extend(args.word_lists.iter().cloned());
    Ok(config)
}

/// Builds the detector for a command, loading every word list and inline word.
pub fn build_detector(args: &DictionaryArgs) -> Result<Detector> {
    let config = resolve_config(args)?;
    let detector = Detector::from_config(&config)?;
    if !args.words.is_empty() {
        detector.add_words(&args.words);
    }

    if detector.is_empty() {
        warn!("The dictionary is empty; nothing will match. Use --words FILE or --word WORD.");
    } else {
        info!(
            "Dictionary ready with {} word(s) (case_insensitive={}).",
            detector.len(),
            detector.is_case_insensitive()
        );
    }
    Ok(detector)
}

/// Opens the input file, or stdin when none was given.
pub fn open_input(input: &InputArgs) -> Result<Box<dyn BufRead>> {
    match &input.input_file {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => {
            info!("Reading input from stdin...");
            Ok(Box::new(BufReader::new(io::stdin())))
        }
    }
}

/// Creates the output file, or returns stdout when none was given.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            info!("Writing filtered content to file: {}", path.display());
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => {
            debug!("Writing filtered content to stdout.");
            Ok(Box::new(io::stdout()))
        }
    }
}

/// Reads the whole input into memory.
pub fn read_input(input: &InputArgs) -> Result<String> {
    let mut text = String::new();
    open_input(input)?
        .read_to_string(&mut text)
        .context("Failed to read input")?;
    Ok(text)
}
