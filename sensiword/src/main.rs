// sensiword/src/main.rs
//! sensiword entry point.
//!
//! Parses the command line, initializes logging and dispatches to the
//! selected command.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use std::process::ExitCode;

use sensiword::cli::Cli;
use sensiword::{commands, logger};

fn main() -> Result<ExitCode> {
    let args = Cli::parse();

    let level = if args.quiet {
        Some(LevelFilter::Off)
    } else if args.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);
    log::info!("sensiword started. Version: {}", env!("CARGO_PKG_VERSION"));

    commands::run(args.command)
}
