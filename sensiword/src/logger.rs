// sensiword/src/logger.rs
//! Logger initialization for the `sensiword` binary.
//!
//! Logs always go to stderr so they never mix with filtered output on stdout.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes the global logger.
///
/// `level` overrides `RUST_LOG` when given; otherwise `RUST_LOG` applies with
/// `warn` as the fallback. Calling this more than once is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = match level {
        Some(level) => {
            let mut builder = Builder::new();
            builder.filter_level(level);
            builder
        }
        None => Builder::from_env(Env::default().default_filter_or("warn")),
    };
    builder.format_timestamp(None).target(Target::Stderr);
    let _ = builder.try_init();
}
