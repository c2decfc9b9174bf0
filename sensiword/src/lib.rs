// sensiword/src/lib.rs
//! # sensiword CLI
//!
//! This crate provides the command-line front end for `sensiword-core`. It
//! only talks to the core through the `DetectionEngine` query surface.

pub mod cli;
pub mod commands;
pub mod logger;

pub use commands::run;
