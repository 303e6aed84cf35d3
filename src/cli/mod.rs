//! Command-line interface of the `subcmd` demo binary.

/// Flag pass definitions with clap.
pub mod args;

/// Subcommand implementations.
pub mod commands;

pub use args::{Cli, ListArgs, OneArgs, TwoArgs};
