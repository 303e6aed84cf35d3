//! # subcmd - Subcommand dispatch for clap flag passes
//!
//! `subcmd` adds subcommands to programs that parse their flags in stages.
//! It does not parse flags itself. Each stage runs an ordinary clap parser
//! over whatever arguments are still visible, and dispatch hands the tail of
//! the argument list to the selected command.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::process::ExitCode;
//! use subcmd::{ArgState, CommandMap, Reporter};
//!
//! fn main() -> ExitCode {
//!     Reporter::stderr().run(|| {
//!         let mut commands = CommandMap::new();
//!         commands.command("build", |_args| Ok(()))?;
//!         commands.command("test", |args| {
//!             println!("test with {:?}", args.args());
//!             Ok(())
//!         })?;
//!
//!         let mut args = ArgState::from_env();
//!         let handler = commands.get(&mut args)?;
//!         handler(&mut args)
//!     })
//! }
//! ```
//!
//! Running `prog test -v` prints `test with ["-v"]`. Running `prog nope`
//! prints `[cmd] usage error: unrecognized command "nope"; known commands:
//! ["build", "test"]` to stderr and exits with status 1.

/// The caller-owned argument handle and clap flag passes.
pub mod args;

/// Demo command-line interface built on the registry.
pub mod cli;

/// Registration and dispatch errors.
pub mod error;

/// Command registry and dispatch.
pub mod registry;

/// Top-level failure reporting and exit codes.
pub mod report;

/// Terminal styling helpers.
pub mod style;

pub use args::{ArgState, FlagPass};
pub use error::{CommandError, ErrorKind};
pub use registry::{CommandMap, Handler};
pub use report::{FAILURE, Reporter, catch_panics};
