use anyhow::Result;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;

use subcmd::cli::Cli;
use subcmd::cli::commands;
use subcmd::{ArgState, Reporter};

fn main() -> ExitCode {
    Reporter::stderr().run(run)
}

fn run() -> Result<()> {
    // Registration problems surface before any user input is looked at.
    let commands = commands::registry()?;

    let mut args = ArgState::from_env();
    let cli: Cli = args.parse()?;
    setup_logging(cli.verbose);

    println!("running with \"-a\" = {}", cli.a);

    let handler = commands.get(&mut args)?;
    handler(&mut args)
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
