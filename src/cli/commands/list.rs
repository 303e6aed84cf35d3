//! Known-command listing.

use anyhow::Result;
use std::io::{self, IsTerminal};

use crate::args::ArgState;
use crate::cli::ListArgs;
use crate::style::{self, Style};

/// Prints the known command names, one per line, in ascending order.
pub fn run(args: &mut ArgState, names: &[String]) -> Result<()> {
    let _: ListArgs = args.parse()?;

    let color = style::color_allowed() && io::stdout().is_terminal();
    for name in names {
        if color {
            println!("{}", Style::command(name));
        } else {
            println!("{name}");
        }
    }
    if color {
        println!("{}", Style::hint("Run `subcmd <command> --help` for its flags."));
    }
    Ok(())
}
