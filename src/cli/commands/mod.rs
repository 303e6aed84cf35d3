//! Subcommand implementations.

use crate::error::CommandError;
use crate::registry::CommandMap;

/// `list` command handler.
pub mod list;

/// `one` command handler.
pub mod one;

/// `two` command handler.
pub mod two;

/// Builds the registry of the demo binary.
pub fn registry() -> Result<CommandMap, CommandError> {
    let mut commands = CommandMap::new();
    commands.command("one", one::run)?.command("two", two::run)?;

    let mut names: Vec<String> = commands.keys().into_iter().map(String::from).collect();
    names.push("list".to_string());
    names.sort();
    commands.command("list", move |args| list::run(args, &names))?;

    Ok(commands)
}
