//! Command registry and dispatch.

use anyhow::Result;
use std::collections::BTreeMap;
use std::fmt;

use crate::args::ArgState;
use crate::error::CommandError;

/// A registered command body.
///
/// The handler receives the argument handle positioned after its own command
/// name and may run further flag passes on it.
pub type Handler = Box<dyn Fn(&mut ArgState) -> Result<()>>;

/// Known subcommands, keyed by name.
#[derive(Default)]
pub struct CommandMap {
    commands: BTreeMap<String, Handler>,
}

impl CommandMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `name`.
    ///
    /// Fails when the handler is absent or the name is taken. The map is left
    /// unchanged on failure.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        handler: Option<Handler>,
    ) -> Result<&mut Self, CommandError> {
        let name = name.into();
        let Some(handler) = handler else {
            return Err(CommandError::NilCommand(name));
        };
        if self.commands.contains_key(&name) {
            return Err(CommandError::RedundantCommand(name));
        }

        tracing::debug!(command = %name, "registered command");
        self.commands.insert(name, handler);
        Ok(self)
    }

    /// Registers a closure under `name`.
    pub fn command<F>(&mut self, name: impl Into<String>, f: F) -> Result<&mut Self, CommandError>
    where
        F: Fn(&mut ArgState) -> Result<()> + 'static,
    {
        self.add(name, Some(Box::new(f)))
    }

    /// Finds the handler named by the first visible argument.
    ///
    /// On success `args` is rewritten so that only the arguments after the
    /// command name remain visible. The handler is not invoked.
    pub fn get(&self, args: &mut ArgState) -> Result<&Handler, CommandError> {
        let Some(name) = args.args().first() else {
            return Err(CommandError::MissingCommand { known: self.known() });
        };
        let Some(handler) = self.commands.get(name) else {
            return Err(CommandError::UnrecognizedCommand {
                name: name.clone(),
                known: self.known(),
            });
        };

        tracing::debug!(command = %name, "dispatching");
        args.descend();
        Ok(handler)
    }

    /// Finds the selected command and runs it.
    pub fn dispatch(&self, args: &mut ArgState) -> Result<()> {
        let handler = self.get(args)?;
        handler(args)
    }

    /// Registered names in ascending order.
    pub fn keys(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn known(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }
}

impl fmt::Debug for CommandMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandMap")
            .field("commands", &self.keys())
            .finish()
    }
}
