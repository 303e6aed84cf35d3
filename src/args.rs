//! The argument handle shared by the outer program, the dispatcher and the
//! command handlers.
//!
//! An [`ArgState`] always knows which arguments the *next* parsing stage
//! should see. Before any flag pass that is the raw vector without the
//! program name; after a pass it is whatever that pass left as positional
//! arguments. Dispatch rewrites it so a handler sees only what follows its
//! command name.

use clap::Parser;
use clap::error::ErrorKind;
use std::iter;

/// A clap parser usable as one flag pass over an [`ArgState`].
///
/// Implementors keep their leftover positionals in a trailing field, usually
///
/// ```ignore
/// #[arg(trailing_var_arg = true)]
/// rest: Vec<String>,
/// ```
///
/// so that flag parsing stops at the first positional argument.
pub trait FlagPass: Parser {
    /// Positional arguments left over once this pass consumed its flags.
    fn residual(&self) -> &[String];
}

/// Remaining command-line arguments, owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgState {
    /// Element 0 is the program name, or the command name after dispatch.
    raw: Vec<String>,
    /// Leftovers of the last flag pass, if one completed.
    residual: Option<Vec<String>>,
}

impl ArgState {
    /// Creates a handle from a full argument vector, program name included.
    pub fn new<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            raw: args.into_iter().map(Into::into).collect(),
            residual: None,
        }
    }

    /// Creates a handle from the process arguments.
    ///
    /// Arguments that are not valid UTF-8 are converted lossily.
    pub fn from_env() -> Self {
        Self::new(std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()))
    }

    /// The name the next flag pass reports itself as.
    pub fn program(&self) -> &str {
        self.raw.first().map_or("", String::as_str)
    }

    /// Returns `true` once a flag pass has completed on this handle.
    pub const fn parsed(&self) -> bool {
        self.residual.is_some()
    }

    /// Arguments relevant to the next parsing stage.
    pub fn args(&self) -> &[String] {
        match &self.residual {
            Some(residual) => residual,
            None => self.raw.get(1..).unwrap_or_default(),
        }
    }

    /// Runs one flag pass over the visible arguments.
    ///
    /// On success the pass's residual becomes the visible argument list.
    /// On failure the handle is left untouched.
    pub fn try_parse<P: FlagPass>(&mut self) -> Result<P, clap::Error> {
        let argv: Vec<&str> = iter::once(self.program())
            .chain(self.args().iter().map(String::as_str))
            .collect();
        let pass = P::try_parse_from(argv)?;

        tracing::trace!(
            program = self.program(),
            residual = ?pass.residual(),
            "flag pass completed"
        );
        self.residual = Some(pass.residual().to_vec());
        Ok(pass)
    }

    /// Like [`try_parse`](Self::try_parse), but explicit `--help` and
    /// `--version` requests print their output and exit with status 0, as
    /// `clap::Parser::parse` does. Every other clap error, including help
    /// shown for missing arguments, is returned to the caller.
    pub fn parse<P: FlagPass>(&mut self) -> Result<P, clap::Error> {
        self.try_parse().map_err(|err| {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit();
            }
            err
        })
    }

    /// Makes the first visible argument the new program name, leaving its
    /// tail visible to the next stage.
    pub(crate) fn descend(&mut self) {
        self.raw = self.args().to_vec();
        self.residual = None;
    }
}
