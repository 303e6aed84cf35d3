//! Registration and dispatch errors.

use thiserror::Error;

/// Broad class of a [`CommandError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The registry was set up incorrectly. Surfaces at startup.
    Configuration,
    /// The supplied arguments do not name a known command.
    Usage,
}

/// Errors raised while registering commands or dispatching to them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("nil command {0:?}")]
    NilCommand(String),

    #[error("redundant command {0:?}")]
    RedundantCommand(String),

    #[error("missing command; known commands: {known:?}")]
    MissingCommand { known: Vec<String> },

    #[error("unrecognized command {name:?}; known commands: {known:?}")]
    UnrecognizedCommand { name: String, known: Vec<String> },
}

impl CommandError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NilCommand(_) | Self::RedundantCommand(_) => ErrorKind::Configuration,
            Self::MissingCommand { .. } | Self::UnrecognizedCommand { .. } => ErrorKind::Usage,
        }
    }

    /// Sorted command names known at the time of a usage error.
    pub fn known(&self) -> &[String] {
        match self {
            Self::MissingCommand { known } | Self::UnrecognizedCommand { known, .. } => known,
            Self::NilCommand(_) | Self::RedundantCommand(_) => &[],
        }
    }
}
