use clap::{ArgAction, Parser};

use crate::args::FlagPass;

/// Top-level flags, parsed before dispatch.
#[derive(Parser, Debug)]
#[command(name = "subcmd")]
#[command(about = "Subcommand dispatch demo")]
#[command(version)]
pub struct Cli {
    /// Flag "a"
    #[arg(short = 'a')]
    pub a: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Command followed by its own flags and arguments
    #[arg(trailing_var_arg = true, value_name = "COMMAND")]
    pub rest: Vec<String>,
}

impl FlagPass for Cli {
    fn residual(&self) -> &[String] {
        &self.rest
    }
}

/// Flags of the `one` command.
#[derive(Parser, Debug)]
#[command(about = "Run command \"one\"")]
pub struct OneArgs {
    /// Flag "b"
    #[arg(short = 'b')]
    pub b: bool,

    #[arg(trailing_var_arg = true)]
    pub rest: Vec<String>,
}

impl FlagPass for OneArgs {
    fn residual(&self) -> &[String] {
        &self.rest
    }
}

/// Flags of the `two` command.
#[derive(Parser, Debug)]
#[command(about = "Run command \"two\"")]
pub struct TwoArgs {
    /// Flag "c"
    #[arg(short = 'c')]
    pub c: bool,

    #[arg(trailing_var_arg = true)]
    pub rest: Vec<String>,
}

impl FlagPass for TwoArgs {
    fn residual(&self) -> &[String] {
        &self.rest
    }
}

/// The `list` command takes no flags or arguments.
#[derive(Parser, Debug)]
#[command(about = "List known commands")]
pub struct ListArgs {}

impl FlagPass for ListArgs {
    fn residual(&self) -> &[String] {
        &[]
    }
}
