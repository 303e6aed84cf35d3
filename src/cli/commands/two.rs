use anyhow::Result;

use crate::args::ArgState;
use crate::cli::TwoArgs;

/// Runs command "two" with its own flag pass.
pub fn run(args: &mut ArgState) -> Result<()> {
    let pass: TwoArgs = args.parse()?;
    println!(
        "running command {:?} with \"-c\" = {} and args = {:?}",
        "two",
        pass.c,
        args.args()
    );
    Ok(())
}
