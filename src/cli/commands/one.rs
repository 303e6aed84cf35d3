use anyhow::Result;

use crate::args::ArgState;
use crate::cli::OneArgs;

/// Runs command "one" with its own flag pass.
pub fn run(args: &mut ArgState) -> Result<()> {
    let pass: OneArgs = args.parse()?;
    println!(
        "running command {:?} with \"-b\" = {} and args = {:?}",
        "one",
        pass.b,
        args.args()
    );
    Ok(())
}
