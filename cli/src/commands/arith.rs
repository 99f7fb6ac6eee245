//! The `add` and `divide` commands.

use std::io::Write;

use primer::arith::division_unchecked;
use primer::{add, division};

use crate::cli::{AddArgs, DivideArgs};
use crate::common::CliResult;

/// Run the add command.
pub fn run_add(args: AddArgs, out: &mut dyn Write) -> CliResult<()> {
    writeln!(out, "{}", add(args.x, args.y))?;
    Ok(())
}

/// Run the divide command.
///
/// The checked path reports a zero divisor as an error. With `--unchecked`
/// the division is performed as-is and a zero divisor is a fatal fault.
pub fn run_divide(args: DivideArgs, out: &mut dyn Write) -> CliResult<()> {
    let quotient = if args.unchecked {
        tracing::debug!("Dividing without checking the divisor");
        division_unchecked(args.x, args.y)
    } else {
        division(args.x, args.y)?
    };
    writeln!(out, "{quotient}")?;
    Ok(())
}
