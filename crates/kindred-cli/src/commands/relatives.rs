//! Relatives command implementation.

use super::Session;
use crate::cli::RelativesArgs;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the relatives command.
pub fn execute_relatives(args: RelativesArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    let person = session.person(&args.person)?;
    let relatives = session.engine.blood_relatives(&session.family, &person);
    println!("{}", formatter.format_relatives(&session.family, &person, &relatives)?);
    Ok(())
}
