//! Shared-condition command implementation.

use super::Session;
use crate::cli::SharedArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use kindred_domain::ConditionId;

/// Execute the shared command.
pub fn execute_shared(args: SharedArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    let person = session.person(&args.person)?;
    let condition = ConditionId::new(&args.condition).map_err(CliError::InvalidInput)?;

    let matches = session
        .engine
        .shared_condition_relatives(&session.family, &person, &condition, Some(session.locale));

    println!("{}", formatter.format_shared(&session.family, &condition, &matches)?);
    Ok(())
}
