//! Analytics command implementation.

use super::Session;
use crate::cli::AnalyticsArgs;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the analytics command.
pub fn execute_analytics(args: AnalyticsArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    let root = session.person(&args.root)?;
    let analytics = session.engine.generation_analytics(&session.family, &root)?;
    println!("{}", formatter.format_analytics(&session.family, &analytics)?);
    Ok(())
}
