//! Match command implementation.

use super::Session;
use crate::cli::MatchArgs;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the match command.
pub fn execute_match(args: MatchArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    println!("{}", render_match(args, session, formatter)?);
    Ok(())
}

/// Run the match and format the result.
pub fn render_match(args: MatchArgs, session: &Session, formatter: &Formatter) -> Result<String> {
    let source = session.person(&args.source)?;
    let target = session.person(&args.target)?;

    let result = session.engine.genetic_match(
        &session.family,
        &source,
        &target,
        args.gender.map(Into::into),
        Some(session.locale),
    );

    formatter.format_match(&session.family, &source, &target, &result)
}
