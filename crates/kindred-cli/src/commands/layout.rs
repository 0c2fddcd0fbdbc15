//! Layout command implementation.

use super::Session;
use crate::cli::LayoutArgs;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the layout command.
pub fn execute_layout(args: LayoutArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    let root = session.person(&args.root)?;
    let layout = session.engine.layout(&session.family, &root)?;

    let connectors = args.connectors.then(|| session.engine.connectors(&layout));
    println!("{}", formatter.format_layout(&layout, connectors.as_deref())?);
    Ok(())
}
