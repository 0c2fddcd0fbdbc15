//! Kindred CLI - Command-line interface for the kinship engine.

use anyhow::Context;
use clap::Parser;
use kindred_cli::commands;
use kindred_cli::{load_snapshot, Cli, CliError, Command, Config, Formatter, Session};
use kindred_engine::KinshipEngine;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing (log to stderr)
    let filter = EnvFilter::try_from_env("KINDRED_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config, from --config if given
    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().unwrap_or_else(|e| {
            warn!(error = %e, "Ignoring unreadable config file");
            Config::default()
        }),
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    let snapshot_path = cli
        .snapshot
        .ok_or_else(|| CliError::InvalidInput("no snapshot given; pass --snapshot or set KINDRED_SNAPSHOT".into()))?;
    let family = load_snapshot(&snapshot_path)
        .with_context(|| format!("failed to load snapshot {}", snapshot_path.display()))?;

    let locale = config.effective_locale(cli.locale);
    let session = Session::new(family, KinshipEngine::new(config.engine), locale);

    // Handle commands
    match cli.command {
        Command::Match(args) => commands::execute_match(args, &session, &formatter)?,
        Command::Relatives(args) => commands::execute_relatives(args, &session, &formatter)?,
        Command::Shared(args) => commands::execute_shared(args, &session, &formatter)?,
        Command::Layout(args) => commands::execute_layout(args, &session, &formatter)?,
        Command::Analytics(args) => commands::execute_analytics(args, &session, &formatter)?,
    }

    Ok(())
}
