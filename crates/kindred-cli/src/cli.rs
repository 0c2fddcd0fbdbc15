//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use kindred_domain::Gender;
use kindred_engine::Locale;
use std::path::PathBuf;

/// Kindred CLI - Kinship queries and pedigree layout over a family snapshot.
#[derive(Debug, Parser)]
#[command(name = "kindred")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Family snapshot file (.json or .toml)
    #[arg(short, long, global = true, env = "KINDRED_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Label locale (en, es, zh; region tags like zh-CN accepted)
    #[arg(short, long, global = true, value_parser = parse_locale)]
    pub locale: Option<Locale>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// How two people are related and how much blood they share
    Match(MatchArgs),

    /// Everyone sharing blood with a person
    Relatives(RelativesArgs),

    /// Blood relatives carrying the same condition
    Shared(SharedArgs),

    /// Pedigree chart coordinates rooted at a person
    Layout(LayoutArgs),

    /// Per-generation statistics of the chart rooted at a person
    Analytics(AnalyticsArgs),
}

/// Arguments for the match command.
#[derive(Debug, Parser)]
pub struct MatchArgs {
    /// Person the relationship is described from
    pub source: String,

    /// Person whose relationship to the source is reported
    pub target: String,

    /// Gender of the target, overriding the snapshot record
    #[arg(short, long, value_enum)]
    pub gender: Option<GenderArg>,
}

/// Arguments for the relatives command.
#[derive(Debug, Parser)]
pub struct RelativesArgs {
    /// Person to collect blood relatives for
    pub person: String,
}

/// Arguments for the shared command.
#[derive(Debug, Parser)]
pub struct SharedArgs {
    /// Person to search from
    pub person: String,

    /// Condition identifier (e.g. brca1)
    pub condition: String,
}

/// Arguments for the layout command.
#[derive(Debug, Parser)]
pub struct LayoutArgs {
    /// Root of the chart
    pub root: String,

    /// Also print sibship connector segments
    #[arg(long)]
    pub connectors: bool,
}

/// Arguments for the analytics command.
#[derive(Debug, Parser)]
pub struct AnalyticsArgs {
    /// Root of the chart
    pub root: String,
}

/// Gender argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum GenderArg {
    /// Female
    Female,
    /// Male
    Male,
}

fn parse_locale(value: &str) -> std::result::Result<Locale, String> {
    value.parse::<Locale>().map_err(|e| e.to_string())
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<GenderArg> for Gender {
    fn from(gender: GenderArg) -> Self {
        match gender {
            GenderArg::Female => Gender::Female,
            GenderArg::Male => Gender::Male,
        }
    }
}
