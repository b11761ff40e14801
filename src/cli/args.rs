//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    category::CategoryCommands,
    check::CheckArgs,
    completions::CompletionsArgs,
    drug::DrugCommands,
    export::ExportArgs,
    import::ImportArgs,
    init::InitArgs,
    interaction::InteractionCommands,
    reset::ResetArgs,
    severity::SeverityCommands,
    status::StatusArgs,
};

#[derive(Parser)]
#[command(name = "rxcat")]
#[command(author, version, about = "Local drug interaction catalog")]
#[command(
    long_about = "A single-user catalog of drugs, categories, severity levels, and pairwise drug interactions, kept in one JSON document."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Catalog file (default: RXCAT_DB or the platform data directory)
    #[arg(long, global = true, env = "RXCAT_DB")]
    pub db: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the catalog file with the default reference data
    Init(InitArgs),

    /// Drug management
    #[command(subcommand)]
    Drug(DrugCommands),

    /// Interaction management
    #[command(subcommand)]
    Interaction(InteractionCommands),

    /// Category management
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Severity level management
    #[command(subcommand)]
    Severity(SeverityCommands),

    /// Check a set of drugs for known interactions
    Check(CheckArgs),

    /// Show catalog counts
    Status(StatusArgs),

    /// Export the catalog as JSON
    Export(ExportArgs),

    /// Import a previously exported catalog (wholesale replace)
    Import(ImportArgs),

    /// Wipe the catalog back to the default reference data
    Reset(ResetArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context
    #[default]
    Auto,
    /// Tab-separated values (for piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Just ids, one per line
    Id,
}
