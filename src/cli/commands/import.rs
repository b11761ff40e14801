//! `rxcat import` command - Replace the catalog from an export file
//!
//! Import is wholesale: the incoming document replaces everything. The file
//! is rejected unless all four collections are present.

use console::style;
use dialoguer::Confirm;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::commands::open_store;
use crate::cli::GlobalOpts;
use crate::core::Collection;

#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    /// Exported catalog file to import
    pub file: PathBuf,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub fn run(args: ImportArgs, global: &GlobalOpts) -> Result<()> {
    let text = std::fs::read_to_string(&args.file)
        .map_err(|e| miette::miette!("Cannot read {}: {}", args.file.display(), e))?;

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt("Importing replaces the entire catalog. Continue?")
            .default(false)
            .interact()
            .into_diagnostic()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let store = open_store(global)?;
    let doc = store
        .import_json(&text)
        .map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Imported catalog from {}",
        style("✓").green(),
        style(args.file.display()).cyan()
    );
    for collection in Collection::ALL {
        println!("  {}: {}", collection.key(), doc.len(collection));
    }
    Ok(())
}
