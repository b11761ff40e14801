//! `rxcat reset` command - Wipe the catalog back to the default reference data

use console::style;
use dialoguer::Confirm;
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::open_store;
use crate::cli::GlobalOpts;

#[derive(clap::Args, Debug)]
pub struct ResetArgs {
    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub fn run(args: ResetArgs, global: &GlobalOpts) -> Result<()> {
    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete all drugs and interactions and restore the default reference data?")
            .default(false)
            .interact()
            .into_diagnostic()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let store = open_store(global)?;
    store.reset().map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Catalog reset to the default reference data",
        style("✓").green()
    );
    Ok(())
}
