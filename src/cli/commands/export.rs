//! `rxcat export` command - Dump the catalog as JSON

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::commands::open_store;
use crate::cli::GlobalOpts;

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Write to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: ExportArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let json = store.export_json().map_err(|e| miette::miette!("{}", e))?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &json).into_diagnostic()?;
            if !global.quiet {
                println!(
                    "{} Exported catalog to {}",
                    style("✓").green(),
                    style(path.display()).cyan()
                );
            }
        }
        None => {
            println!("{}", json);
        }
    }
    Ok(())
}
