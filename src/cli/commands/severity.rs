//! `rxcat severity` command - Severity level management
//!
//! The severity set is closed reference data and rarely changes; deletion is
//! refused while any interaction still references the level.

use clap::Subcommand;
use console::style;
use dialoguer::Confirm;
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::open_store;
use crate::cli::helpers::{escape_csv, format_short_id, severity_badge, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::validate;
use crate::entities::{SeverityLevelDraft, SeverityLevelPatch};

#[derive(Subcommand, Debug)]
pub enum SeverityCommands {
    /// List severity levels with interaction counts
    List(ListArgs),

    /// Add a new severity level
    Add(AddArgs),

    /// Update fields of a severity level
    Update(UpdateArgs),

    /// Delete a severity level (refused while referenced)
    Delete(DeleteArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Show only count
    #[arg(long)]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Severity level name
    pub name: String,

    /// Display color hint (#rrggbb)
    #[arg(long, short = 'c', default_value = "")]
    pub color: String,

    /// Description
    #[arg(long, short = 'd', default_value = "")]
    pub description: String,
}

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// Severity level id
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New color hint
    #[arg(long)]
    pub color: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Severity level id
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub fn run(cmd: SeverityCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        SeverityCommands::List(args) => run_list(args, global),
        SeverityCommands::Add(args) => run_add(args, global),
        SeverityCommands::Update(args) => run_update(args, global),
        SeverityCommands::Delete(args) => run_delete(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let doc = store.snapshot().map_err(|e| miette::miette!("{}", e))?;

    if args.count {
        println!("{}", doc.severity_levels.len());
        return Ok(());
    }

    if doc.severity_levels.is_empty() {
        println!("No severity levels found.");
        return Ok(());
    }

    let format = match global.format {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&doc.severity_levels).into_diagnostic()?
            );
        }
        OutputFormat::Csv => {
            println!("id,name,color,description,interactions");
            for level in &doc.severity_levels {
                let interactions = doc
                    .interactions
                    .iter()
                    .filter(|i| i.severity == level.id)
                    .count();
                println!(
                    "{},{},{},{},{}",
                    level.id,
                    escape_csv(&level.name),
                    level.color,
                    escape_csv(&level.description),
                    interactions
                );
            }
        }
        OutputFormat::Id => {
            for level in &doc.severity_levels {
                println!("{}", level.id);
            }
        }
        OutputFormat::Tsv | OutputFormat::Auto => {
            println!(
                "{:<17} {:<12} {:<9} {:<35} {:>12}",
                style("ID").bold(),
                style("NAME").bold(),
                style("COLOR").bold(),
                style("DESCRIPTION").bold(),
                style("INTERACTIONS").bold()
            );
            println!("{}", "-".repeat(90));
            for level in &doc.severity_levels {
                let interactions = doc
                    .interactions
                    .iter()
                    .filter(|i| i.severity == level.id)
                    .count();
                println!(
                    "{:<17} {:<12} {:<9} {:<35} {:>12}",
                    style(format_short_id(&level.id)).cyan(),
                    severity_badge(&level.name),
                    level.color,
                    truncate_str(&level.description, 33),
                    interactions
                );
            }
            println!();
            println!(
                "{} severity level(s) found.",
                style(doc.severity_levels.len()).cyan()
            );
        }
    }
    Ok(())
}

fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let draft = SeverityLevelDraft {
        name: args.name.trim().to_string(),
        color: args.color.trim().to_string(),
        description: args.description.trim().to_string(),
    };
    validate::validate_severity_level(&draft).map_err(|e| miette::miette!("{}", e))?;

    let store = open_store(global)?;
    let level = store
        .add_severity_level(draft)
        .map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Added severity level {} ({})",
        style("✓").green(),
        style(&level.name).yellow(),
        style(&level.id).cyan()
    );
    Ok(())
}

fn run_update(args: UpdateArgs, global: &GlobalOpts) -> Result<()> {
    let patch = SeverityLevelPatch {
        name: args.name,
        color: args.color,
        description: args.description,
    };
    if patch.is_empty() {
        return Err(miette::miette!("Nothing to update: no fields given"));
    }
    if let Some(ref name) = patch.name {
        let draft = SeverityLevelDraft {
            name: name.clone(),
            ..Default::default()
        };
        validate::validate_severity_level(&draft).map_err(|e| miette::miette!("{}", e))?;
    }

    let store = open_store(global)?;
    let updated = store
        .update_severity_level(&args.id, patch)
        .map_err(|e| miette::miette!("{}", e))?;
    if !updated {
        return Err(miette::miette!("No severity level with id '{}'", args.id));
    }

    println!(
        "{} Updated severity level {}",
        style("✓").green(),
        style(&args.id).cyan()
    );
    Ok(())
}

fn run_delete(args: DeleteArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let doc = store.snapshot().map_err(|e| miette::miette!("{}", e))?;

    let Some(level) = doc.severity_by_id(&args.id) else {
        if !global.quiet {
            println!("No severity level with id '{}' (nothing to delete).", args.id);
        }
        return Ok(());
    };
    let name = level.name.clone();

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete severity level '{}'?", name))
            .default(false)
            .interact()
            .into_diagnostic()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    store
        .delete_severity_level(&args.id)
        .map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Deleted severity level {}",
        style("✓").green(),
        style(&name).yellow()
    );
    Ok(())
}
