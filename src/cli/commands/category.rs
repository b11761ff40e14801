//! `rxcat category` command - Category management

use clap::Subcommand;
use console::style;
use dialoguer::Confirm;
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::open_store;
use crate::cli::helpers::escape_csv;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::validate;
use crate::entities::{CategoryDraft, CategoryPatch};

#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List categories with drug counts
    List(ListArgs),

    /// Add a new category
    Add(AddArgs),

    /// Update fields of a category
    Update(UpdateArgs),

    /// Delete a category (referencing drugs become uncategorized)
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
    /// Category name
    pub name: String,

    /// Description
    #[arg(long, short = 'd', default_value = "")]
    pub description: String,
}

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// Category id
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Category id
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub fn run(cmd: CategoryCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        CategoryCommands::List(args) => run_list(args, global),
        CategoryCommands::Add(args) => run_add(args, global),
        CategoryCommands::Update(args) => run_update(args, global),
        CategoryCommands::Delete(args) => run_delete(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let doc = store.snapshot().map_err(|e| miette::miette!("{}", e))?;

    if args.count {
        println!("{}", doc.categories.len());
        return Ok(());
    }

    if doc.categories.is_empty() {
        println!("No categories found.");
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
                serde_json::to_string_pretty(&doc.categories).into_diagnostic()?
            );
        }
        OutputFormat::Csv => {
            println!("id,name,description,drugs");
            for category in &doc.categories {
                let drugs = doc.drugs.iter().filter(|d| d.category == category.id).count();
                println!(
                    "{},{},{},{}",
                    category.id,
                    escape_csv(&category.name),
                    escape_csv(&category.description),
                    drugs
                );
            }
        }
        OutputFormat::Id => {
            for category in &doc.categories {
                println!("{}", category.id);
            }
        }
        OutputFormat::Tsv | OutputFormat::Auto => {
            println!(
                "{:<17} {:<22} {:<40} {:>5}",
                style("ID").bold(),
                style("NAME").bold(),
                style("DESCRIPTION").bold(),
                style("DRUGS").bold()
            );
            println!("{}", "-".repeat(88));
            for category in &doc.categories {
                let drugs = doc.drugs.iter().filter(|d| d.category == category.id).count();
                println!(
                    "{:<17} {:<22} {:<40} {:>5}",
                    style(crate::cli::helpers::format_short_id(&category.id)).cyan(),
                    crate::cli::helpers::truncate_str(&category.name, 20),
                    crate::cli::helpers::truncate_str(&category.description, 38),
                    drugs
                );
            }
            println!();
            println!("{} category(ies) found.", style(doc.categories.len()).cyan());
        }
    }
    Ok(())
}

fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let draft = CategoryDraft {
        name: args.name.trim().to_string(),
        description: args.description.trim().to_string(),
    };
    validate::validate_category(&draft).map_err(|e| miette::miette!("{}", e))?;

    let store = open_store(global)?;
    let category = store
        .add_category(draft)
        .map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Added category {} ({})",
        style("✓").green(),
        style(&category.name).yellow(),
        style(&category.id).cyan()
    );
    Ok(())
}

fn run_update(args: UpdateArgs, global: &GlobalOpts) -> Result<()> {
    let patch = CategoryPatch {
        name: args.name,
        description: args.description,
    };
    if patch.is_empty() {
        return Err(miette::miette!("Nothing to update: no fields given"));
    }
    if let Some(ref name) = patch.name {
        let draft = CategoryDraft {
            name: name.clone(),
            description: String::new(),
        };
        validate::validate_category(&draft).map_err(|e| miette::miette!("{}", e))?;
    }

    let store = open_store(global)?;
    let updated = store
        .update_category(&args.id, patch)
        .map_err(|e| miette::miette!("{}", e))?;
    if !updated {
        return Err(miette::miette!("No category with id '{}'", args.id));
    }

    println!(
        "{} Updated category {}",
        style("✓").green(),
        style(&args.id).cyan()
    );
    Ok(())
}

fn run_delete(args: DeleteArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let doc = store.snapshot().map_err(|e| miette::miette!("{}", e))?;

    let Some(category) = doc.category_by_id(&args.id) else {
        if !global.quiet {
            println!("No category with id '{}' (nothing to delete).", args.id);
        }
        return Ok(());
    };
    let name = category.name.clone();
    let referencing = doc.drugs.iter().filter(|d| d.category == args.id).count();

    if !args.yes {
        let prompt = if referencing > 0 {
            format!(
                "Delete category '{}'? {} drug(s) will become uncategorized.",
                name, referencing
            )
        } else {
            format!("Delete category '{}'?", name)
        };
        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .into_diagnostic()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let orphaned = store
        .delete_category(&args.id)
        .map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Deleted category {}; {} drug(s) now uncategorized",
        style("✓").green(),
        style(&name).yellow(),
        orphaned
    );
    Ok(())
}
