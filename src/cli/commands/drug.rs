//! `rxcat drug` command - Drug management

use clap::{Subcommand, ValueEnum};
use console::style;
use dialoguer::Confirm;
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::open_store;
use crate::cli::helpers::{escape_csv, format_short_id, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::validate;
use crate::entities::{Drug, DrugDraft, DrugPatch, DrugStatus};

/// Minimum query length for substring search
const MIN_SEARCH_LEN: usize = 2;

#[derive(Subcommand, Debug)]
pub enum DrugCommands {
    /// List drugs with filtering
    List(ListArgs),

    /// Add a new drug
    Add(AddArgs),

    /// Show a drug's details
    Show(ShowArgs),

    /// Update fields of a drug
    Update(UpdateArgs),

    /// Delete a drug (cascades to its interactions)
    Delete(DeleteArgs),

    /// Search drugs by name or generic name substring
    Search(SearchArgs),
}

/// Status filter
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusFilter {
    Active,
    Inactive,
    /// All statuses
    All,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by status
    #[arg(long, short = 's', default_value = "all")]
    pub status: StatusFilter,

    /// Filter by category id
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Search in name and generic name
    #[arg(long)]
    pub search: Option<String>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Drug name
    pub name: String,

    /// Generic (nonproprietary) name
    #[arg(long, short = 'g', default_value = "")]
    pub generic: String,

    /// Category id
    #[arg(long, short = 'c', default_value = "")]
    pub category: String,

    /// Description
    #[arg(long, short = 'd', default_value = "")]
    pub description: String,

    /// Warnings and contraindications
    #[arg(long, short = 'w', default_value = "")]
    pub warnings: String,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Drug id or exact name
    pub drug: String,
}

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// Drug id
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New generic name
    #[arg(long)]
    pub generic: Option<String>,

    /// New category id (empty string clears it)
    #[arg(long)]
    pub category: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New warnings
    #[arg(long)]
    pub warnings: Option<String>,

    /// New status (active or inactive)
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Drug id
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Search term (at least 2 characters)
    pub query: String,
}

pub fn run(cmd: DrugCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        DrugCommands::List(args) => run_list(args, global),
        DrugCommands::Add(args) => run_add(args, global),
        DrugCommands::Show(args) => run_show(args, global),
        DrugCommands::Update(args) => run_update(args, global),
        DrugCommands::Delete(args) => run_delete(args, global),
        DrugCommands::Search(args) => run_search(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let doc = store.snapshot().map_err(|e| miette::miette!("{}", e))?;

    let drugs: Vec<&Drug> = doc
        .drugs
        .iter()
        .filter(|d| match args.status {
            StatusFilter::Active => d.status == DrugStatus::Active,
            StatusFilter::Inactive => d.status == DrugStatus::Inactive,
            StatusFilter::All => true,
        })
        .filter(|d| {
            args.category
                .as_ref()
                .map_or(true, |category| d.category == *category)
        })
        .filter(|d| {
            if let Some(ref search) = args.search {
                let term = search.to_lowercase();
                d.name.to_lowercase().contains(&term)
                    || d.generic_name.to_lowercase().contains(&term)
            } else {
                true
            }
        })
        .collect();

    if args.count {
        println!("{}", drugs.len());
        return Ok(());
    }

    if drugs.is_empty() {
        println!("No drugs found.");
        return Ok(());
    }

    print_drug_table(&drugs, &doc, global.format);
    Ok(())
}

fn print_drug_table(drugs: &[&Drug], doc: &crate::core::Document, format: OutputFormat) {
    let format = match format {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(drugs).unwrap_or_else(|_| "[]".to_string())
            );
        }
        OutputFormat::Csv => {
            println!("id,name,generic_name,category,status");
            for drug in drugs {
                println!(
                    "{},{},{},{},{}",
                    drug.id,
                    escape_csv(&drug.name),
                    escape_csv(&drug.generic_name),
                    escape_csv(doc.category_name(&drug.category)),
                    drug.status
                );
            }
        }
        OutputFormat::Id => {
            for drug in drugs {
                println!("{}", drug.id);
            }
        }
        OutputFormat::Tsv | OutputFormat::Auto => {
            println!(
                "{:<17} {:<25} {:<25} {:<18} {:<8}",
                style("ID").bold(),
                style("NAME").bold(),
                style("GENERIC").bold(),
                style("CATEGORY").bold(),
                style("STATUS").bold()
            );
            println!("{}", "-".repeat(95));
            for drug in drugs {
                println!(
                    "{:<17} {:<25} {:<25} {:<18} {:<8}",
                    style(format_short_id(&drug.id)).cyan(),
                    truncate_str(&drug.name, 23),
                    truncate_str(&drug.generic_name, 23),
                    truncate_str(doc.category_name(&drug.category), 16),
                    drug.status
                );
            }
            println!();
            println!("{} drug(s) found.", style(drugs.len()).cyan());
        }
    }
}

fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let draft = DrugDraft {
        name: args.name.trim().to_string(),
        generic_name: args.generic.trim().to_string(),
        category: args.category.trim().to_string(),
        description: args.description.trim().to_string(),
        warnings: args.warnings.trim().to_string(),
    };
    validate::validate_drug(&draft).map_err(|e| miette::miette!("{}", e))?;

    let store = open_store(global)?;
    let drug = store.add_drug(draft).map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Added drug {} ({})",
        style("✓").green(),
        style(&drug.name).yellow(),
        style(&drug.id).cyan()
    );
    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let doc = store.snapshot().map_err(|e| miette::miette!("{}", e))?;

    let drug = doc
        .drug_by_id(&args.drug)
        .or_else(|| doc.drug_by_name(&args.drug))
        .ok_or_else(|| miette::miette!("No drug matching '{}'", args.drug))?;

    if global.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(drug).into_diagnostic()?);
        return Ok(());
    }

    println!("{}", style(&drug.name).bold());
    if !drug.generic_name.is_empty() {
        println!("  Generic:     {}", drug.generic_name);
    }
    println!("  Id:          {}", style(&drug.id).cyan());
    println!("  Category:    {}", doc.category_name(&drug.category));
    println!("  Status:      {}", drug.status);
    if !drug.description.is_empty() {
        println!("  Description: {}", drug.description);
    }
    if !drug.warnings.is_empty() {
        println!("  Warnings:    {}", style(&drug.warnings).red());
    }
    println!("  Created:     {}", drug.created_at.format("%Y-%m-%d"));
    if let Some(updated) = drug.updated_at {
        println!("  Updated:     {}", updated.format("%Y-%m-%d"));
    }

    let interactions = doc.interactions_for_drug(&drug.id);
    println!("  Interactions: {}", interactions.len());
    for interaction in interactions {
        let other = if interaction.drug_a_id == drug.id {
            &interaction.drug_b_id
        } else {
            &interaction.drug_a_id
        };
        let other_name = doc
            .drug_by_id(other)
            .map(|d| d.name.as_str())
            .unwrap_or("Unknown");
        println!(
            "    {} {} - {}",
            crate::cli::helpers::severity_badge(doc.severity_name(&interaction.severity)),
            other_name,
            truncate_str(&interaction.description, 50)
        );
    }
    Ok(())
}

fn run_update(args: UpdateArgs, global: &GlobalOpts) -> Result<()> {
    let status = args
        .status
        .map(|s| s.parse::<DrugStatus>())
        .transpose()
        .map_err(|e| miette::miette!("{}", e))?;
    let patch = DrugPatch {
        name: args.name,
        generic_name: args.generic,
        category: args.category,
        description: args.description,
        warnings: args.warnings,
        status,
    };
    if patch.is_empty() {
        return Err(miette::miette!("Nothing to update: no fields given"));
    }

    let store = open_store(global)?;
    let doc = store.snapshot().map_err(|e| miette::miette!("{}", e))?;

    // Validate the record as it would look after the patch
    let current = doc
        .drug_by_id(&args.id)
        .ok_or_else(|| miette::miette!("No drug with id '{}'", args.id))?;
    let draft = DrugDraft {
        name: patch.name.clone().unwrap_or_else(|| current.name.clone()),
        ..Default::default()
    };
    validate::validate_drug(&draft).map_err(|e| miette::miette!("{}", e))?;

    let updated = store
        .update_drug(&args.id, patch)
        .map_err(|e| miette::miette!("{}", e))?;
    if !updated {
        return Err(miette::miette!("No drug with id '{}'", args.id));
    }

    println!(
        "{} Updated drug {}",
        style("✓").green(),
        style(&args.id).cyan()
    );
    Ok(())
}

fn run_delete(args: DeleteArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let doc = store.snapshot().map_err(|e| miette::miette!("{}", e))?;

    let Some(drug) = doc.drug_by_id(&args.id) else {
        // Idempotent: deleting a nonexistent id is a successful no-op
        if !global.quiet {
            println!("No drug with id '{}' (nothing to delete).", args.id);
        }
        return Ok(());
    };
    let name = drug.name.clone();
    let touching = doc.interactions_for_drug(&args.id).len();

    if !args.yes {
        let prompt = if touching > 0 {
            format!(
                "Delete drug '{}' and its {} interaction(s)?",
                name, touching
            )
        } else {
            format!("Delete drug '{}'?", name)
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

    let cascaded = store
        .delete_drug(&args.id)
        .map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Deleted drug {} and {} interaction(s)",
        style("✓").green(),
        style(&name).yellow(),
        cascaded
    );
    Ok(())
}

fn run_search(args: SearchArgs, global: &GlobalOpts) -> Result<()> {
    let query = args.query.trim();
    if query.len() < MIN_SEARCH_LEN {
        return Err(miette::miette!(
            "Search term must be at least {} characters",
            MIN_SEARCH_LEN
        ));
    }

    let store = open_store(global)?;
    let doc = store.snapshot().map_err(|e| miette::miette!("{}", e))?;
    let results = doc.search_drugs(query);

    if results.is_empty() {
        println!("No drugs found for '{}'.", style(query).yellow());
        return Ok(());
    }

    if !global.quiet {
        println!(
            "{} result(s) for '{}':",
            style(results.len()).cyan(),
            style(query).yellow()
        );
        println!();
    }
    print_drug_table(&results, &doc, global.format);
    Ok(())
}
