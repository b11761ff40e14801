//! `rxcat interaction` command - Interaction management

use clap::Subcommand;
use console::style;
use dialoguer::Confirm;
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::open_store;
use crate::cli::helpers::{escape_csv, format_short_id, severity_badge, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::validate;
use crate::core::Document;
use crate::entities::{Interaction, InteractionDraft, InteractionPatch};

#[derive(Subcommand, Debug)]
pub enum InteractionCommands {
    /// List interactions with filtering
    List(ListArgs),

    /// Record a new interaction between two drugs
    Add(AddArgs),

    /// Show an interaction's details
    Show(ShowArgs),

    /// Update fields of an interaction
    Update(UpdateArgs),

    /// Delete an interaction
    Delete(DeleteArgs),

    /// Look up the interaction between two drugs (order-independent)
    Between(BetweenArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by severity level id
    #[arg(long, short = 's')]
    pub severity: Option<String>,

    /// Filter by drug (id or exact name, either endpoint)
    #[arg(long, short = 'd')]
    pub drug: Option<String>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// First drug (id or exact name)
    pub drug_a: String,

    /// Second drug (id or exact name)
    pub drug_b: String,

    /// Severity level (id or name)
    #[arg(long, short = 's')]
    pub severity: String,

    /// Clinical description (at least 10 characters)
    #[arg(long, short = 'd')]
    pub description: String,

    /// Pharmacological mechanism
    #[arg(long, short = 'm', default_value = "")]
    pub mechanism: String,

    /// Clinical recommendations
    #[arg(long, short = 'r', default_value = "")]
    pub recommendations: String,

    /// Record even if the pair already has an interaction
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Interaction id
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// Interaction id
    pub id: String,

    /// New severity level (id or name)
    #[arg(long)]
    pub severity: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New mechanism
    #[arg(long)]
    pub mechanism: Option<String>,

    /// New recommendations
    #[arg(long)]
    pub recommendations: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Interaction id
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(clap::Args, Debug)]
pub struct BetweenArgs {
    /// First drug (id or exact name)
    pub drug_a: String,

    /// Second drug (id or exact name)
    pub drug_b: String,
}

pub fn run(cmd: InteractionCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        InteractionCommands::List(args) => run_list(args, global),
        InteractionCommands::Add(args) => run_add(args, global),
        InteractionCommands::Show(args) => run_show(args, global),
        InteractionCommands::Update(args) => run_update(args, global),
        InteractionCommands::Delete(args) => run_delete(args, global),
        InteractionCommands::Between(args) => run_between(args, global),
    }
}

/// Resolve a drug reference (id or exact name) to its id
fn resolve_drug_id(doc: &Document, reference: &str) -> Result<String> {
    doc.drug_by_id(reference)
        .or_else(|| doc.drug_by_name(reference))
        .map(|d| d.id.clone())
        .ok_or_else(|| miette::miette!("Drug \"{}\" not found in database", reference))
}

/// Resolve a severity reference (id or name) to its id
fn resolve_severity_id(doc: &Document, reference: &str) -> Result<String> {
    doc.severity_by_id(reference)
        .map(|s| s.id.clone())
        .or_else(|| {
            doc.severity_levels
                .iter()
                .find(|s| s.name.eq_ignore_ascii_case(reference))
                .map(|s| s.id.clone())
        })
        .ok_or_else(|| miette::miette!("Unknown severity level '{}'", reference))
}

fn pair_label(doc: &Document, interaction: &Interaction) -> String {
    let a = doc
        .drug_by_id(&interaction.drug_a_id)
        .map(|d| d.name.as_str())
        .unwrap_or("Unknown");
    let b = doc
        .drug_by_id(&interaction.drug_b_id)
        .map(|d| d.name.as_str())
        .unwrap_or("Unknown");
    format!("{} + {}", a, b)
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let doc = store.snapshot().map_err(|e| miette::miette!("{}", e))?;

    let drug_id = match args.drug {
        Some(ref reference) => Some(resolve_drug_id(&doc, reference)?),
        None => None,
    };

    let interactions: Vec<&Interaction> = doc
        .interactions
        .iter()
        .filter(|i| {
            args.severity
                .as_ref()
                .map_or(true, |severity| i.severity == *severity)
        })
        .filter(|i| drug_id.as_ref().map_or(true, |id| i.involves(id)))
        .collect();

    if args.count {
        println!("{}", interactions.len());
        return Ok(());
    }

    if interactions.is_empty() {
        println!("No interactions found.");
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
                serde_json::to_string_pretty(&interactions).into_diagnostic()?
            );
        }
        OutputFormat::Csv => {
            println!("id,drug_a,drug_b,severity,description");
            for interaction in &interactions {
                println!(
                    "{},{},{},{},{}",
                    interaction.id,
                    interaction.drug_a_id,
                    interaction.drug_b_id,
                    escape_csv(doc.severity_name(&interaction.severity)),
                    escape_csv(&interaction.description)
                );
            }
        }
        OutputFormat::Id => {
            for interaction in &interactions {
                println!("{}", interaction.id);
            }
        }
        OutputFormat::Tsv | OutputFormat::Auto => {
            println!(
                "{:<17} {:<40} {:<10} {:<30}",
                style("ID").bold(),
                style("DRUGS").bold(),
                style("SEVERITY").bold(),
                style("DESCRIPTION").bold()
            );
            println!("{}", "-".repeat(99));
            for interaction in &interactions {
                println!(
                    "{:<17} {:<40} {:<10} {:<30}",
                    style(format_short_id(&interaction.id)).cyan(),
                    truncate_str(&pair_label(&doc, interaction), 38),
                    severity_badge(doc.severity_name(&interaction.severity)),
                    truncate_str(&interaction.description, 28)
                );
            }
            println!();
            println!("{} interaction(s) found.", style(interactions.len()).cyan());
        }
    }

    Ok(())
}

fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let doc = store.snapshot().map_err(|e| miette::miette!("{}", e))?;

    let drug_a_id = resolve_drug_id(&doc, &args.drug_a)?;
    let drug_b_id = resolve_drug_id(&doc, &args.drug_b)?;
    let severity = resolve_severity_id(&doc, &args.severity)?;

    let draft = InteractionDraft {
        drug_a_id: drug_a_id.clone(),
        drug_b_id: drug_b_id.clone(),
        severity,
        description: args.description.trim().to_string(),
        mechanism: args.mechanism.trim().to_string(),
        recommendations: args.recommendations.trim().to_string(),
    };
    validate::validate_interaction(&draft).map_err(|e| miette::miette!("{}", e))?;

    // The store tolerates duplicate pairs; refusing them is our call here
    if !args.force {
        if let Some(existing) = doc.interaction_between(&drug_a_id, &drug_b_id) {
            return Err(miette::miette!(
                "An interaction between these drugs already exists ({}). Use --force to record another.",
                existing.id
            ));
        }
    }

    let interaction = store
        .add_interaction(draft)
        .map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Recorded interaction {} ({})",
        style("✓").green(),
        style(pair_label(&doc, &interaction)).yellow(),
        style(&interaction.id).cyan()
    );
    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let doc = store.snapshot().map_err(|e| miette::miette!("{}", e))?;

    let interaction = doc
        .interaction_by_id(&args.id)
        .ok_or_else(|| miette::miette!("No interaction with id '{}'", args.id))?;

    if global.format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(interaction).into_diagnostic()?
        );
        return Ok(());
    }

    println!("{}", style(pair_label(&doc, interaction)).bold());
    println!("  Id:          {}", style(&interaction.id).cyan());
    println!(
        "  Severity:    {}",
        severity_badge(doc.severity_name(&interaction.severity))
    );
    println!("  Description: {}", interaction.description);
    if !interaction.mechanism.is_empty() {
        println!("  Mechanism:   {}", interaction.mechanism);
    }
    if !interaction.recommendations.is_empty() {
        println!("  Recommends:  {}", interaction.recommendations);
    }
    println!(
        "  Created:     {}",
        interaction.created_at.format("%Y-%m-%d")
    );
    if let Some(updated) = interaction.updated_at {
        println!("  Updated:     {}", updated.format("%Y-%m-%d"));
    }
    Ok(())
}

fn run_update(args: UpdateArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let doc = store.snapshot().map_err(|e| miette::miette!("{}", e))?;

    let current = doc
        .interaction_by_id(&args.id)
        .ok_or_else(|| miette::miette!("No interaction with id '{}'", args.id))?;

    let severity = match args.severity {
        Some(ref reference) => Some(resolve_severity_id(&doc, reference)?),
        None => None,
    };
    let patch = InteractionPatch {
        severity,
        description: args.description,
        mechanism: args.mechanism,
        recommendations: args.recommendations,
        ..Default::default()
    };
    if patch.is_empty() {
        return Err(miette::miette!("Nothing to update: no fields given"));
    }

    // Validate the record as it would look after the patch
    let draft = InteractionDraft {
        drug_a_id: current.drug_a_id.clone(),
        drug_b_id: current.drug_b_id.clone(),
        severity: patch
            .severity
            .clone()
            .unwrap_or_else(|| current.severity.clone()),
        description: patch
            .description
            .clone()
            .unwrap_or_else(|| current.description.clone()),
        ..Default::default()
    };
    validate::validate_interaction(&draft).map_err(|e| miette::miette!("{}", e))?;

    let updated = store
        .update_interaction(&args.id, patch)
        .map_err(|e| miette::miette!("{}", e))?;
    if !updated {
        return Err(miette::miette!("No interaction with id '{}'", args.id));
    }

    println!(
        "{} Updated interaction {}",
        style("✓").green(),
        style(&args.id).cyan()
    );
    Ok(())
}

fn run_delete(args: DeleteArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let doc = store.snapshot().map_err(|e| miette::miette!("{}", e))?;

    let Some(interaction) = doc.interaction_by_id(&args.id) else {
        if !global.quiet {
            println!("No interaction with id '{}' (nothing to delete).", args.id);
        }
        return Ok(());
    };
    let label = pair_label(&doc, interaction);

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete interaction '{}'?", label))
            .default(false)
            .interact()
            .into_diagnostic()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    store
        .delete_interaction(&args.id)
        .map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Deleted interaction {}",
        style("✓").green(),
        style(label).yellow()
    );
    Ok(())
}

fn run_between(args: BetweenArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let doc = store.snapshot().map_err(|e| miette::miette!("{}", e))?;

    let drug_a_id = resolve_drug_id(&doc, &args.drug_a)?;
    let drug_b_id = resolve_drug_id(&doc, &args.drug_b)?;

    match doc.interaction_between(&drug_a_id, &drug_b_id) {
        Some(interaction) => run_show(
            ShowArgs {
                id: interaction.id.clone(),
            },
            global,
        ),
        None => {
            println!(
                "No known interaction between {} and {}.",
                style(&args.drug_a).yellow(),
                style(&args.drug_b).yellow()
            );
            Ok(())
        }
    }
}
