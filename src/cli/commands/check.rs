//! `rxcat check` command - the public interaction lookup
//!
//! Takes a set of drug names (or ids), resolves them against the catalog, and
//! prints every known interaction among them. Only stored interactions are
//! reported; absence of a result is not evidence of safety.

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::open_store;
use crate::cli::helpers::severity_badge;
use crate::cli::{GlobalOpts, OutputFormat};

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Drugs to check (ids or exact names; at least 2)
    #[arg(required = true, num_args = 2..)]
    pub drugs: Vec<String>,
}

pub fn run(args: CheckArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let doc = store.snapshot().map_err(|e| miette::miette!("{}", e))?;

    let mut drug_ids: Vec<&str> = Vec::new();
    let mut unknown: Vec<&str> = Vec::new();
    for reference in &args.drugs {
        match doc
            .drug_by_id(reference)
            .or_else(|| doc.drug_by_name(reference))
        {
            Some(drug) => {
                if !drug_ids.contains(&drug.id.as_str()) {
                    drug_ids.push(&drug.id);
                }
            }
            None => unknown.push(reference),
        }
    }

    if !unknown.is_empty() {
        return Err(miette::miette!(
            "Drug(s) not found in database: {}",
            unknown.join(", ")
        ));
    }
    if drug_ids.len() < 2 {
        return Err(miette::miette!("Please select at least 2 distinct drugs"));
    }

    let interactions = doc.interactions_among(&drug_ids);

    if global.format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(&interactions).into_diagnostic()?
        );
        return Ok(());
    }

    if interactions.is_empty() {
        println!("{}", style("No Interactions Found").bold());
        println!("No known interactions between the selected drugs were found in the database.");
        println!(
            "{}",
            style("Note: this doesn't guarantee safety. Always consult with healthcare professionals.")
                .dim()
        );
        return Ok(());
    }

    if !global.quiet {
        println!(
            "{} interaction(s) among {} drug(s):",
            style(interactions.len()).cyan(),
            drug_ids.len()
        );
        println!();
    }

    for interaction in interactions {
        let name_a = doc
            .drug_by_id(&interaction.drug_a_id)
            .map(|d| d.name.as_str())
            .unwrap_or("Unknown");
        let name_b = doc
            .drug_by_id(&interaction.drug_b_id)
            .map(|d| d.name.as_str())
            .unwrap_or("Unknown");

        println!(
            "{} {} + {}",
            severity_badge(doc.severity_name(&interaction.severity)),
            style(name_a).bold(),
            style(name_b).bold()
        );
        println!("  {}", interaction.description);
        if !interaction.mechanism.is_empty() {
            println!("  Mechanism: {}", interaction.mechanism);
        }
        if !interaction.recommendations.is_empty() {
            println!("  Recommendation: {}", interaction.recommendations);
        }
        println!();
    }

    if !global.quiet {
        println!(
            "{}",
            style("Always consult with healthcare professionals before making medication decisions.")
                .dim()
        );
    }

    Ok(())
}
