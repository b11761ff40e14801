//! `rxcat init` command - Create the catalog file

use console::style;
use miette::Result;

use crate::cli::GlobalOpts;
use crate::core::{Config, FileBackend, Store};
use crate::entities::{DrugDraft, InteractionDraft};

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing catalog
    #[arg(long)]
    pub force: bool,

    /// Also load a small demonstration data set
    #[arg(long)]
    pub sample: bool,
}

pub fn run(args: InitArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let path = config.resolve_db_path(global.db.as_deref());

    if path.exists() && !args.force {
        println!(
            "{} Catalog already exists at {}",
            style("!").yellow(),
            style(path.display()).cyan()
        );
        println!();
        println!(
            "Use {} to start over with the default reference data",
            style("rxcat init --force").yellow()
        );
        return Ok(());
    }

    let store = Store::new(FileBackend::new(path.clone()));
    if path.exists() {
        store.reset().map_err(|e| miette::miette!("{}", e))?;
    } else {
        store.snapshot().map_err(|e| miette::miette!("{}", e))?;
    }

    if args.sample {
        load_sample_data(&store)?;
    }

    println!(
        "{} Initialized catalog at {}",
        style("✓").green(),
        style(path.display()).cyan()
    );
    println!();
    println!("Next steps:");
    println!("  {} Add a drug", style("rxcat drug add <name>").yellow());
    println!(
        "  {} Record an interaction",
        style("rxcat interaction add <drug-a> <drug-b>").yellow()
    );
    println!(
        "  {} Check a combination",
        style("rxcat check <drug-a> <drug-b>").yellow()
    );
    Ok(())
}

/// A handful of well-known drugs and interactions for trying the tool out.
fn load_sample_data(store: &Store<FileBackend>) -> Result<()> {
    let sample_drugs = [
        ("Warfarin", "Warfarin Sodium", "CAT005", "Anticoagulant"),
        ("Aspirin", "Acetylsalicylic Acid", "CAT002", "NSAID, antiplatelet"),
        ("Ibuprofen", "Ibuprofen", "CAT002", "NSAID"),
        ("Amoxicillin", "Amoxicillin", "CAT001", "Penicillin antibiotic"),
        (
            "Ciprofloxacin",
            "Ciprofloxacin",
            "CAT001",
            "Fluoroquinolone antibiotic",
        ),
        ("Fluoxetine", "Fluoxetine", "CAT003", "SSRI antidepressant"),
        ("Lisinopril", "Lisinopril", "CAT004", "ACE inhibitor"),
    ];

    let mut ids = std::collections::HashMap::new();
    for (name, generic_name, category, description) in sample_drugs {
        let drug = store
            .add_drug(DrugDraft {
                name: name.to_string(),
                generic_name: generic_name.to_string(),
                category: category.to_string(),
                description: description.to_string(),
                warnings: String::new(),
            })
            .map_err(|e| miette::miette!("{}", e))?;
        ids.insert(name, drug.id);
    }

    let sample_interactions = [
        (
            "Warfarin",
            "Aspirin",
            "SEV001",
            "Increased risk of bleeding",
            "Both drugs affect platelet function and coagulation",
            "Avoid concurrent use. Monitor for signs of bleeding.",
        ),
        (
            "Warfarin",
            "Ciprofloxacin",
            "SEV002",
            "Increased anticoagulant effect",
            "Ciprofloxacin may enhance the anticoagulant effect of warfarin",
            "Monitor INR closely during and after ciprofloxacin therapy",
        ),
        (
            "Aspirin",
            "Ibuprofen",
            "SEV002",
            "Reduced cardioprotective effect of aspirin",
            "Competitive inhibition of platelet COX-1",
            "Take ibuprofen at least 30 minutes after or 8 hours before aspirin",
        ),
    ];

    for (a, b, severity, description, mechanism, recommendations) in sample_interactions {
        store
            .add_interaction(InteractionDraft {
                drug_a_id: ids[a].clone(),
                drug_b_id: ids[b].clone(),
                severity: severity.to_string(),
                description: description.to_string(),
                mechanism: mechanism.to_string(),
                recommendations: recommendations.to_string(),
            })
            .map_err(|e| miette::miette!("{}", e))?;
    }

    println!(
        "{} Loaded {} sample drugs and {} sample interactions",
        style("✓").green(),
        sample_drugs.len(),
        sample_interactions.len()
    );
    Ok(())
}
