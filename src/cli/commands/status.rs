//! `rxcat status` command - catalog dashboard counts

use console::style;
use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::commands::open_store;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Collection;

#[derive(clap::Args, Debug)]
pub struct StatusArgs {}

pub fn run(_args: StatusArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let doc = store.snapshot().map_err(|e| miette::miette!("{}", e))?;

    if global.format == OutputFormat::Json {
        let summary = serde_json::json!({
            "drugs": doc.len(Collection::Drugs),
            "interactions": doc.len(Collection::Interactions),
            "categories": doc.len(Collection::Categories),
            "severityLevels": doc.len(Collection::SeverityLevels),
        });
        println!("{}", serde_json::to_string_pretty(&summary).into_diagnostic()?);
        return Ok(());
    }

    println!("{}", style("Catalog status").bold());
    println!();

    let mut builder = Builder::default();
    builder.push_record(["Collection", "Records"]);
    for collection in Collection::ALL {
        builder.push_record([collection.key().to_string(), doc.len(collection).to_string()]);
    }
    println!("{}", builder.build().with(Style::rounded()));

    if !doc.interactions.is_empty() {
        println!();
        println!("{}", style("Interactions by severity").bold());
        let mut builder = Builder::default();
        builder.push_record(["Severity", "Interactions"]);
        for level in &doc.severity_levels {
            let count = doc
                .interactions
                .iter()
                .filter(|i| i.severity == level.id)
                .count();
            builder.push_record([level.name.clone(), count.to_string()]);
        }
        let dangling = doc
            .interactions
            .iter()
            .filter(|i| doc.severity_by_id(&i.severity).is_none())
            .count();
        if dangling > 0 {
            builder.push_record(["Unknown".to_string(), dangling.to_string()]);
        }
        println!("{}", builder.build().with(Style::rounded()));
    }

    Ok(())
}
