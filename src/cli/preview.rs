//! Default preview command - show the catalog without submitting

use crate::cli::style::{bullet, Stylize};
use anstream::println;
use issue_seeder::catalog::{duplicate_titles, group_breakdown, load_catalog};
use issue_seeder::error::Result;
use std::path::Path;

/// Run the preview command (default when no subcommand given)
///
/// Prints the catalog grouped the way the confirmation breakdown groups
/// it. Nothing is probed and nothing is submitted.
pub fn run_preview(catalog_path: &Path) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;

    if let Some(name) = &catalog.project.name {
        println!("{}", name.emphasis());
        println!();
    }

    if catalog.issues.is_empty() {
        println!("{}", "Catalog is empty".muted());
        println!();
        println!(
            "{}",
            format!("Add [[issues]] entries to {}", catalog_path.display()).muted()
        );
        return Ok(());
    }

    let breakdown = group_breakdown(&catalog);
    for (group, _) in &breakdown {
        println!("{}", group.emphasis());
        for record in catalog
            .issues
            .iter()
            .filter(|r| r.group.as_deref().unwrap_or("ungrouped") == group.as_str())
        {
            println!("  {} {}", bullet(), record.title);
            if !record.labels.is_empty() {
                println!(
                    "      {}",
                    format!("labels: {}", record.labels.join(", ")).muted()
                );
            }
            if let Some(milestone) = &record.milestone {
                println!("      {}", format!("milestone: {milestone}").muted());
            }
        }
        println!();
    }

    let duplicates = duplicate_titles(&catalog);
    for title in &duplicates {
        println!(
            "{}",
            format!("Warning: duplicate title \"{title}\"")
                .warn()
                .for_stdout()
        );
    }
    if !duplicates.is_empty() {
        println!();
    }

    let total = catalog.issues.len();
    println!(
        "{} issue{} in {} group{}",
        total.accent(),
        if total == 1 { "" } else { "s" },
        breakdown.len().accent(),
        if breakdown.len() == 1 { "" } else { "s" }
    );
    println!();
    println!(
        "To submit: {}",
        format!("seeder run --catalog {}", catalog_path.display()).accent()
    );

    Ok(())
}
