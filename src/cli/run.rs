//! Run command - submit the catalog after preflight and confirmation

use crate::cli::progress::CliProgress;
use crate::cli::style::{bullet, check, cross, spinner_style, Stylize};
use anstream::{eprintln, println};
use dialoguer::Confirm;
use indicatif::ProgressBar;
use issue_seeder::catalog::{group_breakdown, load_catalog};
use issue_seeder::error::{Error, Result};
use issue_seeder::preflight::{check_marker, run_preflight};
use issue_seeder::run::{execute_batch, RunSummary};
use issue_seeder::tracker::create_tracker;
use issue_seeder::types::Tool;
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

/// Run the run command
///
/// Preflight, confirmation, batch submission, summary. The exit code is
/// nonzero when preconditions fail or any record fails; a declined
/// confirmation exits zero.
#[allow(clippy::too_many_lines)]
pub async fn run_run(
    catalog_path: &Path,
    tool: Tool,
    yes: bool,
    dry_run: bool,
) -> Result<ExitCode> {
    let catalog = load_catalog(catalog_path)?;
    let tracker = create_tracker(tool);

    if let Some(name) = &catalog.project.name {
        println!("{}", name.emphasis());
        println!();
    }

    // Wrong-directory guard before anything talks to the tracker
    if let Some(marker) = &catalog.project.marker {
        if let Err(e) = check_marker(Path::new("."), marker) {
            report_env_error(&e, tool);
            return Ok(ExitCode::FAILURE);
        }
    }

    let spinner = ProgressBar::new_spinner().with_style(spinner_style());
    spinner.set_message(format!("Checking {tool}..."));
    spinner.enable_steady_tick(Duration::from_millis(80));
    let preflight = run_preflight(tracker.as_ref()).await;
    spinner.finish_and_clear();

    let report = match preflight {
        Ok(report) => report,
        Err(e) => {
            report_env_error(&e, tool);
            return Ok(ExitCode::FAILURE);
        }
    };
    println!("{} {} {}", check(), tool.accent(), report.tool_version);
    println!();

    let total = catalog.issues.len();
    println!(
        "Found {} issue{} to create",
        total.accent(),
        if total == 1 { "" } else { "s" }
    );

    let breakdown = group_breakdown(&catalog);
    if !breakdown.is_empty() {
        println!();
        println!("Issues breakdown:");
        for (group, count) in &breakdown {
            println!(
                "  {} {}: {} issue{}",
                bullet(),
                group.accent(),
                count,
                if *count == 1 { "" } else { "s" }
            );
        }
    }
    println!();

    // Nothing to confirm for an empty catalog or a dry run
    let confirmed = yes || dry_run || catalog.issues.is_empty() || ask_confirmation();
    if !confirmed {
        println!("Cancelled.");
        return Ok(ExitCode::SUCCESS);
    }

    let progress = CliProgress::new(total);
    let summary = execute_batch(&catalog.issues, tracker.as_ref(), &progress, dry_run).await;

    if dry_run {
        return Ok(ExitCode::SUCCESS);
    }

    // Summary
    println!();
    println!(
        "Summary: {}/{} issues created successfully",
        summary.succeeded().accent(),
        summary.total.accent()
    );
    println!("{}", format!("Elapsed: {}", format_elapsed(&summary)).muted());
    println!();
    println!("Next steps:");
    println!("  1. Review issues on {}", tool.tracker_name());
    println!("  2. Assign issues to team members");
    println!("  3. Add issues to project boards");

    Ok(if summary.has_failures() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Ask the operator to confirm the batch
///
/// Without a terminal the prompt cannot be served, which counts as a
/// declined confirmation.
fn ask_confirmation() -> bool {
    match Confirm::new()
        .with_prompt("Create these issues?")
        .default(false)
        .interact()
    {
        Ok(answer) => answer,
        Err(_) => {
            eprintln!("No terminal for confirmation, pass --yes to submit without a prompt");
            false
        }
    }
}

/// Print an environment error with its remediation hint
pub(super) fn report_env_error(err: &Error, tool: Tool) {
    eprintln!("{} {err}", cross());
    match err {
        Error::ToolMissing(_) => eprintln!("  Install from: {}", tool.install_url()),
        Error::NotAuthenticated(_) => eprintln!("  Run: {}", tool.login_hint()),
        Error::MarkerMissing(_) => eprintln!("  Run this command from the repository root."),
        _ => {}
    }
}

fn format_elapsed(summary: &RunSummary) -> String {
    let ms = summary.elapsed().num_milliseconds();
    format!("{}.{}s", ms / 1000, (ms % 1000) / 100)
}
