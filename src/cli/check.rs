//! Check command - verify tracker preconditions without submitting

use crate::cli::run::report_env_error;
use crate::cli::style::{check, spinner_style, Stylize};
use anstream::println;
use indicatif::ProgressBar;
use issue_seeder::preflight::run_preflight;
use issue_seeder::tracker::create_tracker;
use issue_seeder::types::Tool;
use std::process::ExitCode;
use std::time::Duration;

/// Run the check command
///
/// Runs the same probes the run command gates on, reports the outcome,
/// and exits. No catalog is read and nothing is submitted.
pub async fn run_check(tool: Tool) -> ExitCode {
    let tracker = create_tracker(tool);

    let spinner = ProgressBar::new_spinner().with_style(spinner_style());
    spinner.set_message(format!("Checking {tool}..."));
    spinner.enable_steady_tick(Duration::from_millis(80));
    let outcome = run_preflight(tracker.as_ref()).await;
    spinner.finish_and_clear();

    match outcome {
        Ok(report) => {
            println!("{} {} {}", check(), tool.accent(), report.tool_version);
            println!("{} authenticated", check());
            println!();
            println!("Ready to submit: {}", "seeder run".accent());
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_env_error(&e, tool);
            ExitCode::FAILURE
        }
    }
}
