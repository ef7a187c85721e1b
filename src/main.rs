//! seeder - batch issue creation from a declarative catalog
//!
//! CLI binary for submitting issue catalogs through `gh` or `glab`.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use issue_seeder::types::Tool;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;

#[derive(Parser)]
#[command(name = "seeder")]
#[command(about = "Batch issue creation for GitHub and GitLab trackers")]
#[command(version)]
struct Cli {
    /// Path to the issue catalog (TOML or JSON)
    #[arg(short, long, global = true, default_value = "issues.toml")]
    catalog: PathBuf,

    /// Tracker CLI to submit through
    #[arg(short, long, global = true, value_enum, default_value = "gh")]
    tool: ToolArg,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ToolArg {
    /// GitHub CLI (gh)
    Gh,
    /// GitLab CLI (glab)
    Glab,
}

impl From<ToolArg> for Tool {
    fn from(arg: ToolArg) -> Self {
        match arg {
            ToolArg::Gh => Self::Gh,
            ToolArg::Glab => Self::Glab,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Submit the catalog to the tracker
    Run {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,

        /// Dry run - list what would be submitted without creating anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the catalog without submitting
    Preview,

    /// Verify the tracker CLI is installed and authenticated
    Check,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match dispatch(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn dispatch(cli: Cli) -> Result<ExitCode> {
    let tool = Tool::from(cli.tool);

    match cli.command {
        None | Some(Commands::Preview) => {
            cli::run_preview(&cli.catalog)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Run { yes, dry_run }) => {
            Ok(cli::run_run(&cli.catalog, tool, yes, dry_run).await?)
        }
        Some(Commands::Check) => Ok(cli::run_check(tool).await),
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}
