//! Tracker adapters for GitHub and GitLab
//!
//! Provides a unified interface for issue creation across tracker CLIs.

mod factory;
mod gh;
mod glab;

pub use factory::create_tracker;
pub use gh::GhTracker;
pub use glab::GlabTracker;

use crate::error::{Error, Result};
use crate::types::{CreatedIssue, SubmissionRecord, Tool};
use async_trait::async_trait;
use std::ffi::OsStr;
use tokio::process::Command;
use tracing::debug;

/// Tracker trait for issue operations
///
/// This trait abstracts the GitHub and GitLab CLIs, allowing the same
/// batch logic to work with either tracker.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Probe that the tracker CLI is installed, returning its raw
    /// version output
    async fn probe_version(&self) -> Result<String>;

    /// Probe that the tracker CLI is authenticated
    async fn probe_auth(&self) -> Result<()>;

    /// Create a single issue from a record
    async fn create_issue(&self, record: &SubmissionRecord) -> Result<CreatedIssue>;

    /// The tool this tracker drives
    fn tool(&self) -> Tool;
}

/// Collected output of one tracker CLI invocation
pub(crate) struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

/// Run the tracker CLI with the given arguments
///
/// A missing binary maps to [`Error::ToolMissing`] so callers can show
/// install instructions instead of a raw OS error.
pub(crate) async fn invoke<I, S>(tool: Tool, args: I) -> Result<CommandOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    debug!(tool = tool.command(), "Invoking tracker CLI");

    let output = Command::new(tool.command())
        .args(args)
        .output()
        .await
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::ToolMissing(tool.command().to_string())
            } else {
                Error::Spawn(tool.command().to_string(), e)
            }
        })?;

    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        success: output.status.success(),
    })
}

/// Parse the issue locator printed by a tracker CLI
///
/// Both `gh` and `glab` print the web URL of the new issue on stdout,
/// possibly after progress chatter. The issue number comes from the
/// last path segment when it parses as an integer.
pub(crate) fn parse_created_issue(stdout: &str) -> CreatedIssue {
    let url = stdout
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| line.starts_with("https://") || line.starts_with("http://"))
        .unwrap_or(stdout)
        .to_string();

    let number = url::Url::parse(&url).ok().and_then(|u| {
        u.path_segments()
            .and_then(|mut segments| segments.next_back().map(str::to_owned))
            .and_then(|segment| segment.parse().ok())
    });

    CreatedIssue { number, url }
}

/// Best error text from a failed tracker invocation
pub(crate) fn failure_detail(output: &CommandOutput) -> String {
    if !output.stderr.is_empty() {
        output.stderr.clone()
    } else if !output.stdout.is_empty() {
        output.stdout.clone()
    } else {
        "unknown error".to_string()
    }
}
