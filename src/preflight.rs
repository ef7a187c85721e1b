//! Environment preflight checks
//!
//! Verifies the tracker CLI and the working directory before anything
//! is submitted.

use crate::error::{Error, Result};
use crate::tracker::IssueTracker;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Result of the tracker probes
#[derive(Debug, Clone)]
pub struct PreflightReport {
    /// Version reported by the tracker CLI
    pub tool_version: String,
}

/// Run the tracker probes: version first (tool presence), then auth
pub async fn run_preflight(tracker: &dyn IssueTracker) -> Result<PreflightReport> {
    let raw = tracker.probe_version().await?;
    tracker.probe_auth().await?;

    Ok(PreflightReport {
        tool_version: extract_version(&raw),
    })
}

/// Verify the project marker exists under `dir`
///
/// The marker may be a file or a directory; only presence matters.
pub fn check_marker(dir: &Path, marker: &str) -> Result<()> {
    if dir.join(marker).exists() {
        Ok(())
    } else {
        Err(Error::MarkerMissing(marker.to_string()))
    }
}

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"\d+\.\d+\.\d+").expect("hardcoded version pattern is valid"))
}

/// Pull a dotted version out of raw `--version` output
///
/// Falls back to the first line when no version-looking token is found.
pub fn extract_version(raw: &str) -> String {
    version_pattern().find(raw).map_or_else(
        || raw.lines().next().unwrap_or_default().trim().to_string(),
        |m| m.as_str().to_string(),
    )
}
