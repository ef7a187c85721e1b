//! Issue catalog loading and validation
//!
//! A catalog is a TOML or JSON file describing a project and the issue
//! records to submit, in order.

use crate::error::{Error, Result};
use crate::types::SubmissionRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Project metadata from the catalog header
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectMeta {
    /// Project name shown in headers, when present
    #[serde(default)]
    pub name: Option<String>,
    /// Path relative to the working directory that must exist before
    /// anything is submitted
    #[serde(default)]
    pub marker: Option<String>,
}

/// A declarative catalog of issues to submit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    /// Project metadata
    #[serde(default)]
    pub project: ProjectMeta,
    /// Records in submission order
    #[serde(default)]
    pub issues: Vec<SubmissionRecord>,
}

/// Load a catalog from a TOML or JSON file
///
/// The format is chosen by extension: `.json` parses as JSON, anything
/// else as TOML.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::Catalog(format!("cannot read {}: {e}", path.display())))?;

    let catalog: Catalog = if is_json(path) {
        serde_json::from_str(&text)
            .map_err(|e| Error::Catalog(format!("cannot parse {}: {e}", path.display())))?
    } else {
        toml::from_str(&text)
            .map_err(|e| Error::Catalog(format!("cannot parse {}: {e}", path.display())))?
    };

    validate(&catalog)?;
    Ok(catalog)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Reject records the tracker would refuse anyway
fn validate(catalog: &Catalog) -> Result<()> {
    for (i, record) in catalog.issues.iter().enumerate() {
        if record.title.trim().is_empty() {
            return Err(Error::InvalidCatalog(format!(
                "record {} has an empty title",
                i + 1
            )));
        }
    }

    // Duplicate titles are legal on every tracker, but usually a
    // copy-paste mistake in the catalog.
    for title in duplicate_titles(catalog) {
        warn!(%title, "Duplicate title in catalog");
    }

    Ok(())
}

/// Titles that appear more than once, in order of first duplication
pub fn duplicate_titles(catalog: &Catalog) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates: Vec<String> = Vec::new();
    for record in &catalog.issues {
        if !seen.insert(record.title.as_str()) && !duplicates.contains(&record.title) {
            duplicates.push(record.title.clone());
        }
    }
    duplicates
}

/// Count records per group, in order of first appearance
///
/// Records without a group are counted under `"ungrouped"`.
pub fn group_breakdown(catalog: &Catalog) -> Vec<(String, usize)> {
    let mut breakdown: Vec<(String, usize)> = Vec::new();
    for record in &catalog.issues {
        let group = record.group.as_deref().unwrap_or("ungrouped");
        if let Some(entry) = breakdown.iter_mut().find(|(name, _)| name == group) {
            entry.1 += 1;
        } else {
            breakdown.push((group.to_string(), 1));
        }
    }
    breakdown
}
