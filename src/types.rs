//! Core types for issue-seeder

use serde::{Deserialize, Serialize};

/// A single issue to be submitted to the tracker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionRecord {
    /// Issue title (must be non-empty)
    pub title: String,
    /// Issue body text (markdown)
    #[serde(default)]
    pub body: String,
    /// Labels to apply
    #[serde(default)]
    pub labels: Vec<String>,
    /// Milestone to assign, if any
    #[serde(default)]
    pub milestone: Option<String>,
    /// Logical group for breakdown displays (e.g. a project phase)
    #[serde(default)]
    pub group: Option<String>,
}

/// An issue the tracker accepted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedIssue {
    /// Issue number parsed from the web URL, when recognizable
    pub number: Option<u64>,
    /// Web URL of the created issue
    pub url: String,
}

/// Terminal status of one record's submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// The tracker accepted the record
    Created(CreatedIssue),
    /// The tracker rejected the record with an error message
    Failed(String),
}

/// Outcome of submitting one record
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    /// Zero-based position of the record in the catalog
    pub index: usize,
    /// Title of the record this outcome belongs to
    pub title: String,
    /// Terminal status
    pub status: SubmissionStatus,
}

/// Supported tracker CLI tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// GitHub CLI (`gh`)
    Gh,
    /// GitLab CLI (`glab`)
    Glab,
}

impl Tool {
    /// Binary name invoked on PATH
    pub const fn command(self) -> &'static str {
        match self {
            Self::Gh => "gh",
            Self::Glab => "glab",
        }
    }

    /// Human-readable tracker name
    pub const fn tracker_name(self) -> &'static str {
        match self {
            Self::Gh => "GitHub",
            Self::Glab => "GitLab",
        }
    }

    /// Install URL shown when the tool is missing
    pub const fn install_url(self) -> &'static str {
        match self {
            Self::Gh => "https://cli.github.com/",
            Self::Glab => "https://gitlab.com/gitlab-org/cli",
        }
    }

    /// Login command suggested when authentication fails
    pub const fn login_hint(self) -> &'static str {
        match self {
            Self::Gh => "gh auth login",
            Self::Glab => "glab auth login",
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.command())
    }
}
