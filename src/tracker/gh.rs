//! GitHub tracker implementation

use crate::error::{Error, Result};
use crate::tracker::{failure_detail, invoke, parse_created_issue, IssueTracker};
use crate::types::{CreatedIssue, SubmissionRecord, Tool};
use async_trait::async_trait;

/// GitHub tracker driving the `gh` CLI
pub struct GhTracker;

impl GhTracker {
    /// Build the `gh issue create` argument list for a record
    fn create_args(record: &SubmissionRecord) -> Vec<String> {
        let mut args = vec![
            "issue".to_string(),
            "create".to_string(),
            "--title".to_string(),
            record.title.clone(),
            "--body".to_string(),
            record.body.clone(),
        ];

        if !record.labels.is_empty() {
            args.push("--label".to_string());
            args.push(record.labels.join(","));
        }

        if let Some(milestone) = &record.milestone {
            args.push("--milestone".to_string());
            args.push(milestone.clone());
        }

        args
    }
}

#[async_trait]
impl IssueTracker for GhTracker {
    async fn probe_version(&self) -> Result<String> {
        let output = invoke(Tool::Gh, ["--version"]).await?;
        if output.success {
            Ok(output.stdout)
        } else {
            Err(Error::ToolMissing("gh".to_string()))
        }
    }

    async fn probe_auth(&self) -> Result<()> {
        let output = invoke(Tool::Gh, ["auth", "status"]).await?;
        if output.success {
            Ok(())
        } else {
            Err(Error::NotAuthenticated("gh".to_string()))
        }
    }

    async fn create_issue(&self, record: &SubmissionRecord) -> Result<CreatedIssue> {
        let args = Self::create_args(record);
        let output = invoke(Tool::Gh, &args).await?;

        if output.success {
            Ok(parse_created_issue(&output.stdout))
        } else {
            Err(Error::Tracker(failure_detail(&output)))
        }
    }

    fn tool(&self) -> Tool {
        Tool::Gh
    }
}
