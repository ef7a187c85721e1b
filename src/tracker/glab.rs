//! GitLab tracker implementation

use crate::error::{Error, Result};
use crate::tracker::{failure_detail, invoke, parse_created_issue, IssueTracker};
use crate::types::{CreatedIssue, SubmissionRecord, Tool};
use async_trait::async_trait;

/// GitLab tracker driving the `glab` CLI
pub struct GlabTracker;

impl GlabTracker {
    /// Build the `glab issue create` argument list for a record
    ///
    /// Same grammar as `gh` except the body flag is `--description`.
    fn create_args(record: &SubmissionRecord) -> Vec<String> {
        let mut args = vec![
            "issue".to_string(),
            "create".to_string(),
            "--title".to_string(),
            record.title.clone(),
            "--description".to_string(),
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
impl IssueTracker for GlabTracker {
    async fn probe_version(&self) -> Result<String> {
        let output = invoke(Tool::Glab, ["--version"]).await?;
        if output.success {
            Ok(output.stdout)
        } else {
            Err(Error::ToolMissing("glab".to_string()))
        }
    }

    async fn probe_auth(&self) -> Result<()> {
        let output = invoke(Tool::Glab, ["auth", "status"]).await?;
        if output.success {
            Ok(())
        } else {
            Err(Error::NotAuthenticated("glab".to_string()))
        }
    }

    async fn create_issue(&self, record: &SubmissionRecord) -> Result<CreatedIssue> {
        let args = Self::create_args(record);
        let output = invoke(Tool::Glab, &args).await?;

        if output.success {
            Ok(parse_created_issue(&output.stdout))
        } else {
            Err(Error::Tracker(failure_detail(&output)))
        }
    }

    fn tool(&self) -> Tool {
        Tool::Glab
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_args_uses_description_flag() {
        let record = SubmissionRecord {
            title: "Add search".to_string(),
            body: "Details".to_string(),
            labels: vec!["feature".to_string()],
            milestone: Some("0.2".to_string()),
            group: None,
        };

        let args = GlabTracker::create_args(&record);
        assert_eq!(
            args,
            [
                "issue",
                "create",
                "--title",
                "Add search",
                "--description",
                "Details",
                "--label",
                "feature",
                "--milestone",
                "0.2",
            ]
        );
    }
}
