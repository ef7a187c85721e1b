//! Batch execution
//!
//! Submits catalog records strictly in order. Each record is attempted
//! exactly once; a rejection is recorded and the batch moves on.

use crate::run::{BatchProgress, Phase, RunSummary, SubmitStatus};
use crate::tracker::IssueTracker;
use crate::types::{SubmissionOutcome, SubmissionRecord, SubmissionStatus};
use tracing::debug;

/// Submit all records through the tracker, in catalog order
///
/// Record failures never abort the batch; only the returned summary
/// tells the caller whether everything succeeded.
pub async fn execute_batch(
    records: &[SubmissionRecord],
    tracker: &dyn IssueTracker,
    progress: &dyn BatchProgress,
    dry_run: bool,
) -> RunSummary {
    let mut summary = RunSummary::new(records.len());

    if dry_run {
        progress
            .on_message("Dry run - nothing will be submitted")
            .await;
        report_dry_run(records, progress).await;
        return summary;
    }

    progress.on_phase(Phase::Submitting).await;

    for (index, record) in records.iter().enumerate() {
        progress
            .on_record(index, &record.title, SubmitStatus::Started)
            .await;

        let status = match tracker.create_issue(record).await {
            Ok(issue) => SubmissionStatus::Created(issue),
            Err(e) => {
                debug!(index, error = %e, "Record rejected by tracker");
                SubmissionStatus::Failed(e.to_string())
            }
        };

        progress
            .on_record(index, &record.title, SubmitStatus::from(&status))
            .await;

        summary.record_outcome(SubmissionOutcome {
            index,
            title: record.title.clone(),
            status,
        });
    }

    progress.on_phase(Phase::Complete).await;

    summary
}

/// Report what a live run would submit
async fn report_dry_run(records: &[SubmissionRecord], progress: &dyn BatchProgress) {
    if records.is_empty() {
        progress
            .on_message("Nothing to submit - catalog is empty")
            .await;
        return;
    }

    progress.on_message("Would submit:").await;
    for record in records {
        let labels = if record.labels.is_empty() {
            String::new()
        } else {
            format!(" [{}]", record.labels.join(", "))
        };
        progress
            .on_message(&format!("  - {}{labels}", record.title))
            .await;
    }
}
