//! Progress callback trait for interface-agnostic updates
//!
//! This trait allows different interfaces (CLI, logs, tests) to receive
//! progress updates while a batch runs.

use crate::types::{CreatedIssue, SubmissionStatus};
use async_trait::async_trait;

/// Batch phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Submitting records one by one
    Submitting,
    /// Batch complete
    Complete,
}

/// Per-record submission status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Submission started
    Started,
    /// The tracker accepted the record
    Created(CreatedIssue),
    /// The tracker rejected the record with an error message
    Failed(String),
}

impl From<&SubmissionStatus> for SubmitStatus {
    fn from(status: &SubmissionStatus) -> Self {
        match status {
            SubmissionStatus::Created(issue) => Self::Created(issue.clone()),
            SubmissionStatus::Failed(message) => Self::Failed(message.clone()),
        }
    }
}

/// Progress callback trait
///
/// Implement this trait to receive progress updates while a batch runs.
/// - CLI implementations can print to terminal
/// - Tests can record events for order assertions
#[async_trait]
pub trait BatchProgress: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called as each record starts and finishes
    async fn on_record(&self, index: usize, title: &str, status: SubmitStatus);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl BatchProgress for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_record(&self, _index: usize, _title: &str, _status: SubmitStatus) {}
    async fn on_message(&self, _message: &str) {}
}
