//! Run summary accounting

use crate::types::{SubmissionOutcome, SubmissionStatus};
use chrono::{DateTime, Duration, Utc};

/// Summary of a complete batch run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of records in the catalog
    pub total: usize,
    /// Per-record outcomes, in catalog order
    pub outcomes: Vec<SubmissionOutcome>,
    /// When the batch started
    pub started_at: DateTime<Utc>,
    /// When the last outcome was recorded
    pub finished_at: DateTime<Utc>,
}

impl RunSummary {
    /// Create an empty summary for a batch of `total` records
    #[must_use]
    pub fn new(total: usize) -> Self {
        let now = Utc::now();
        Self {
            total,
            outcomes: Vec::new(),
            started_at: now,
            finished_at: now,
        }
    }

    /// Append one record's outcome
    pub fn record_outcome(&mut self, outcome: SubmissionOutcome) {
        self.outcomes.push(outcome);
        self.finished_at = Utc::now();
    }

    /// Number of records the tracker accepted
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, SubmissionStatus::Created(_)))
            .count()
    }

    /// Number of records the tracker rejected
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, SubmissionStatus::Failed(_)))
            .count()
    }

    /// Returns true if any record failed
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    /// Returns true if every record succeeded (trivially true for an
    /// empty batch)
    #[must_use]
    pub fn all_success(&self) -> bool {
        self.failed() == 0
    }

    /// Wall-clock duration of the batch
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.finished_at - self.started_at
    }
}
