//! Test data factories for issue-seeder types
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use issue_seeder::types::SubmissionRecord;

/// Create a record with just a title and a generated body
pub fn make_record(title: &str) -> SubmissionRecord {
    SubmissionRecord {
        title: title.to_string(),
        body: format!("Body for {title}"),
        labels: vec![],
        milestone: None,
        group: None,
    }
}

/// Create a record with labels and a milestone
pub fn make_full_record(title: &str, labels: &[&str], milestone: &str) -> SubmissionRecord {
    SubmissionRecord {
        labels: labels.iter().map(ToString::to_string).collect(),
        milestone: Some(milestone.to_string()),
        ..make_record(title)
    }
}

/// Create a record in a named group
pub fn make_grouped_record(title: &str, group: &str) -> SubmissionRecord {
    SubmissionRecord {
        group: Some(group.to_string()),
        ..make_record(title)
    }
}

/// Create `n` numbered records ("Issue 1" .. "Issue n")
pub fn make_records(n: usize) -> Vec<SubmissionRecord> {
    (1..=n)
        .map(|i| make_record(&format!("Issue {i}")))
        .collect()
}
