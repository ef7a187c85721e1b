//! Mock tracker for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use issue_seeder::error::{Error, Result};
use issue_seeder::tracker::IssueTracker;
use issue_seeder::types::{CreatedIssue, SubmissionRecord, Tool};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Call record for `create_issue`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateIssueCall {
    pub title: String,
    pub labels: Vec<String>,
    pub milestone: Option<String>,
}

/// Simple mock tracker for testing
///
/// Features:
/// - Auto-incrementing issue numbers
/// - Call tracking for verification
/// - Probe failure injection for the preflight gating paths
/// - Per-title error injection for failure isolation tests
pub struct MockTracker {
    tool: Tool,
    next_issue_number: AtomicU64,
    // Call tracking
    version_probes: AtomicU64,
    auth_probes: AtomicU64,
    create_issue_calls: Mutex<Vec<CreateIssueCall>>,
    // Error injection
    fail_version: AtomicBool,
    fail_auth: AtomicBool,
    fail_titles: Mutex<HashMap<String, String>>,
}

impl MockTracker {
    /// Create a mock for the `gh` tool
    pub fn new() -> Self {
        Self::with_tool(Tool::Gh)
    }

    /// Create a mock for a specific tool
    pub fn with_tool(tool: Tool) -> Self {
        Self {
            tool,
            next_issue_number: AtomicU64::new(1),
            version_probes: AtomicU64::new(0),
            auth_probes: AtomicU64::new(0),
            create_issue_calls: Mutex::new(Vec::new()),
            fail_version: AtomicBool::new(false),
            fail_auth: AtomicBool::new(false),
            fail_titles: Mutex::new(HashMap::new()),
        }
    }

    // === Error injection methods ===

    /// Make `probe_version` fail as if the binary were missing
    pub fn fail_version_probe(&self) {
        self.fail_version.store(true, Ordering::SeqCst);
    }

    /// Make `probe_auth` fail as if the user were logged out
    pub fn fail_auth_probe(&self) {
        self.fail_auth.store(true, Ordering::SeqCst);
    }

    /// Make `create_issue` fail for a specific title
    pub fn fail_title(&self, title: &str, msg: &str) {
        self.fail_titles
            .lock()
            .unwrap()
            .insert(title.to_string(), msg.to_string());
    }

    // === Call verification methods ===

    /// Get all `create_issue` calls
    pub fn get_create_issue_calls(&self) -> Vec<CreateIssueCall> {
        self.create_issue_calls.lock().unwrap().clone()
    }

    /// Number of `create_issue` invocations
    pub fn create_count(&self) -> usize {
        self.create_issue_calls.lock().unwrap().len()
    }

    /// Number of `probe_version` invocations
    pub fn version_probe_count(&self) -> u64 {
        self.version_probes.load(Ordering::SeqCst)
    }

    /// Number of `probe_auth` invocations
    pub fn auth_probe_count(&self) -> u64 {
        self.auth_probes.load(Ordering::SeqCst)
    }

    /// Assert that `create_issue` was called with exactly these titles, in order
    pub fn assert_created_titles(&self, titles: &[&str]) {
        let calls = self.get_create_issue_calls();
        let got: Vec<&str> = calls.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(got, titles, "create_issue call order mismatch");
    }

    /// Assert that no records were submitted
    pub fn assert_no_creates(&self) {
        let calls = self.get_create_issue_calls();
        assert!(calls.is_empty(), "Expected no create_issue calls, got: {calls:?}");
    }
}

impl Default for MockTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IssueTracker for MockTracker {
    async fn probe_version(&self) -> Result<String> {
        self.version_probes.fetch_add(1, Ordering::SeqCst);
        if self.fail_version.load(Ordering::SeqCst) {
            return Err(Error::ToolMissing(self.tool.command().to_string()));
        }
        Ok(format!("{} version 2.40.1 (2024-01-15)", self.tool.command()))
    }

    async fn probe_auth(&self) -> Result<()> {
        self.auth_probes.fetch_add(1, Ordering::SeqCst);
        if self.fail_auth.load(Ordering::SeqCst) {
            return Err(Error::NotAuthenticated(self.tool.command().to_string()));
        }
        Ok(())
    }

    async fn create_issue(&self, record: &SubmissionRecord) -> Result<CreatedIssue> {
        self.create_issue_calls.lock().unwrap().push(CreateIssueCall {
            title: record.title.clone(),
            labels: record.labels.clone(),
            milestone: record.milestone.clone(),
        });

        // Check for injected error
        if let Some(msg) = self.fail_titles.lock().unwrap().get(&record.title) {
            return Err(Error::Tracker(msg.clone()));
        }

        let number = self.next_issue_number.fetch_add(1, Ordering::SeqCst);
        Ok(CreatedIssue {
            number: Some(number),
            url: format!("https://github.com/test/repo/issues/{number}"),
        })
    }

    fn tool(&self) -> Tool {
        self.tool
    }
}
