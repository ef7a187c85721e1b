//! Shared CLI progress callback with styled output

use crate::cli::style::{check, cross, hyperlink_url, Stream, Stylize};
use anstream::{eprintln, println};
use async_trait::async_trait;
use issue_seeder::run::{BatchProgress, Phase, SubmitStatus};

/// Progress callback that prints one block per record
///
/// Created records go to stdout with a hyperlinked locator; failures go
/// to stderr with the tracker's diagnostic indented below the title.
pub struct CliProgress {
    total: usize,
}

impl CliProgress {
    /// Create a progress printer for a batch of `total` records
    pub const fn new(total: usize) -> Self {
        Self { total }
    }
}

#[async_trait]
impl BatchProgress for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::Submitting => println!("{}", "Creating issues...".emphasis()),
            Phase::Complete => {}
        }
    }

    async fn on_record(&self, index: usize, title: &str, status: SubmitStatus) {
        match status {
            SubmitStatus::Started => {
                println!(
                    "Creating issue {}/{}: {title}",
                    (index + 1).accent(),
                    self.total.accent()
                );
            }
            SubmitStatus::Created(issue) => {
                println!("  {} Created: {}", check(), title.emphasis());
                if !issue.url.is_empty() {
                    println!("    {}", hyperlink_url(Stream::Stdout, &issue.url));
                }
            }
            SubmitStatus::Failed(message) => {
                eprintln!("  {} Failed: {}", cross(), title.emphasis().for_stderr());
                eprintln!("    {}", message.error());
            }
        }
    }

    async fn on_message(&self, message: &str) {
        println!("{message}");
    }
}
