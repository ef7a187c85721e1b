//! Batch submission engine
//!
//! Records are submitted one at a time, in the order the catalog lists
//! them. A failed record is recorded in the summary and never stops the
//! records after it.

mod execute;
mod progress;
mod summary;

pub use execute::execute_batch;
pub use progress::{BatchProgress, NoopProgress, Phase, SubmitStatus};
pub use summary::RunSummary;
