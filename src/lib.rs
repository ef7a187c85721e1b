//! issue-seeder - batch issue creation from a declarative catalog
//!
//! Reads a catalog of issue records (TOML or JSON), verifies that the
//! tracker CLI is installed and authenticated, and submits each record
//! through `gh` or `glab` one at a time. Failed records are reported in
//! the run summary and never stop the rest of the batch.

pub mod catalog;
pub mod error;
pub mod preflight;
pub mod run;
pub mod tracker;
pub mod types;

pub use error::{Error, Result};
