//! CLI commands
//!
//! Command implementations for the `seeder` binary.

mod check;
mod preview;
mod progress;
mod run;
mod style;

pub use check::run_check;
pub use preview::run_preview;
pub use run::run_run;
