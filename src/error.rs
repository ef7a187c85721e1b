//! Error types for issue-seeder

use thiserror::Error;

/// Convenience alias for results using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from catalog loading, preflight probes, and submission
#[derive(Debug, Error)]
pub enum Error {
    /// The tracker CLI binary was not found on PATH
    #[error("{0} CLI not found on PATH")]
    ToolMissing(String),

    /// The tracker CLI is installed but not logged in
    #[error("{0} is not authenticated")]
    NotAuthenticated(String),

    /// The project marker file is absent from the working directory
    #[error("project marker not found: {0}")]
    MarkerMissing(String),

    /// The catalog file could not be read or parsed
    #[error("catalog error: {0}")]
    Catalog(String),

    /// The catalog content failed validation
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    /// The tracker rejected a record
    #[error("{0}")]
    Tracker(String),

    /// A tracker subprocess could not be started
    #[error("failed to run {0}: {1}")]
    Spawn(String, #[source] std::io::Error),
}
