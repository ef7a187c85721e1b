//! Shared test support

pub mod fixtures;
pub mod mock_tracker;
