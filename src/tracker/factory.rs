//! Tracker factory
//!
//! Creates tracker adapters based on the selected tool.

use crate::tracker::{GhTracker, GlabTracker, IssueTracker};
use crate::types::Tool;

/// Create a tracker adapter for the given tool
pub fn create_tracker(tool: Tool) -> Box<dyn IssueTracker> {
    match tool {
        Tool::Gh => Box::new(GhTracker),
        Tool::Glab => Box::new(GlabTracker),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_matches_tool() {
        assert_eq!(create_tracker(Tool::Gh).tool(), Tool::Gh);
        assert_eq!(create_tracker(Tool::Glab).tool(), Tool::Glab);
    }
}
