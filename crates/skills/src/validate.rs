//! Advisory checks on a loaded skill.
//!
//! Loading never fails on these; callers decide whether to warn or refuse.

use crate::{
    tool_map::ToolMap,
    types::{DEFAULT_NAME, SkillConfig},
};

/// Human-readable issues found in `config`, empty when none.
pub fn validate(config: &SkillConfig, tool_map: &ToolMap) -> Vec<String> {
    let mut issues = Vec::new();

    if config.name.is_empty() || config.name == DEFAULT_NAME {
        issues.push("Name is required".to_string());
    }
    if config.description.is_empty() {
        issues.push("Description is required".to_string());
    }
    if config.version.is_empty() {
        issues.push("Version is required".to_string());
    }
    for tool in &config.tools {
        if !tool_map.contains(tool) {
            issues.push(format!("Unknown tool: {tool}"));
        }
    }

    issues
}
