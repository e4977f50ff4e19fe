/// Config schema types.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillportConfig {
    /// Output format used when none is given on the command line
    /// (`agent-sdk`, `openclaw`, `langchain`, `claude-code`).
    pub default_format: Option<String>,
    pub tools: ToolsConfig,
}

/// Tool identifier translation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// When true, `map` replaces the built-in table instead of extending it.
    pub replace_builtin: bool,
    /// Source identifier → target identifier.
    pub map: HashMap<String, String>,
}
