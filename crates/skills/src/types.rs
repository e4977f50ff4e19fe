use std::fmt;

use {
    serde::{Deserialize, Serialize},
    serde_yaml::{Mapping, Value},
};

use crate::steps;

/// Name used when the frontmatter has none.
pub const DEFAULT_NAME: &str = "unknown";
/// Version used when the frontmatter has none.
pub const DEFAULT_VERSION: &str = "1.0.0";

// ── Skill record ────────────────────────────────────────────────────────────

/// Normalised skill: every field holds a concrete value, absent frontmatter
/// keys having been replaced by their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillConfig {
    pub name: String,
    pub description: String,
    pub version: String,
    pub author: String,
    /// Keyword or phrase cues that activate the skill.
    pub triggers: Vec<String>,
    /// Source-platform tool identifiers, in declaration order.
    pub tools: Vec<String>,
    /// Markdown body after the frontmatter, verbatim.
    pub content: String,
    /// Non-blank lines of the first `## Execution Steps` section, trimmed.
    pub execution_steps: Vec<String>,
}

impl SkillConfig {
    /// Build a record from raw frontmatter and the document body.
    pub fn from_parts(metadata: &Mapping, body: impl Into<String>) -> Self {
        let content = body.into();
        let execution_steps = steps::extract_execution_steps(&content);
        Self {
            name: string_field(metadata, "name").unwrap_or_else(|| DEFAULT_NAME.into()),
            description: string_field(metadata, "description").unwrap_or_default(),
            version: string_field(metadata, "version").unwrap_or_else(|| DEFAULT_VERSION.into()),
            author: string_field(metadata, "author").unwrap_or_default(),
            triggers: list_field(metadata, "triggers").unwrap_or_default(),
            tools: list_field(metadata, "tools").unwrap_or_default(),
            content,
            execution_steps,
        }
    }
}

impl fmt::Display for SkillConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SkillConfig(name={}, version={})", self.name, self.version)
    }
}

/// `None` for a missing key or an explicit YAML `null`.
fn string_field(metadata: &Mapping, key: &str) -> Option<String> {
    metadata.get(key).and_then(value_text)
}

/// A bare scalar where a list is expected becomes a one-element list.
fn list_field(metadata: &Mapping, key: &str) -> Option<Vec<String>> {
    match metadata.get(key)? {
        Value::Null => None,
        Value::Sequence(items) => Some(items.iter().filter_map(value_text).collect()),
        other => value_text(other).map(|text| vec![text]),
    }
}

/// Render a YAML value as the string the record stores.
///
/// Strings are taken verbatim, other scalars use their YAML spelling, and
/// nested structures are re-serialised as compact YAML text.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => serde_yaml::to_string(value)
            .ok()
            .map(|s| s.trim_end().to_string()),
    }
}

// ── Rendered outputs ────────────────────────────────────────────────────────

/// Agent SDK shape: one instruction string plus a flat tool list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSdkConfig {
    pub name: String,
    pub description: String,
    pub instructions: String,
    /// Target-platform tool identifiers.
    pub tools: Vec<String>,
}

/// OpenClaw manifest wrapping a single `execute` skill entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenClawConfig {
    pub name: String,
    pub description: String,
    pub version: String,
    pub skills: Vec<OpenClawSkill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenClawSkill {
    pub name: String,
    pub description: String,
    pub tools: Vec<OpenClawTool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenClawTool {
    pub name: String,
}

/// LangChain prompt-template shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangChainConfig {
    pub name: String,
    pub description: String,
    /// Contains a literal `{context}` placeholder for the chain to fill.
    pub prompt_template: String,
    pub tools: Vec<String>,
}
