//! Target platform formats and the renderers that produce them.
//!
//! Each renderer is a pure function of a [`SkillConfig`] and a [`ToolMap`]:
//! the same inputs always give byte-identical output.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{
    error::{Context, Error, Result},
    tool_map::ToolMap,
    types::{
        AgentSdkConfig, LangChainConfig, OpenClawConfig, OpenClawSkill, OpenClawTool, SkillConfig,
    },
};

/// Name of the single nested entry in an OpenClaw manifest.
pub const OPENCLAW_ENTRY_NAME: &str = "execute";

// ── Target format enum ──────────────────────────────────────────────────────

/// Platform a skill can be rendered for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TargetFormat {
    /// Instruction string plus flat tool list.
    #[default]
    AgentSdk,
    /// Manifest with one nested `execute` skill.
    OpenClaw,
    /// Prompt template with a `{context}` placeholder.
    LangChain,
    /// `SKILL.md` again, frontmatter re-emitted.
    ClaudeCode,
}

impl TargetFormat {
    pub const ALL: [TargetFormat; 4] = [
        Self::AgentSdk,
        Self::OpenClaw,
        Self::LangChain,
        Self::ClaudeCode,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AgentSdk => "agent-sdk",
            Self::OpenClaw => "openclaw",
            Self::LangChain => "langchain",
            Self::ClaudeCode => "claude-code",
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}

// ── Rendering ───────────────────────────────────────────────────────────────

/// Render `config` for `format` as the text written to stdout.
///
/// JSON formats are pretty-printed with two-space indentation and fields in
/// declaration order; `claude-code` yields the markdown document itself.
pub fn render(config: &SkillConfig, tool_map: &ToolMap, format: TargetFormat) -> Result<String> {
    Ok(match format {
        TargetFormat::AgentSdk => serde_json::to_string_pretty(&to_agent_sdk(config, tool_map))?,
        TargetFormat::OpenClaw => serde_json::to_string_pretty(&to_openclaw(config, tool_map))?,
        TargetFormat::LangChain => serde_json::to_string_pretty(&to_langchain(config, tool_map))?,
        TargetFormat::ClaudeCode => to_claude_code(config)?,
    })
}

// ── Renderers ───────────────────────────────────────────────────────────────

pub fn to_agent_sdk(config: &SkillConfig, tool_map: &ToolMap) -> AgentSdkConfig {
    AgentSdkConfig {
        name: config.name.clone(),
        description: config.description.clone(),
        instructions: render_instructions(config),
        tools: tool_map.map_all(&config.tools),
    }
}

pub fn to_openclaw(config: &SkillConfig, tool_map: &ToolMap) -> OpenClawConfig {
    OpenClawConfig {
        name: config.name.clone(),
        description: config.description.clone(),
        version: config.version.clone(),
        skills: vec![OpenClawSkill {
            name: OPENCLAW_ENTRY_NAME.to_string(),
            description: config.description.clone(),
            tools: config
                .tools
                .iter()
                .map(|tool| OpenClawTool {
                    name: tool_map.map(tool).to_string(),
                })
                .collect(),
        }],
    }
}

pub fn to_langchain(config: &SkillConfig, tool_map: &ToolMap) -> LangChainConfig {
    LangChainConfig {
        name: config.name.clone(),
        description: config.description.clone(),
        prompt_template: format!("{}\n\n{{context}}\n\n{}", config.description, config.content),
        tools: tool_map.map_all(&config.tools),
    }
}

#[derive(Serialize)]
struct ClaudeCodeFrontmatter<'a> {
    name: &'a str,
    description: &'a str,
    version: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    author: &'a str,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    triggers: &'a [String],
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    tools: &'a [String],
}

/// Re-emit a `SKILL.md`. Tools keep their source identifiers.
pub fn to_claude_code(config: &SkillConfig) -> Result<String> {
    let frontmatter = ClaudeCodeFrontmatter {
        name: &config.name,
        description: &config.description,
        version: &config.version,
        author: &config.author,
        triggers: &config.triggers,
        tools: &config.tools,
    };
    let yaml = serde_yaml::to_string(&frontmatter).context("failed to serialize frontmatter")?;
    Ok(format!("---\n{yaml}---\n{}", config.content))
}

/// System prompt for instruction-style targets.
///
/// The tool list keeps source identifiers; only the structured tool list of
/// the output record is translated.
pub fn render_instructions(config: &SkillConfig) -> String {
    let tools = config.tools.join(", ");
    let steps = config
        .execution_steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {step}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are {name}\n\n{description}\n\n## Available Tools\n{tools}\n\n## Execution Steps\n{steps}\n\n## Additional Context\n{content}",
        name = config.name,
        description = config.description,
        content = config.content,
    )
}
