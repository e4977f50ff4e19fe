//! Load one skill file and render it in the requested format.

use std::path::PathBuf;

use {
    anyhow::{Context, Result},
    clap::Args,
    skillport_config::SkillportConfig,
    skillport_skills::{SkillLoader, TargetFormat, ToolMap},
    tracing::{debug, warn},
};

#[derive(Args)]
pub struct ConvertArgs {
    /// Path to the SKILL.md file.
    pub skill_path: PathBuf,

    /// Output format: agent-sdk (default), openclaw, langchain, claude-code.
    pub format: Option<String>,

    /// Config file (overrides discovery of ./skillport.toml and
    /// ~/.config/skillport/).
    #[arg(long, env = "SKILLPORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Report validation issues (unknown tools, missing name or
    /// description) on stderr.
    #[arg(long)]
    pub check: bool,
}

/// Returns the rendered skill for the caller to print.
pub async fn handle_convert(args: ConvertArgs) -> Result<String> {
    let config = match args.config {
        Some(ref path) => skillport_config::load_config(path)?,
        None => skillport_config::discover_and_load(),
    };

    let format = resolve_format(args.format.as_deref(), &config)?;
    let loader = SkillLoader::new().with_tool_map(tool_map_from_config(&config));

    let skill = loader.load(&args.skill_path).await?;
    debug!(name = %skill.name, %format, "rendering skill");

    if args.check {
        let issues = loader.validate(&skill);
        for issue in &issues {
            eprintln!("warning: {issue}");
        }
        if !issues.is_empty() {
            warn!(
                count = issues.len(),
                path = %args.skill_path.display(),
                "skill has validation issues"
            );
        }
    }

    loader
        .render(&skill, format)
        .with_context(|| format!("failed to render {}", args.skill_path.display()))
}

/// Command line first, then config, then the built-in default.
fn resolve_format(selector: Option<&str>, config: &SkillportConfig) -> Result<TargetFormat> {
    match selector.or(config.default_format.as_deref()) {
        Some(selector) => Ok(selector.parse()?),
        None => Ok(TargetFormat::default()),
    }
}

fn tool_map_from_config(config: &SkillportConfig) -> ToolMap {
    let entries = config
        .tools
        .map
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()));
    if config.tools.replace_builtin {
        ToolMap::from_entries(entries)
    } else if config.tools.map.is_empty() {
        ToolMap::default()
    } else {
        ToolMap::with_overrides(entries)
    }
}
