use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::schema::SkillportConfig;

/// Standard config file names, checked in order.
const CONFIG_FILENAMES: &[&str] = &[
    "skillport.toml",
    "skillport.yaml",
    "skillport.yml",
    "skillport.json",
];

/// Load config from the given path (any supported format).
pub fn load_config(path: &Path) -> anyhow::Result<SkillportConfig> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    parse_config(&raw, path)
}

/// Discover and load config from standard locations.
///
/// Search order:
/// 1. `./skillport.{toml,yaml,yml,json}` (project-local)
/// 2. `~/.config/skillport/skillport.{toml,yaml,yml,json}` (user-global)
///
/// Returns `SkillportConfig::default()` if no config file is found or the
/// file found cannot be parsed.
pub fn discover_and_load() -> SkillportConfig {
    if let Some(path) = find_config_file() {
        debug!(path = %path.display(), "loading config");
        match load_config(&path) {
            Ok(cfg) => return cfg,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
            },
        }
    } else {
        debug!("no config file found, using defaults");
    }
    SkillportConfig::default()
}

/// Find the first config file in standard locations.
pub fn find_config_file() -> Option<PathBuf> {
    if let Some(found) = find_in_dir(Path::new(".")) {
        return Some(found);
    }
    config_dir().and_then(|dir| find_in_dir(&dir))
}

/// Returns the user-global config directory (`~/.config/skillport/`).
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "skillport").map(|d| d.config_dir().to_path_buf())
}

fn find_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILENAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
}

fn parse_config(raw: &str, path: &Path) -> anyhow::Result<SkillportConfig> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match ext {
        "toml" => Ok(toml::from_str(raw)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(raw)?),
        "json" => Ok(serde_json::from_str(raw)?),
        _ => anyhow::bail!("unsupported config format: .{ext}"),
    }
}
