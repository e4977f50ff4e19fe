//! Configuration discovery and loading.
//!
//! Config files: `skillport.toml`, `skillport.yaml`, `skillport.yml` or
//! `skillport.json`. Searched in `./` then `~/.config/skillport/`.

pub mod loader;
pub mod schema;

pub use {
    loader::{config_dir, discover_and_load, find_config_file, load_config},
    schema::{SkillportConfig, ToolsConfig},
};
