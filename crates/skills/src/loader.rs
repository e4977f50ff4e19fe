use std::path::Path;

use tracing::debug;

use crate::{
    error::{Error, Result},
    formats::{self, TargetFormat},
    parse::{FrontmatterSplitter, YamlFrontmatter},
    tool_map::ToolMap,
    types::{AgentSdkConfig, LangChainConfig, OpenClawConfig, SkillConfig},
};

/// Loads `SKILL.md` documents and renders them with a fixed tool map.
pub struct SkillLoader {
    tool_map: ToolMap,
    splitter: Box<dyn FrontmatterSplitter>,
}

impl SkillLoader {
    /// Loader with the built-in tool map and YAML frontmatter.
    pub fn new() -> Self {
        Self {
            tool_map: ToolMap::default(),
            splitter: Box::new(YamlFrontmatter),
        }
    }

    #[must_use]
    pub fn with_tool_map(mut self, tool_map: ToolMap) -> Self {
        self.tool_map = tool_map;
        self
    }

    #[must_use]
    pub fn with_splitter(mut self, splitter: impl FrontmatterSplitter + 'static) -> Self {
        self.splitter = Box::new(splitter);
        self
    }

    pub fn tool_map(&self) -> &ToolMap {
        &self.tool_map
    }

    /// Parse a skill from text. Never fails: missing metadata falls back to
    /// defaults.
    pub fn load_str(&self, text: &str) -> SkillConfig {
        self.splitter.split(text).into_config()
    }

    /// Read and parse a skill file.
    pub async fn load(&self, path: impl AsRef<Path>) -> Result<SkillConfig> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| Error::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(self.loaded(path, &text))
    }

    /// Blocking variant of [`SkillLoader::load`].
    pub fn load_sync(&self, path: impl AsRef<Path>) -> Result<SkillConfig> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.loaded(path, &text))
    }

    fn loaded(&self, path: &Path, text: &str) -> SkillConfig {
        let config = self.load_str(text);
        debug!(
            path = %path.display(),
            name = %config.name,
            steps = config.execution_steps.len(),
            "loaded skill"
        );
        config
    }

    pub fn to_agent_sdk(&self, config: &SkillConfig) -> AgentSdkConfig {
        formats::to_agent_sdk(config, &self.tool_map)
    }

    pub fn to_openclaw(&self, config: &SkillConfig) -> OpenClawConfig {
        formats::to_openclaw(config, &self.tool_map)
    }

    pub fn to_langchain(&self, config: &SkillConfig) -> LangChainConfig {
        formats::to_langchain(config, &self.tool_map)
    }

    pub fn to_claude_code(&self, config: &SkillConfig) -> Result<String> {
        formats::to_claude_code(config)
    }

    pub fn render(&self, config: &SkillConfig, format: TargetFormat) -> Result<String> {
        formats::render(config, &self.tool_map, format)
    }

    pub fn validate(&self, config: &SkillConfig) -> Vec<String> {
        crate::validate::validate(config, &self.tool_map)
    }
}

impl Default for SkillLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, crate::parse::Document, serde_yaml::Mapping};

    const SAMPLE: &str = "---\nname: string-test\ndescription: Test from string\n---\n\nContent\n";

    #[test]
    fn load_str_parses_frontmatter() {
        let config = SkillLoader::new().load_str(SAMPLE);
        assert_eq!(config.name, "string-test");
        assert_eq!(config.description, "Test from string");
        assert_eq!(config.content, "\nContent\n");
    }

    #[tokio::test]
    async fn load_reads_from_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("SKILL.md");
        std::fs::write(&path, SAMPLE).unwrap();

        let loader = SkillLoader::new();
        let config = loader.load(&path).await.unwrap();
        assert_eq!(config, loader.load_sync(&path).unwrap());
        assert_eq!(config.name, "string-test");
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing/SKILL.md");

        let err = SkillLoader::new().load(&path).await.unwrap_err();
        match err {
            Error::Read { path: reported, source } => {
                assert_eq!(reported, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            },
            other => panic!("expected read error, got {other:?}"),
        }
        assert!(SkillLoader::new().load_sync(&path).is_err());
    }

    #[test]
    fn custom_tool_map_is_used_by_renderers() {
        let loader = SkillLoader::new().with_tool_map(ToolMap::from_entries([
            ("WebSearch", "my_search"),
            ("WebFetch", "my_fetch"),
        ]));
        let config =
            loader.load_str("---\nname: t\ndescription: d\ntools: [WebSearch, WebFetch]\n---\n");
        assert_eq!(loader.to_agent_sdk(&config).tools, vec!["my_search", "my_fetch"]);
        assert_eq!(loader.to_langchain(&config).tools, vec!["my_search", "my_fetch"]);
        assert_eq!(loader.to_openclaw(&config).skills[0].tools[0].name, "my_search");
        assert!(loader.validate(&config).is_empty());
    }

    struct NoHeader;

    impl FrontmatterSplitter for NoHeader {
        fn split(&self, text: &str) -> Document {
            Document {
                metadata: Mapping::new(),
                body: text.to_string(),
            }
        }
    }

    #[test]
    fn splitter_can_be_swapped() {
        let loader = SkillLoader::new().with_splitter(NoHeader);
        let config = loader.load_str(SAMPLE);
        assert_eq!(config.name, "unknown");
        assert_eq!(config.content, SAMPLE);
    }

    #[test]
    fn claude_code_output_loads_back() {
        let loader = SkillLoader::new();
        let original = loader.load_str(
            "---\nname: round\ndescription: Trip\nversion: 3.1.0\nauthor: A\ntriggers: [go]\n\
             tools: [Bash]\n---\n## Execution Steps\nrun\n",
        );
        let reloaded = loader.load_str(&loader.to_claude_code(&original).unwrap());
        assert_eq!(reloaded, original);
    }
}
