use {
    serde_yaml::{Mapping, Value},
    tracing::warn,
};

use crate::types::SkillConfig;

/// A document split into its frontmatter mapping and markdown body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub metadata: Mapping,
    pub body: String,
}

impl Document {
    /// Normalise into a [`SkillConfig`], filling defaults.
    pub fn into_config(self) -> SkillConfig {
        SkillConfig::from_parts(&self.metadata, self.body)
    }
}

/// Splits a document into a structured header and the remaining text.
///
/// Splitting never fails: a missing or unreadable header yields an empty
/// mapping.
pub trait FrontmatterSplitter: Send + Sync {
    fn split(&self, text: &str) -> Document;
}

/// `---`-delimited YAML frontmatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFrontmatter;

impl FrontmatterSplitter for YamlFrontmatter {
    fn split(&self, text: &str) -> Document {
        let Some((frontmatter, body)) = split_frontmatter(text) else {
            return Document {
                metadata: Mapping::new(),
                body: text.to_string(),
            };
        };

        let metadata = match serde_yaml::from_str::<Value>(frontmatter) {
            Ok(Value::Mapping(mapping)) => mapping,
            Ok(Value::Null) => Mapping::new(),
            Ok(other) => {
                warn!(
                    kind = value_kind(&other),
                    "SKILL.md frontmatter is not a mapping, ignoring it"
                );
                Mapping::new()
            },
            Err(e) => {
                warn!(%e, "invalid SKILL.md frontmatter, ignoring it");
                Mapping::new()
            },
        };

        Document {
            metadata,
            body: body.to_string(),
        }
    }
}

/// Split content at `---` delimiters into (frontmatter, body).
///
/// The opening delimiter must be the first line; the block closes at the next
/// `---` or `...` line. The body is everything after the closing line, kept
/// verbatim. Returns `None` when either delimiter is missing.
pub fn split_frontmatter(text: &str) -> Option<(&str, &str)> {
    let content = text.strip_prefix('\u{feff}').unwrap_or(text);

    let open_end = content.find('\n')?;
    if content[..open_end].trim_end() != "---" {
        return None;
    }
    let rest = &content[open_end + 1..];

    let mut offset = 0;
    loop {
        let line_end = rest[offset..].find('\n').map(|i| offset + i);
        let line = &rest[offset..line_end.unwrap_or(rest.len())];
        if matches!(line.trim_end(), "---" | "...") {
            let body = line_end.map_or("", |end| &rest[end + 1..]);
            return Some((&rest[..offset], body));
        }
        offset = line_end? + 1;
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Document {
        YamlFrontmatter.split(text)
    }

    #[test]
    fn splits_header_and_body() {
        let doc = split("---\nname: commit\ndescription: Create git commits\n---\n\nRun `git add`.\n");
        assert_eq!(doc.metadata.get("name").unwrap().as_str(), Some("commit"));
        assert_eq!(
            doc.metadata.get("description").unwrap().as_str(),
            Some("Create git commits")
        );
        assert_eq!(doc.body, "\nRun `git add`.\n");
    }

    #[test]
    fn body_whitespace_is_preserved() {
        let doc = split("---\nname: x\n---\n  indented\n\n\ntrailing  \n");
        assert_eq!(doc.body, "  indented\n\n\ntrailing  \n");
    }

    #[test]
    fn no_frontmatter_keeps_whole_text() {
        let text = "# No frontmatter\nJust markdown.";
        let doc = split(text);
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, text);
    }

    #[test]
    fn missing_closing_delimiter_keeps_whole_text() {
        let text = "---\nname: test\nno closing\n";
        let doc = split(text);
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, text);
    }

    #[test]
    fn delimiter_must_open_the_document() {
        let text = "\n---\nname: late\n---\nbody";
        let doc = split(text);
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, text);
    }

    #[test]
    fn invalid_yaml_is_treated_as_absent() {
        let doc = split("---\nname: [unclosed\n---\nbody\n");
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, "body\n");
    }

    #[test]
    fn non_mapping_header_is_treated_as_absent() {
        let doc = split("---\n- just\n- a list\n---\nbody");
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, "body");
    }

    #[test]
    fn empty_header_is_empty_mapping() {
        let doc = split("---\n---\nbody");
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, "body");
    }

    #[test]
    fn dots_close_the_block_and_crlf_is_tolerated() {
        let doc = split("\u{feff}---\r\nname: dotted\r\n...\r\nbody\r\n");
        assert_eq!(doc.metadata.get("name").unwrap().as_str(), Some("dotted"));
        assert_eq!(doc.body, "body\r\n");
    }

    #[test]
    fn closing_delimiter_at_end_of_text() {
        let (frontmatter, body) = split_frontmatter("---\nname: x\n---").unwrap();
        assert_eq!(frontmatter, "name: x\n");
        assert_eq!(body, "");
    }

    #[test]
    fn horizontal_rule_in_body_is_kept() {
        let doc = split("---\nname: x\n---\nabove\n---\nbelow\n");
        assert_eq!(doc.body, "above\n---\nbelow\n");
    }

    #[test]
    fn into_config_applies_defaults() {
        let config = split("plain body").into_config();
        assert_eq!(config.name, "unknown");
        assert_eq!(config.content, "plain body");
    }
}
