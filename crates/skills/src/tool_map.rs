//! Translation of source tool identifiers into target-platform identifiers.

use std::{collections::HashMap, sync::LazyLock};

/// Built-in translations, source identifier first.
const BUILTIN_TOOLS: &[(&str, &str)] = &[
    // Claude Code → Agent SDK
    ("WebSearch", "web_search"),
    ("WebFetch", "web_fetch"),
    ("Read", "read_file"),
    ("Write", "write_file"),
    ("Edit", "edit_file"),
    ("Grep", "grep"),
    ("Bash", "bash_command"),
    ("Glob", "glob"),
    ("AskUserQuestion", "ask_user_question"),
    // Generic spellings
    ("web-search", "web_search"),
    ("web-fetch", "web_fetch"),
];

static BUILTIN: LazyLock<ToolMap> =
    LazyLock::new(|| ToolMap::from_entries(BUILTIN_TOOLS.iter().copied()));

/// Read-only lookup table from source to target tool identifiers.
///
/// Lookups are exact and case-sensitive; identifiers without an entry pass
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolMap {
    entries: HashMap<String, String>,
}

impl ToolMap {
    /// The shared built-in table, built on first use.
    pub fn builtin() -> &'static ToolMap {
        &BUILTIN
    }

    /// A table holding only the given entries.
    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// The built-in table extended by `overrides`; an override replaces a
    /// built-in entry with the same source identifier.
    pub fn with_overrides<K, V>(overrides: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries = BUILTIN.entries.clone();
        entries.extend(overrides.into_iter().map(|(k, v)| (k.into(), v.into())));
        Self { entries }
    }

    /// Translate one identifier, falling back to the identifier itself.
    pub fn map<'a>(&'a self, tool: &'a str) -> &'a str {
        self.entries.get(tool).map_or(tool, String::as_str)
    }

    /// Translate every identifier, keeping order and duplicates.
    pub fn map_all<S: AsRef<str>>(&self, tools: &[S]) -> Vec<String> {
        tools
            .iter()
            .map(|t| self.map(t.as_ref()).to_string())
            .collect()
    }

    pub fn contains(&self, tool: &str) -> bool {
        self.entries.contains_key(tool)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ToolMap {
    fn default() -> Self {
        BUILTIN.clone()
    }
}
