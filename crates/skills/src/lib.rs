//! Skill conversion: load a `SKILL.md` (YAML frontmatter plus markdown
//! instructions) and re-render it for other agent platforms.
//!
//! The pipeline is strictly one-directional: raw text is split by
//! [`parse`], normalised into a [`types::SkillConfig`] (with
//! [`steps`] extracting the execution steps), then handed to one of the
//! renderers in [`formats`], which translate tool identifiers through a
//! read-only [`tool_map::ToolMap`].

pub mod error;
pub mod formats;
pub mod loader;
pub mod parse;
pub mod steps;
pub mod tool_map;
pub mod types;
pub mod validate;

pub use {
    error::{Error, Result},
    formats::TargetFormat,
    loader::SkillLoader,
    tool_map::ToolMap,
    types::SkillConfig,
};
