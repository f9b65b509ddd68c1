//! Content loaders for reading game data from files.
//!
//! Each loader converts one RON/TOML file into battle-core definition types.
//! [`ContentFactory`] loads the whole data directory and
//! [`ContentBundle::validate`] rejects dangling references before any oracle
//! is built from it.

pub mod actors;
pub mod affix;
pub mod bundle;
pub mod config;
pub mod factory;
pub mod item;
pub mod skill;
pub mod story;

pub use actors::{ClassCatalog, ClassLoader, MonsterCatalog, MonsterLoader};
pub use affix::{AffixCatalog, AffixLoader};
pub use bundle::ContentBundle;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::{ItemCatalog, ItemLoader};
pub use skill::{SkillCatalog, SkillLoader};
pub use story::{StoryCatalog, StoryLoader};

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}

/// Reads and parses a RON catalog, naming the file on failure.
pub(crate) fn read_ron<T>(path: &Path, what: &str) -> LoadResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = read_file(path)?;
    let parsed = ron::from_str(&content)
        .with_context(|| format!("Failed to parse {what} RON in {}", path.display()))?;
    tracing::debug!(target: "content::loader", path = %path.display(), "loaded {what}");
    Ok(parsed)
}
