//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Class templates (data-driven via RON)
//! - Monster templates: standard, bosses and elites (data-driven via RON)
//! - Item catalogs: weapons, armors and runes (data-driven via RON)
//! - Affix, weapon passive, weapon art and class skill tables (data-driven via RON)
//! - Story scripts consulted at encounter boundaries (data-driven via RON)
//! - Combat configuration (data-driven via TOML)
//!
//! Content is consumed by runtime oracles and never appears in encounter state.
//!
//! All loaders use battle-core types directly with serde for RON/TOML deserialization.

pub mod story;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use story::{ScriptCondition, StoryScript};

#[cfg(feature = "loaders")]
pub use loaders::{
    AffixLoader, ClassLoader, ConfigLoader, ContentBundle, ContentFactory, ItemCatalog,
    ItemLoader, LoadResult, MonsterCatalog, MonsterLoader, SkillCatalog, SkillLoader,
    StoryLoader,
};
