//! Loads every content table from one directory.

use std::path::{Path, PathBuf};

use anyhow::Context;
use battle_core::{AffixDefinition, ClassTemplate, GameConfig};

use crate::loaders::{
    AffixLoader, ClassLoader, ConfigLoader, ContentBundle, ItemCatalog, ItemLoader, LoadResult,
    MonsterCatalog, MonsterLoader, SkillCatalog, SkillLoader, StoryLoader,
};
use crate::story::StoryScript;

/// Reads `config.toml` plus `classes`, `monsters`, `items`, `affixes`,
/// `skills` and an optional `story` table (all `.ron`) from `root`.
pub struct ContentFactory {
    root: PathBuf,
}

impl ContentFactory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ContentFactory { root: root.into() }
    }

    /// Factory over the data directory shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load combat configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.root.join("config.toml"))
    }

    pub fn load_classes(&self) -> LoadResult<Vec<ClassTemplate>> {
        ClassLoader::load(&self.root.join("classes.ron"))
    }

    pub fn load_monsters(&self) -> LoadResult<MonsterCatalog> {
        MonsterLoader::load(&self.root.join("monsters.ron"))
    }

    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        ItemLoader::load(&self.root.join("items.ron"))
    }

    pub fn load_affixes(&self) -> LoadResult<Vec<AffixDefinition>> {
        AffixLoader::load(&self.root.join("affixes.ron"))
    }

    pub fn load_skills(&self) -> LoadResult<SkillCatalog> {
        SkillLoader::load(&self.root.join("skills.ron"))
    }

    /// Load story scripts from `story.ron`, or none when the file is absent.
    pub fn load_story(&self) -> LoadResult<Vec<StoryScript>> {
        let path = self.root.join("story.ron");
        if !path.exists() {
            tracing::debug!(target: "content::loader", path = %path.display(), "no story scripts");
            return Ok(Vec::new());
        }
        StoryLoader::load(&path)
    }

    /// Load every table and validate cross references.
    pub fn load_bundle(&self) -> LoadResult<ContentBundle> {
        let bundle = ContentBundle {
            config: self.load_config()?,
            classes: self.load_classes()?,
            monsters: self.load_monsters()?,
            items: self.load_items()?,
            affixes: self.load_affixes()?,
            skills: self.load_skills()?,
            story: self.load_story()?,
        };
        bundle
            .validate()
            .with_context(|| format!("invalid content in {}", self.root.display()))?;

        tracing::info!(
            target: "content::loader",
            classes = bundle.classes.len(),
            monsters = bundle.monsters.len(),
            weapons = bundle.items.weapons.len(),
            armors = bundle.items.armors.len(),
            affixes = bundle.affixes.len(),
            scripts = bundle.story.len(),
            "content loaded"
        );
        Ok(bundle)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
