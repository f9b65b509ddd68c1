//! Skill table loader: weapon passives, weapon arts and class skills.

use std::path::Path;

use battle_core::{ClassSkillDefinition, WeaponArtDefinition, WeaponPassiveDefinition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_ron};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCatalog {
    pub passives: Vec<WeaponPassiveDefinition>,
    /// At most one art per weapon category.
    pub arts: Vec<WeaponArtDefinition>,
    pub class_skills: Vec<ClassSkillDefinition>,
}

pub struct SkillLoader;

impl SkillLoader {
    pub fn load(path: &Path) -> LoadResult<SkillCatalog> {
        read_ron(path, "skill table")
    }
}
