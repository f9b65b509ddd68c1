//! Item catalog loader.

use std::path::Path;

use battle_core::{ArmorDefinition, RuneDefinition, WeaponDefinition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_ron};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemCatalog {
    pub weapons: Vec<WeaponDefinition>,
    pub armors: Vec<ArmorDefinition>,
    pub runes: Vec<RuneDefinition>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load weapons, armors and runes from a RON file.
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        read_ron(path, "item catalog")
    }
}
