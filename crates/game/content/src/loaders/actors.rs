//! Class and monster catalog loaders.

use std::path::Path;

use battle_core::{ClassTemplate, MonsterTemplate};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_ron};

/// Class catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassCatalog {
    pub classes: Vec<ClassTemplate>,
}

/// Loader for class templates from RON files.
pub struct ClassLoader;

impl ClassLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<ClassTemplate>> {
        let catalog: ClassCatalog = read_ron(path, "class catalog")?;
        Ok(catalog.classes)
    }
}

/// Monster catalog structure for RON files.
///
/// The three pools share one id namespace; the split only matters to
/// spawners choosing what to fight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonsterCatalog {
    pub standard: Vec<MonsterTemplate>,
    pub bosses: Vec<MonsterTemplate>,
    pub elites: Vec<MonsterTemplate>,
}

impl MonsterCatalog {
    /// Every template, standard pool first.
    pub fn iter(&self) -> impl Iterator<Item = &MonsterTemplate> {
        self.standard
            .iter()
            .chain(self.bosses.iter())
            .chain(self.elites.iter())
    }

    pub fn len(&self) -> usize {
        self.standard.len() + self.bosses.len() + self.elites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Loader for monster templates from RON files.
pub struct MonsterLoader;

impl MonsterLoader {
    pub fn load(path: &Path) -> LoadResult<MonsterCatalog> {
        read_ron(path, "monster catalog")
    }
}
