//! Affix table loader.

use std::path::Path;

use battle_core::AffixDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_ron};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffixCatalog {
    pub affixes: Vec<AffixDefinition>,
}

/// Loader for stat and passive affixes from RON files.
pub struct AffixLoader;

impl AffixLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<AffixDefinition>> {
        let catalog: AffixCatalog = read_ron(path, "affix table")?;
        Ok(catalog.affixes)
    }
}
