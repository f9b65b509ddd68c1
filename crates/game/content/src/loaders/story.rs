//! Story script loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_ron};
use crate::story::StoryScript;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryCatalog {
    pub scripts: Vec<StoryScript>,
}

pub struct StoryLoader;

impl StoryLoader {
    /// Load story scripts in file order; callers sort by priority.
    pub fn load(path: &Path) -> LoadResult<Vec<StoryScript>> {
        let catalog: StoryCatalog = read_ron(path, "story scripts")?;
        Ok(catalog.scripts)
    }
}
