//! [`battle_core::ActorOracle`] backed by in-memory maps.
use std::collections::HashMap;

use battle_core::{ActorOracle, ClassTemplate, MonsterTemplate};

#[derive(Debug, Default)]
pub struct ActorOracleImpl {
    classes: HashMap<String, ClassTemplate>,
    monsters: HashMap<String, MonsterTemplate>,
}

impl ActorOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(&mut self, template: ClassTemplate) {
        self.classes.insert(template.id.clone(), template);
    }

    pub fn add_monster(&mut self, template: MonsterTemplate) {
        self.monsters.insert(template.id.clone(), template);
    }
}

impl ActorOracle for ActorOracleImpl {
    fn class(&self, id: &str) -> Option<&ClassTemplate> {
        self.classes.get(id)
    }

    fn monster(&self, id: &str) -> Option<&MonsterTemplate> {
        self.monsters.get(id)
    }
}
