//! [`battle_core::SkillOracle`] backed by in-memory maps.
use std::collections::HashMap;

use battle_content::SkillCatalog;
use battle_core::{
    ClassSkillDefinition, SkillOracle, WeaponArtDefinition, WeaponCategory,
    WeaponPassiveDefinition,
};

#[derive(Debug, Default)]
pub struct SkillOracleImpl {
    passives: HashMap<String, WeaponPassiveDefinition>,
    arts: HashMap<WeaponCategory, WeaponArtDefinition>,
    class_skills: HashMap<String, ClassSkillDefinition>,
}

impl SkillOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_catalog(catalog: &SkillCatalog) -> Self {
        let mut oracle = Self::new();
        catalog.passives.iter().cloned().for_each(|p| oracle.add_passive(p));
        catalog.arts.iter().cloned().for_each(|a| oracle.add_art(a));
        catalog
            .class_skills
            .iter()
            .cloned()
            .for_each(|s| oracle.add_class_skill(s));
        oracle
    }

    pub fn add_passive(&mut self, def: WeaponPassiveDefinition) {
        self.passives.insert(def.id.clone(), def);
    }

    /// Replaces any art already registered for the same category.
    pub fn add_art(&mut self, def: WeaponArtDefinition) {
        self.arts.insert(def.category, def);
    }

    pub fn add_class_skill(&mut self, def: ClassSkillDefinition) {
        self.class_skills.insert(def.id.clone(), def);
    }
}

impl SkillOracle for SkillOracleImpl {
    fn weapon_passive(&self, id: &str) -> Option<&WeaponPassiveDefinition> {
        self.passives.get(id)
    }

    fn weapon_art(&self, category: WeaponCategory) -> Option<&WeaponArtDefinition> {
        self.arts.get(&category)
    }

    fn class_skill(&self, id: &str) -> Option<&ClassSkillDefinition> {
        self.class_skills.get(id)
    }
}
