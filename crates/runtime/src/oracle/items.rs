//! [`battle_core::ItemOracle`] backed by in-memory maps.
use std::collections::HashMap;

use battle_content::ItemCatalog;
use battle_core::{
    AffixDefinition, ArmorDefinition, ItemOracle, RuneDefinition, WeaponDefinition,
};

/// ItemOracle implementation with static equipment, affix and rune definitions
#[derive(Debug, Default)]
pub struct ItemOracleImpl {
    weapons: HashMap<String, WeaponDefinition>,
    armors: HashMap<String, ArmorDefinition>,
    affixes: HashMap<String, AffixDefinition>,
    runes: HashMap<String, RuneDefinition>,
}

impl ItemOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_catalog(catalog: &ItemCatalog, affixes: &[AffixDefinition]) -> Self {
        let mut oracle = Self::new();
        catalog.weapons.iter().cloned().for_each(|w| oracle.add_weapon(w));
        catalog.armors.iter().cloned().for_each(|a| oracle.add_armor(a));
        catalog.runes.iter().cloned().for_each(|r| oracle.add_rune(r));
        affixes.iter().cloned().for_each(|a| oracle.add_affix(a));
        oracle
    }

    pub fn add_weapon(&mut self, def: WeaponDefinition) {
        self.weapons.insert(def.id.clone(), def);
    }

    pub fn add_armor(&mut self, def: ArmorDefinition) {
        self.armors.insert(def.id.clone(), def);
    }

    pub fn add_affix(&mut self, def: AffixDefinition) {
        self.affixes.insert(def.id.clone(), def);
    }

    pub fn add_rune(&mut self, def: RuneDefinition) {
        self.runes.insert(def.id.clone(), def);
    }
}

impl ItemOracle for ItemOracleImpl {
    fn weapon(&self, id: &str) -> Option<&WeaponDefinition> {
        self.weapons.get(id)
    }

    fn armor(&self, id: &str) -> Option<&ArmorDefinition> {
        self.armors.get(id)
    }

    fn affix(&self, id: &str) -> Option<&AffixDefinition> {
        self.affixes.get(id)
    }

    fn rune(&self, id: &str) -> Option<&RuneDefinition> {
        self.runes.get(id)
    }
}
