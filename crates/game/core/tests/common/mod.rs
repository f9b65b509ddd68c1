#![allow(dead_code)]

use std::collections::{BTreeSet, HashMap};

use battle_core::{
    ActorOracle, AffixDefinition, AffixKind, ArmorDefinition, ArmorEffect, Attributes, BattleEnv,
    BuffLedger, ClassSkillDefinition, ClassTemplate, Inventory, ItemOracle, ItemState,
    MonsterTemplate, PassiveEffect, PlayerState, RngOracle, RuneDefinition, SkillOracle,
    StatusLedger, WeaponArtDefinition, WeaponCategory, WeaponDefinition, WeaponPassiveDefinition,
};

/// In-memory content for integration tests.
#[derive(Default)]
pub struct Catalog {
    pub weapons: HashMap<String, WeaponDefinition>,
    pub armors: HashMap<String, ArmorDefinition>,
    pub affixes: HashMap<String, AffixDefinition>,
    pub runes: HashMap<String, RuneDefinition>,
    pub passives: HashMap<String, WeaponPassiveDefinition>,
    pub arts: HashMap<WeaponCategory, WeaponArtDefinition>,
    pub skills: HashMap<String, ClassSkillDefinition>,
    pub classes: HashMap<String, ClassTemplate>,
    pub monsters: HashMap<String, MonsterTemplate>,
}

impl ItemOracle for Catalog {
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

impl SkillOracle for Catalog {
    fn weapon_passive(&self, id: &str) -> Option<&WeaponPassiveDefinition> {
        self.passives.get(id)
    }
    fn weapon_art(&self, category: WeaponCategory) -> Option<&WeaponArtDefinition> {
        self.arts.get(&category)
    }
    fn class_skill(&self, id: &str) -> Option<&ClassSkillDefinition> {
        self.skills.get(id)
    }
}

impl ActorOracle for Catalog {
    fn class(&self, id: &str) -> Option<&ClassTemplate> {
        self.classes.get(id)
    }
    fn monster(&self, id: &str) -> Option<&MonsterTemplate> {
        self.monsters.get(id)
    }
}

impl Catalog {
    /// One class (`fighter`, skill `slam`) and nothing else.
    pub fn basic() -> Self {
        let mut catalog = Self::default();
        catalog.classes.insert(
            "fighter".into(),
            ClassTemplate {
                id: "fighter".into(),
                name: "Fighter".into(),
                base_hp: 100,
                attributes: Attributes::default(),
                skill: "slam".into(),
                crit_bonus: 0.0,
                starting_weapon: None,
                starting_armor: None,
                starting_potions: 2,
                starting_gold: 0,
            },
        );
        catalog.skills.insert(
            "slam".into(),
            ClassSkillDefinition {
                id: "slam".into(),
                name: "Slam".into(),
                atk_ratio: 1.5,
                ..ClassSkillDefinition::default()
            },
        );
        catalog
    }

    pub fn with_passive_affix(mut self, id: &str, effect: PassiveEffect, value: f64) -> Self {
        self.affixes.insert(
            id.into(),
            AffixDefinition {
                id: id.into(),
                name: id.into(),
                kind: AffixKind::Passive { effect, value },
            },
        );
        self
    }

    pub fn with_armor(mut self, id: &str, def: u32, effect: ArmorEffect) -> Self {
        self.armors.insert(
            id.into(),
            ArmorDefinition {
                id: id.into(),
                name: id.into(),
                def,
                max_sockets: 2,
                effect,
            },
        );
        self
    }

    pub fn env<'a>(&'a self, rng: &'a dyn RngOracle) -> BattleEnv<'a> {
        BattleEnv::new(self, self, self, rng)
    }
}

/// Unequipped fighter with zero attributes: atk 10, def 5, speed 20.
pub fn fighter(hp: u32) -> PlayerState {
    PlayerState {
        name: "Aria".into(),
        class_id: "fighter".into(),
        attributes: Attributes::default(),
        base_max_hp: hp,
        hp,
        shield: 0,
        weapon: None,
        armor: None,
        statuses: StatusLedger::empty(),
        buffs: BuffLedger::empty(),
        potions: 2,
        max_damage: 0,
        gold: 0,
        inventory: Inventory::default(),
        flags: BTreeSet::new(),
    }
}

pub fn wearing(mut player: PlayerState, armor: &str, affixes: &[&str]) -> PlayerState {
    let mut item = ItemState::new(armor, 0);
    for affix in affixes {
        item = item.with_affix(*affix);
    }
    player.armor = Some(item);
    player
}
