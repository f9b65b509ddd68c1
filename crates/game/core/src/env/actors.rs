use crate::ledger::{BuffKind, StatusKind};
use crate::state::{Attributes, OpponentRole};

/// Read-only class and monster templates.
pub trait ActorOracle: Send + Sync {
    fn class(&self, id: &str) -> Option<&ClassTemplate>;

    fn monster(&self, id: &str) -> Option<&MonsterTemplate>;
}

/// Starting point of a player character.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassTemplate {
    pub id: String,
    pub name: String,
    pub base_hp: u32,
    pub attributes: Attributes,
    /// Class skill id, keyed into [`super::SkillOracle::class_skill`].
    pub skill: String,
    /// Rogue-style classes add this to basic-attack crit chance.
    #[cfg_attr(feature = "serde", serde(default))]
    pub crit_bonus: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub starting_weapon: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub starting_armor: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub starting_potions: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub starting_gold: u32,
}

/// Opponent template. A fresh [`crate::OpponentState`] is spawned from it per encounter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterTemplate {
    pub id: String,
    pub name: String,
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub speed: u32,
    pub gold: u32,
    pub exp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub role: OpponentRole,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_boss: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub on_hit: OnHitTable,
    /// Inclusive floor range used by external spawners; the engine ignores it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub floor_range: Option<(u32, u32)>,
}

/// Effects an opponent may inflict when its attack lands.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OnHitTable {
    pub statuses: Vec<StatusChance>,
    pub self_buffs: Vec<BuffChance>,
}

impl OnHitTable {
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty() && self.self_buffs.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusChance {
    pub kind: StatusKind,
    pub chance: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuffChance {
    pub kind: BuffKind,
    pub chance: f64,
}
