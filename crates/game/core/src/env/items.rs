use crate::ledger::BuffKind;
use crate::passive::PassiveEffect;
use crate::state::Attributes;

/// Read-only equipment and affix catalog.
pub trait ItemOracle: Send + Sync {
    fn weapon(&self, id: &str) -> Option<&WeaponDefinition>;

    fn armor(&self, id: &str) -> Option<&ArmorDefinition>;

    fn affix(&self, id: &str) -> Option<&AffixDefinition>;

    fn rune(&self, id: &str) -> Option<&RuneDefinition>;
}

/// Weapon subtype. Selects the weapon art.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WeaponCategory {
    Sword,
    Staff,
    Dagger,
    Bow,
    Mace,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponDefinition {
    pub id: String,
    pub name: String,
    pub category: WeaponCategory,
    pub atk: u32,
    pub max_sockets: u8,
    /// Fixed weapon passive, keyed into [`super::SkillOracle::weapon_passive`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub passive: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorDefinition {
    pub id: String,
    pub name: String,
    pub def: u32,
    pub max_sockets: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: ArmorEffect,
}

/// Built-in armor properties: flat bonuses, reactions when struck, and
/// affixes that are always active regardless of sockets.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArmorEffect {
    pub bonus: Attributes,
    pub bonus_dodge: f64,
    pub bonus_crit_chance: f64,
    pub bonus_crit_damage: f64,
    pub built_in_affixes: Vec<String>,
    pub on_hit_buff: Option<BuffKind>,
    pub on_hit_buff_millis: Option<u32>,
    pub on_hit_heal_ratio: f64,
    pub on_hit_shield_refill_chance: f64,
    pub on_hit_freeze_chance: f64,
    pub death_save: bool,
}

/// Base attribute targeted by a stat affix.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AttributeKind {
    Str,
    Agi,
    Vit,
    Int,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffixDefinition {
    pub id: String,
    pub name: String,
    pub kind: AffixKind,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AffixKind {
    /// Flat bonus added to a base attribute before derivation.
    Stat { attribute: AttributeKind, value: u32 },
    /// Named passive resolved through the passive registry.
    Passive { effect: PassiveEffect, value: f64 },
}

/// Socketable material that grants an affix when enchanted into an item.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuneDefinition {
    pub id: String,
    pub name: String,
    pub affix: String,
}
