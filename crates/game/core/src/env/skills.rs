use crate::env::WeaponCategory;
use crate::ledger::{BuffKind, StatusKind};

/// Read-only catalog of weapon passives, weapon arts and class skills.
pub trait SkillOracle: Send + Sync {
    fn weapon_passive(&self, id: &str) -> Option<&WeaponPassiveDefinition>;

    fn weapon_art(&self, category: WeaponCategory) -> Option<&WeaponArtDefinition>;

    fn class_skill(&self, id: &str) -> Option<&ClassSkillDefinition>;
}

/// How a weapon passive engages on a basic attack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PassiveMode {
    /// Fires with `trigger_rate` and replaces the hit's base damage.
    #[default]
    Trigger,
    /// Applies its riders on every hit.
    Continuous,
}

/// Weapon passive: a probabilistic damage replacement or a continuous on-hit effect.
///
/// # Trigger damage
///
/// ```text
/// physical = atk × atk_multiplier
/// magical  = matk × matk_multiplier
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponPassiveDefinition {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: PassiveMode,
    #[cfg_attr(feature = "serde", serde(default))]
    pub trigger_rate: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub atk_multiplier: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub matk_multiplier: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rider: PassiveRider,
}

/// Secondary effects carried by a weapon passive.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PassiveRider {
    pub apply_status: Option<StatusKind>,
    pub status_chance: f64,
    pub status_millis: Option<u32>,
    pub def_penetration: f64,
    /// Gauge granted to the player when the hit crits.
    pub atb_on_crit: f64,
    /// Target defense amplifies damage instead of mitigating it.
    pub defense_reverse: bool,
    pub agi_atk_ratio: f64,
    pub heal_int_ratio: f64,
    /// Continuous mode only: magic damage `matk × ratio` added to every hit.
    pub bonus_matk_ratio: f64,
    /// Added to dodge chance while the weapon is equipped.
    pub dodge_bonus: f64,
}

impl Default for PassiveRider {
    fn default() -> Self {
        Self {
            apply_status: None,
            status_chance: 1.0,
            status_millis: None,
            def_penetration: 0.0,
            atb_on_crit: 0.0,
            defense_reverse: false,
            agi_atk_ratio: 0.0,
            heal_int_ratio: 0.0,
            bonus_matk_ratio: 0.0,
            dodge_bonus: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponArtDefinition {
    pub id: String,
    pub name: String,
    pub category: WeaponCategory,
    pub cooldown_millis: u32,
    pub effect: ArtEffect,
}

/// What a weapon art does when used.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArtEffect {
    /// Unmitigated `atk × atk_ratio` strike with an optional status rider.
    Strike {
        atk_ratio: f64,
        status: Option<StatusKind>,
        status_chance: f64,
    },
    /// Shield gain of `matk × matk_ratio`.
    Barrier { matk_ratio: f64 },
    /// Grants a consumable stance buff.
    Stance { buff: BuffKind },
}

/// Class skill. Damage is the sum of the weighted terms, floored:
///
/// ```text
/// damage = atk × atk_ratio + matk × matk_ratio + def × def_ratio
///        + hp_cost × hp_cost_damage_ratio
/// hp_cost = floor(current_hp × hp_cost_ratio)
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassSkillDefinition {
    pub id: String,
    pub name: String,
    pub cooldown_millis: Option<u32>,
    pub atk_ratio: f64,
    pub matk_ratio: f64,
    pub def_ratio: f64,
    pub hp_cost_ratio: f64,
    pub hp_cost_damage_ratio: f64,
    /// Applied to the target in order; repeats add stacks.
    pub statuses: Vec<StatusKind>,
    pub show_crit: bool,
    /// Gauge removed from the opponent after the skill resolves.
    pub opponent_gauge_pushback: f64,
}
