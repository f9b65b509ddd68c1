//! Derived combat stats.
//!
//! Two stages: flat equipment bonuses are added to the base attributes, then
//! each final attribute goes through the shared soft-cap [`correction`] curve.
//!
//! ```text
//! atk    = floor((10 + weapon + str_bonus) × (1 + str_c))
//! matk   = floor((10 + int_bonus) × (1 + int_c))
//! def    = floor((5 + armor + vit) × (1 + 0.5 vit_c + 0.2 str_c))
//! speed  = floor(20 × (1 + 0.05 agi) × (1 + speed_haste))
//! max_hp = floor(base_max_hp × (1 + 1.5 vit_c))
//! shield = floor(150 × int_c + int)
//! ```

use crate::combat::damage::floor_u32;
use crate::passive::PassiveEffect;
use crate::state::{Attributes, PlayerState};

use super::curve::{correction, int_matk_bonus, str_atk_bonus};
use super::loadout::Loadout;

const BASE_ATK: u32 = 10;
const BASE_MATK: u32 = 10;
const BASE_DEF: u32 = 5;
const BASE_SPEED: f64 = 20.0;
const SHIELD_SCALE: f64 = 150.0;
const BASE_CRIT_CHANCE: f64 = 0.05;
const BASE_CRIT_DAMAGE: f64 = 1.5;
const MIN_DODGE: f64 = 0.05;
const MAX_DODGE: f64 = 0.95;

/// Effective player stats for one resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedStats {
    /// Base attributes plus equipment bonuses.
    pub attributes: Attributes,
    pub atk: u32,
    pub matk: u32,
    pub def: u32,
    pub speed: u32,
    pub max_hp: u32,
    pub max_shield: u32,
    pub crit_chance: f64,
    pub crit_damage: f64,
    pub dodge_chance: f64,
}

/// Derives the player's combat stats. Pure; call as often as needed.
///
/// Active buffs scale attack and defense (morale, fortify, berserk). Their
/// speed contribution is applied by the tick driver instead.
pub fn derive_stats(player: &PlayerState, loadout: &Loadout<'_>) -> DerivedStats {
    let attrs = player.attributes.saturating_add(loadout.attribute_bonus());

    let str_c = correction(attrs.strength);
    let agi_c = correction(attrs.agility);
    let vit_c = correction(attrs.vitality);
    let int_c = correction(attrs.intellect);

    let base_atk = BASE_ATK
        .saturating_add(loadout.refined_weapon_atk())
        .saturating_add(str_atk_bonus(attrs.strength));
    let base_matk = BASE_MATK.saturating_add(int_matk_bonus(attrs.intellect));
    let base_def = BASE_DEF
        .saturating_add(loadout.refined_armor_def())
        .saturating_add(attrs.vitality);

    let mods = player.buffs.modifiers();
    let atk = floor_u32(f64::from(base_atk) * (1.0 + str_c) * mods.atk_mult);
    let matk = floor_u32(f64::from(base_matk) * (1.0 + int_c));
    let def = floor_u32(f64::from(base_def) * (1.0 + 0.5 * vit_c + 0.2 * str_c) * mods.def_mult);

    let haste = loadout.stacked(PassiveEffect::SpeedHaste).value.max(0.0);
    let speed = floor_u32(BASE_SPEED * (1.0 + 0.05 * f64::from(attrs.agility)) * (1.0 + haste));

    let max_hp = floor_u32(f64::from(player.base_max_hp) * (1.0 + 1.5 * vit_c));
    let max_shield = floor_u32(int_c * SHIELD_SCALE + f64::from(attrs.intellect));

    let armor = loadout.armor_effect();
    let armor_crit = armor.map_or(0.0, |effect| effect.bonus_crit_chance);
    let armor_crit_damage = armor.map_or(0.0, |effect| effect.bonus_crit_damage);
    let armor_dodge = armor.map_or(0.0, |effect| effect.bonus_dodge);

    let crit_chance = (BASE_CRIT_CHANCE
        * (1.0 + 0.1 * f64::from(attrs.agility) + 0.025 * f64::from(attrs.intellect))
        + armor_crit
        + loadout.stacked(PassiveEffect::CritChance).value)
        .clamp(0.0, 1.0);
    let crit_damage =
        BASE_CRIT_DAMAGE + armor_crit_damage + loadout.stacked(PassiveEffect::CritDamage).value;
    let dodge_chance = clamp_dodge(
        0.4 * agi_c + 0.1 * int_c + armor_dodge + loadout.stacked(PassiveEffect::DodgeChance).value,
    );

    DerivedStats {
        attributes: attrs,
        atk,
        matk,
        def,
        speed,
        max_hp,
        max_shield,
        crit_chance,
        crit_damage,
        dodge_chance,
    }
}

/// Dodge is always within `[0.05, 0.95]`.
pub fn clamp_dodge(chance: f64) -> f64 {
    if chance.is_nan() {
        return MIN_DODGE;
    }
    chance.clamp(MIN_DODGE, MAX_DODGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::BuffKind;
    use crate::state::Inventory;
    use crate::{BuffLedger, StatusLedger};

    fn player(attributes: Attributes, base_max_hp: u32) -> PlayerState {
        PlayerState {
            name: "hero".into(),
            class_id: "warrior".into(),
            attributes,
            base_max_hp,
            hp: base_max_hp,
            shield: 0,
            weapon: None,
            armor: None,
            statuses: StatusLedger::empty(),
            buffs: BuffLedger::empty(),
            potions: 0,
            max_damage: 0,
            gold: 0,
            inventory: Inventory::default(),
            flags: Default::default(),
        }
    }

    #[test]
    fn unarmed_warrior_baseline() {
        let stats = derive_stats(&player(Attributes::new(5, 10, 6, 2), 120), &Loadout::default());
        // atk: (10 + 5) × 1.125
        assert_eq!(stats.atk, 16);
        // matk: (10 + 4) × 1.05
        assert_eq!(stats.matk, 14);
        // def: (5 + 6) × (1 + 0.075 + 0.025)
        assert_eq!(stats.def, 12);
        // speed: 20 × 1.5
        assert_eq!(stats.speed, 30);
        // max hp: 120 × 1.225
        assert_eq!(stats.max_hp, 147);
        // shield: 150 × 0.05 + 2
        assert_eq!(stats.max_shield, 9);
        assert!((stats.crit_damage - 1.5).abs() < 1e-9);
    }

    #[test]
    fn chances_stay_clamped_for_extreme_attributes() {
        for points in [0, 1, 20, 60, 500, 100_000] {
            let stats = derive_stats(
                &player(Attributes::new(points, points, points, points), 100),
                &Loadout::default(),
            );
            assert!((0.0..=1.0).contains(&stats.crit_chance));
            assert!((0.05..=0.95).contains(&stats.dodge_chance));
        }
        assert!((clamp_dodge(f64::NAN) - 0.05).abs() < 1e-9);
        assert!((clamp_dodge(-3.0) - 0.05).abs() < 1e-9);
        assert!((clamp_dodge(7.0) - 0.95).abs() < 1e-9);
    }

    #[test]
    fn morale_raises_attack() {
        let mut hero = player(Attributes::new(0, 0, 0, 0), 100);
        let plain = derive_stats(&hero, &Loadout::default());
        hero.buffs.apply(BuffKind::Morale, 4_000, false);
        let boosted = derive_stats(&hero, &Loadout::default());
        assert_eq!(plain.atk, 10);
        assert_eq!(boosted.atk, 13);
    }
}
