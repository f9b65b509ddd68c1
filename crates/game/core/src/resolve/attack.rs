//! Player basic attack.

use super::{Combat, Duel, bleed_on_action};
use crate::combat::damage::floor_u32;
use crate::combat::{
    ActionOutcome, FloatingText, FloatingTextKind, HitModifiers, Side, resolve_hit,
};
use crate::env::{PassiveMode, Rolls};
use crate::ledger::{BuffKind, StatusKind};
use crate::passive::{PassiveEffect, PassivePhase};
use crate::state::Combatant;

/// Hit-level effects gathered from the weapon passive before damage is computed.
#[derive(Clone, Copy, Debug, Default)]
struct PassiveRoll {
    physical: Option<f64>,
    magical: f64,
    status: Option<(StatusKind, Option<u32>)>,
    penetration: f64,
    atb_on_crit: f64,
    defense_reverse: bool,
    agi_atk_ratio: f64,
    heal_int_ratio: f64,
}

/// Resolves a basic attack, up to two hits.
///
/// # Order
///
/// ```text
/// blocked?        → no-op
/// bleed recoil    → abort if the player dies
/// hit count       → double strike (consumed) or double_attack chance
/// per hit         → passive roll, crit, burn/execute, mitigation, shatter,
///                   rider status, on-hit registry, int heal
/// ```
///
/// The combo stops as soon as the opponent dies.
pub fn basic_attack(combat: Combat<'_>, rolls: Rolls<'_>) -> ActionOutcome {
    if combat.player.is_action_blocked() {
        return ActionOutcome::noop(format!("{} cannot act!", combat.player.name));
    }

    let mut duel = Duel::begin(combat, rolls);
    if bleed_on_action(&mut duel, Side::Player) {
        duel.out.log(format!("{} collapses from blood loss.", duel.player.name));
        return duel.finish();
    }

    let hits = hit_count(&mut duel);
    let mut total = 0u32;
    for hit in 1..=hits {
        total = total.saturating_add(strike(&mut duel, hit));
        if !duel.opponent_alive() {
            duel.out.log(format!("{} is defeated!", duel.opponent.name));
            break;
        }
    }
    duel.record_damage(total);
    duel.finish()
}

fn hit_count(duel: &mut Duel<'_>) -> u8 {
    if duel.player.buffs.has(BuffKind::DoubleStrike) {
        duel.player.buffs.consume(BuffKind::DoubleStrike);
        duel.out.float(FloatingText::labeled(
            FloatingTextKind::Buff,
            Side::Player,
            BuffKind::DoubleStrike.as_ref(),
        ));
        duel.out.log("Shadow strike: attacking twice!");
        return 2;
    }

    let double_attack = duel.loadout().stacked(PassiveEffect::DoubleAttack);
    if double_attack.is_active() && duel.rolls.chance(double_attack.chance()) {
        duel.out.float(FloatingText::labeled(
            FloatingTextKind::Buff,
            Side::Player,
            PassiveEffect::DoubleAttack.as_ref(),
        ));
        duel.out.log("Twin blades: attacking twice!");
        return 2;
    }
    1
}

fn roll_passive(duel: &mut Duel<'_>) -> PassiveRoll {
    let mut roll = PassiveRoll::default();
    let Some(passive) = duel.loadout().weapon_passive() else {
        return roll;
    };
    let stats = duel.stats();
    let rider = &passive.rider;

    match passive.mode {
        PassiveMode::Trigger => {
            if !duel.rolls.chance(passive.trigger_rate) {
                return roll;
            }
            roll.physical = Some(f64::from(stats.atk) * passive.atk_multiplier);
            roll.magical = f64::from(stats.matk) * passive.matk_multiplier;
            roll.defense_reverse = rider.defense_reverse;
            roll.agi_atk_ratio = rider.agi_atk_ratio;
            roll.heal_int_ratio = rider.heal_int_ratio;
            duel.out.log(format!("{} unleashes {}!", duel.player.name, passive.name));
        }
        PassiveMode::Continuous => {
            roll.magical = f64::from(stats.matk) * rider.bonus_matk_ratio;
        }
    }

    if let Some(status) = rider.apply_status {
        if duel.rolls.chance(rider.status_chance) {
            roll.status = Some((status, rider.status_millis));
        }
    }
    roll.penetration = rider.def_penetration;
    roll.atb_on_crit = rider.atb_on_crit;
    roll
}

/// One hit. Returns the damage computed for it.
fn strike(duel: &mut Duel<'_>, hit: u8) -> u32 {
    let stats = duel.stats();
    let loadout = duel.loadout();
    let atk = f64::from(stats.atk);

    let mut physical = atk;
    let might = loadout.stacked(PassiveEffect::MaxMight);
    if might.is_active() && f64::from(duel.player.hp) >= f64::from(stats.max_hp) * 0.95 {
        physical += f64::from(floor_u32(atk * might.value));
    }

    let passive = roll_passive(duel);
    if let Some(replaced) = passive.physical {
        physical = replaced;
    }
    physical += f64::from(stats.attributes.agility) * passive.agi_atk_ratio;

    let crit_chance = (stats.crit_chance + duel.combat.crit_bonus).min(1.0);
    let crit = duel.rolls.chance(crit_chance);
    if crit {
        physical *= stats.crit_damage;
        if passive.atb_on_crit > 0.0 {
            duel.out.gauge(Side::Player, passive.atb_on_crit);
            duel.out.log("The critical blow charges your gauge.");
        }
    }

    let execute = loadout.stacked(PassiveEffect::ExecuteDmg);
    let execute_bonus = (execute.is_active()
        && duel.opponent.hp_ratio() < duel.config().execute_threshold)
        .then_some(execute.value);

    let mods = HitModifiers {
        burn_stacks: duel.opponent.statuses.stacks(StatusKind::Burn),
        frozen: duel.opponent.statuses.has(StatusKind::Frozen),
        execute_bonus,
        penetration: passive.penetration + loadout.stacked(PassiveEffect::DefPierce).value,
        defense_reverse: passive.defense_reverse,
    };
    let defense = f64::from(duel.opponent.def) * duel.opponent.buffs.modifiers().def_mult;
    let resolution = resolve_hit(physical + passive.magical, defense, mods);

    if resolution.shattered {
        duel.opponent.statuses.remove(StatusKind::Frozen);
        duel.out
            .float(FloatingText::labeled(FloatingTextKind::Critical, Side::Opponent, "shatter"));
        duel.out.log("The ice shatters for double damage!");
    }
    if resolution.executed {
        duel.out
            .float(FloatingText::labeled(FloatingTextKind::Critical, Side::Opponent, "execute"));
    }

    let damage = resolution.damage;
    duel.damage_opponent(damage);
    let kind = if crit {
        FloatingTextKind::Critical
    } else {
        FloatingTextKind::Damage
    };
    duel.out.float(FloatingText::amount(kind, Side::Opponent, damage));
    let combo = if hit > 1 { " (combo)" } else { "" };
    duel.out.log(format!(
        "{} hits {} for {damage}{combo}{}",
        duel.player.name,
        duel.opponent.name,
        if crit { ", a critical hit!" } else { "." }
    ));

    if duel.opponent_alive() {
        if let Some((status, millis)) = passive.status {
            duel.inflict(status, millis);
        }
        let passives = duel.combat.passives;
        passives.run(PassivePhase::OnHit, duel, damage);
    }

    if passive.heal_int_ratio > 0.0 {
        let heal = floor_u32(f64::from(stats.attributes.intellect) * passive.heal_int_ratio);
        if heal > 0 {
            duel.heal_player(heal);
        }
    }

    damage
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::{
        FixedRng, PassiveRider, WeaponCategory, WeaponDefinition, WeaponPassiveDefinition,
    };
    use crate::passive::PassiveRegistry;
    use crate::resolve::fixtures::{Catalog, bare_player, rolls, stats};
    use crate::state::{ItemState, OpponentState, PlayerState};
    use crate::stats::Loadout;

    fn attack(player: &PlayerState, opponent: &OpponentState, rng: &FixedRng) -> ActionOutcome {
        attack_with(player, opponent, rng, &Catalog::default())
    }

    fn attack_with(
        player: &PlayerState,
        opponent: &OpponentState,
        rng: &FixedRng,
        catalog: &Catalog,
    ) -> ActionOutcome {
        let loadout = Loadout::resolve(player, catalog, catalog).expect("loadout");
        let derived = stats(20, 0, 100);
        let registry = PassiveRegistry::standard();
        let config = GameConfig::default();
        let combat = Combat::new(player, opponent, &derived, &loadout, &registry, &config);
        basic_attack(combat, rolls(rng))
    }

    #[test]
    fn basic_exchange_kills_on_second_swing() {
        let player = bare_player(100);
        let mut opponent = OpponentState::with_stats("goblin", 30, 5, 0, 10);
        let rng = FixedRng::always_fail();

        let first = attack(&player, &opponent, &rng);
        assert_eq!(first.opponent.hp, Some(10));
        assert!(!first.opponent_died);
        first.opponent.apply_to(&mut opponent);

        let second = attack(&player, &opponent, &rng);
        assert_eq!(second.opponent.hp, Some(0));
        assert!(second.opponent_died);
    }

    #[test]
    fn blocked_attacker_produces_noop() {
        let mut player = bare_player(100);
        player.statuses.apply(StatusKind::Stun, None);
        let opponent = OpponentState::with_stats("goblin", 30, 5, 0, 10);
        let outcome = attack(&player, &opponent, &FixedRng::always_succeed());
        assert!(outcome.is_noop());
        assert_eq!(outcome.logs.len(), 1);
    }

    #[test]
    fn frozen_target_shatters_once() {
        let player = bare_player(100);
        let mut opponent = OpponentState::with_stats("golem", 200, 5, 0, 10);
        opponent.statuses.apply(StatusKind::Frozen, None);
        let rng = FixedRng::always_fail();

        let first = attack(&player, &opponent, &rng);
        assert_eq!(first.opponent.hp, Some(160));
        first.opponent.apply_to(&mut opponent);
        assert!(!opponent.statuses.has(StatusKind::Frozen));

        let second = attack(&player, &opponent, &rng);
        assert_eq!(second.opponent.hp, Some(140));
    }

    #[test]
    fn double_strike_is_consumed_and_combo_stops_on_kill() {
        let mut player = bare_player(100);
        player
            .buffs
            .apply(BuffKind::DoubleStrike, GameConfig::PERSISTENT_MILLIS, true);
        let opponent = OpponentState::with_stats("rat", 100, 5, 0, 10);
        let outcome = attack(&player, &opponent, &FixedRng::always_fail());
        assert_eq!(outcome.opponent.hp, Some(60));
        assert_eq!(outcome.player.max_damage, Some(40));
        let buffs = outcome.player.buffs.expect("double strike consumed");
        assert!(!buffs.has(BuffKind::DoubleStrike));

        let weak = OpponentState::with_stats("rat", 15, 5, 0, 10);
        let outcome = attack(&player, &weak, &FixedRng::always_fail());
        assert!(outcome.opponent_died);
        assert_eq!(outcome.player.max_damage, Some(20));
    }

    #[test]
    fn bleeding_to_death_aborts_the_swing() {
        let mut player = bare_player(1);
        player.statuses.apply(StatusKind::Bleed, None);
        let opponent = OpponentState::with_stats("rat", 100, 5, 0, 10);
        let outcome = attack(&player, &opponent, &FixedRng::always_fail());
        assert!(outcome.player_died);
        assert!(outcome.opponent.hp.is_none());
    }

    #[test]
    fn trigger_passive_replaces_damage_and_applies_rider() {
        let mut catalog = Catalog::default();
        catalog.weapons.insert(
            "ember".into(),
            WeaponDefinition {
                id: "ember".into(),
                name: "Ember Blade".into(),
                category: WeaponCategory::Sword,
                atk: 0,
                max_sockets: 0,
                passive: Some("flame_slash".into()),
            },
        );
        catalog.passives.insert(
            "flame_slash".into(),
            WeaponPassiveDefinition {
                id: "flame_slash".into(),
                name: "Flame Slash".into(),
                mode: PassiveMode::Trigger,
                trigger_rate: 0.5,
                atk_multiplier: 2.0,
                matk_multiplier: 0.0,
                rider: PassiveRider {
                    apply_status: Some(StatusKind::Burn),
                    ..PassiveRider::default()
                },
            },
        );
        let mut player = bare_player(100);
        player.weapon = Some(ItemState::new("ember", 0));
        let opponent = OpponentState::with_stats("slime", 100, 5, 0, 10);

        // trigger, rider status, crit (0% never passes)
        let outcome = attack_with(&player, &opponent, &FixedRng::always_succeed(), &catalog);
        assert_eq!(outcome.opponent.hp, Some(60));
        let statuses = outcome.opponent.statuses.expect("burn applied");
        assert_eq!(statuses.stacks(StatusKind::Burn), 1);
    }
}
