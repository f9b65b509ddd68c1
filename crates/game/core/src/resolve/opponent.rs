//! Opponent attack and the player's reactions to being struck.

use super::{Combat, Duel, bleed_on_action};
use crate::combat::damage::floor_u32;
use crate::combat::{
    ActionOutcome, FloatingText, FloatingTextKind, HitModifiers, OutcomeFlags, Side, resolve_hit,
};
use crate::config::GameConfig;
use crate::env::Rolls;
use crate::ledger::{BuffKind, StatusKind};
use crate::passive::PassivePhase;
use crate::state::{Combatant, OpponentRole};
use crate::stats::clamp_dodge;

const COUNTER_RATIO: f64 = 0.8;
const ON_HIT_BUFF_MILLIS: u32 = 4_000;

/// Resolves one opponent attack against the player.
///
/// # Order
///
/// ```text
/// blocked?            → no-op
/// bleed recoil        → abort if the opponent dies
/// evasion stance      → consumed, miss
/// counter stance      → consumed, reflect floor(atk × 0.8)
/// dodge roll          → miss
/// role triggers       → tank fortify, boss berserk
/// damage              → buffs, burn, mitigation, shatter, shield then hp
/// survived?           → thorns, berserk_on_hit, armor reactions, on-hit table
/// death save          → hp 1 if pre-hit hp fraction > 0.5
/// ```
pub fn opponent_attack(combat: Combat<'_>, rolls: Rolls<'_>) -> ActionOutcome {
    if combat.opponent.is_action_blocked() {
        return ActionOutcome::noop(format!("{} cannot act!", combat.opponent.name));
    }

    let mut duel = Duel::begin(combat, rolls);
    if bleed_on_action(&mut duel, Side::Opponent) {
        duel.out.log(format!("{} bleeds out.", duel.opponent.name));
        return duel.finish();
    }

    if duel.player.buffs.consume(BuffKind::EvasionStance) {
        duel.out
            .float(FloatingText::labeled(FloatingTextKind::Miss, Side::Player, "evasion"));
        duel.out.log(format!(
            "Evasion stance! {} slips past {}'s attack.",
            duel.player.name, duel.opponent.name
        ));
        return duel.finish();
    }

    if duel.player.buffs.consume(BuffKind::CounterStance) {
        let reflected = floor_u32(f64::from(duel.opponent.atk) * COUNTER_RATIO);
        duel.damage_opponent(reflected);
        duel.out
            .float(FloatingText::amount(FloatingTextKind::Damage, Side::Opponent, reflected));
        duel.out.log(format!(
            "Counter! {}'s attack rebounds for {reflected}.",
            duel.opponent.name
        ));
        return duel.finish();
    }

    let dodge_bonus = duel
        .loadout()
        .weapon_passive()
        .map_or(0.0, |passive| passive.rider.dodge_bonus);
    let dodge = clamp_dodge(duel.stats().dodge_chance + dodge_bonus);
    if duel.rolls.chance(dodge) {
        duel.out
            .float(FloatingText::labeled(FloatingTextKind::Miss, Side::Player, "miss"));
        duel.out
            .log(format!("{} dodges {}'s attack.", duel.player.name, duel.opponent.name));
        return duel.finish();
    }

    role_triggers(&mut duel);

    let hp_before = duel.player.hp;
    let damage = land_hit(&mut duel);

    if duel.player.is_alive() {
        let passives = duel.combat.passives;
        passives.run(PassivePhase::OnStruck, &mut duel, damage);
        armor_reactions(&mut duel);
        on_hit_table(&mut duel);
    } else {
        death_save(&mut duel, hp_before);
    }

    if !duel.player.is_alive() {
        duel.out.log(format!("{} has fallen...", duel.player.name));
    }
    duel.finish()
}

/// Tank fortify and boss berserk, each granted once while absent.
fn role_triggers(duel: &mut Duel<'_>) {
    let config = duel.config();
    let ratio = duel.opponent.hp_ratio();
    let trigger = match duel.opponent.role {
        OpponentRole::Tank if ratio <= config.tank_fortify_threshold => Some(BuffKind::Fortify),
        OpponentRole::Boss if ratio <= config.boss_berserk_threshold => Some(BuffKind::Berserk),
        _ => None,
    };
    let Some(buff) = trigger else {
        return;
    };
    if duel.opponent.buffs.has(buff) {
        return;
    }
    duel.opponent
        .buffs
        .apply(buff, GameConfig::PERSISTENT_MILLIS, false);
    duel.out
        .float(FloatingText::labeled(FloatingTextKind::Buff, Side::Opponent, buff.as_ref()));
    duel.out
        .log(format!("{} enters {buff} mode!", duel.opponent.name));
}

/// Computes and applies the hit. Returns the full damage before the shield.
fn land_hit(duel: &mut Duel<'_>) -> u32 {
    let stats = duel.stats();
    let atk_mult = duel.opponent.buffs.modifiers().atk_mult;
    let effective_atk = floor_u32(f64::from(duel.opponent.atk) * atk_mult);
    let mods = HitModifiers {
        burn_stacks: duel.player.statuses.stacks(StatusKind::Burn),
        frozen: duel.player.statuses.has(StatusKind::Frozen),
        ..HitModifiers::default()
    };
    let resolution = resolve_hit(f64::from(effective_atk), f64::from(stats.def), mods);
    if resolution.shattered {
        duel.player.statuses.remove(StatusKind::Frozen);
        duel.out
            .float(FloatingText::labeled(FloatingTextKind::Critical, Side::Player, "shatter"));
        duel.out.log("The ice on you shatters! You take double damage!");
    }

    let damage = resolution.damage;
    let absorbed = damage.min(duel.player.shield);
    duel.player.shield -= absorbed;
    let through = damage - absorbed;
    if absorbed > 0 {
        duel.out
            .float(FloatingText::amount(FloatingTextKind::Shield, Side::Player, absorbed));
    }
    if through > 0 {
        duel.wound_player(through);
        duel.out
            .float(FloatingText::amount(FloatingTextKind::Damage, Side::Player, through));
        duel.out.flag(OutcomeFlags::SCREEN_SHAKE);
    }
    duel.out
        .log(format!("{} attacks for {damage} damage!", duel.opponent.name));
    damage
}

fn armor_reactions(duel: &mut Duel<'_>) {
    let Some(effect) = duel.loadout().armor_effect() else {
        return;
    };
    let stats = duel.stats();

    if let Some(buff) = effect.on_hit_buff {
        let millis = effect.on_hit_buff_millis.unwrap_or(ON_HIT_BUFF_MILLIS);
        duel.player.buffs.apply(buff, millis, false);
        duel.out
            .float(FloatingText::labeled(FloatingTextKind::Buff, Side::Player, buff.as_ref()));
    }

    if effect.on_hit_heal_ratio > 0.0 {
        let heal = floor_u32(f64::from(stats.max_hp) * effect.on_hit_heal_ratio);
        duel.heal_player(heal);
    }

    if effect.on_hit_shield_refill_chance > 0.0
        && duel.rolls.chance(effect.on_hit_shield_refill_chance)
    {
        duel.player.shield = stats.max_shield;
        duel.out.float(FloatingText::amount(
            FloatingTextKind::Shield,
            Side::Player,
            stats.max_shield,
        ));
        duel.out.log("Your shield miraculously restores itself!");
    }

    if effect.on_hit_freeze_chance > 0.0 && duel.rolls.chance(effect.on_hit_freeze_chance) {
        duel.inflict(StatusKind::Frozen, None);
    }
}

/// Statuses on the player (unless immune) and self buffs on the opponent.
fn on_hit_table(duel: &mut Duel<'_>) {
    let table = duel.combat.opponent.on_hit.clone();
    let loadout = duel.loadout();

    for entry in &table.statuses {
        if !duel.rolls.chance(entry.chance) {
            continue;
        }
        if loadout.is_immune(entry.kind) {
            duel.out.float(FloatingText::labeled(
                FloatingTextKind::Immune,
                Side::Player,
                entry.kind.as_ref(),
            ));
            duel.out
                .log(format!("{} is immune to {}.", duel.player.name, entry.kind));
            continue;
        }
        duel.player.statuses.apply(entry.kind, None);
        duel.out.float(FloatingText::labeled(
            FloatingTextKind::Status,
            Side::Player,
            entry.kind.as_ref(),
        ));
        duel.out.log(format!(
            "{}'s attack inflicts {} on {}.",
            duel.opponent.name, entry.kind, duel.player.name
        ));
    }

    for entry in &table.self_buffs {
        if !duel.rolls.chance(entry.chance) {
            continue;
        }
        duel.opponent.buffs.apply(entry.kind, ON_HIT_BUFF_MILLIS, true);
        duel.out.float(FloatingText::labeled(
            FloatingTextKind::Buff,
            Side::Opponent,
            entry.kind.as_ref(),
        ));
        duel.out
            .log(format!("{} takes up {}.", duel.opponent.name, entry.kind));
    }
}

/// Clamps a killing blow to 1 hp when the armor allows it.
///
/// Re-evaluated on every hit: any lethal hit that starts above the threshold
/// is survived.
fn death_save(duel: &mut Duel<'_>, hp_before: u32) {
    let armored = duel
        .loadout()
        .armor_effect()
        .is_some_and(|effect| effect.death_save);
    let max_hp = duel.stats().max_hp;
    if !armored || max_hp == 0 {
        return;
    }
    let ratio = f64::from(hp_before) / f64::from(max_hp);
    if ratio > duel.config().death_save_threshold {
        duel.player.hp = 1;
        duel.out
            .float(FloatingText::labeled(FloatingTextKind::Buff, Side::Player, "death_save"));
        duel.out.log("Undying! You cling to life.");
    }
}
