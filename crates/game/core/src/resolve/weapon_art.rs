//! Weapon arts: one cooldown-gated technique per weapon category.

use super::{Combat, Duel, bleed_on_action};
use crate::combat::damage::floor_u32;
use crate::combat::{ActionOutcome, FloatingText, FloatingTextKind, Side, amplify_unmitigated};
use crate::config::GameConfig;
use crate::env::{ArtEffect, Rolls, WeaponArtDefinition};
use crate::ledger::StatusKind;
use crate::passive::PassiveEffect;
use crate::state::Combatant;

/// Resolves the equipped weapon's art.
///
/// `art` is the definition looked up for the weapon's category. Without a
/// weapon or an art the outcome is a no-op; otherwise the art's cooldown is
/// always reported, even when bleed recoil ends the action early.
pub fn weapon_art(
    combat: Combat<'_>,
    art: Option<&WeaponArtDefinition>,
    rolls: Rolls<'_>,
) -> ActionOutcome {
    if combat.loadout.weapon().is_none() {
        return ActionOutcome::noop("No weapon equipped: there is no art to use.");
    }
    let Some(art) = art else {
        return ActionOutcome::noop("This weapon has no art.");
    };
    if combat.player.is_action_blocked() {
        return ActionOutcome::noop(format!("{} cannot act!", combat.player.name));
    }

    let mut duel = Duel::begin(combat, rolls);
    duel.out.weapon_art_cooldown(art.cooldown_millis);
    if bleed_on_action(&mut duel, Side::Player) {
        return duel.finish();
    }

    match art.effect {
        ArtEffect::Strike {
            atk_ratio,
            status,
            status_chance,
        } => strike(&mut duel, art, atk_ratio, status, status_chance),
        ArtEffect::Barrier { matk_ratio } => {
            let gain = floor_u32(f64::from(duel.stats().matk) * matk_ratio);
            duel.player.shield = duel.player.shield.saturating_add(gain);
            duel.out
                .float(FloatingText::amount(FloatingTextKind::Shield, Side::Player, gain));
            duel.out
                .log(format!("{}! Gained {gain} shield.", art.name));
        }
        ArtEffect::Stance { buff } => {
            duel.player
                .buffs
                .apply(buff, GameConfig::PERSISTENT_MILLIS, true);
            duel.out
                .float(FloatingText::labeled(FloatingTextKind::Buff, Side::Player, buff.as_ref()));
            duel.out.log(format!("{}! {buff} is ready.", art.name));
        }
    }
    duel.finish()
}

/// Unmitigated `floor(atk × ratio)`, amplified by `skill_amp`, burn and shatter.
fn strike(
    duel: &mut Duel<'_>,
    art: &WeaponArtDefinition,
    atk_ratio: f64,
    status: Option<StatusKind>,
    status_chance: f64,
) {
    let base = floor_u32(f64::from(duel.stats().atk) * atk_ratio);
    let damage = skill_amplified(duel, base);
    let frozen = duel.opponent.statuses.has(StatusKind::Frozen);
    let damage = amplify_unmitigated(
        damage,
        duel.opponent.statuses.stacks(StatusKind::Burn),
        frozen,
    );
    if frozen {
        duel.opponent.statuses.remove(StatusKind::Frozen);
        duel.out
            .float(FloatingText::labeled(FloatingTextKind::Critical, Side::Opponent, "shatter"));
    }

    duel.damage_opponent(damage);
    duel.out
        .float(FloatingText::amount(FloatingTextKind::Damage, Side::Opponent, damage));
    duel.out
        .log(format!("{}! Dealt {damage} damage.", art.name));
    duel.record_damage(damage);

    if !duel.opponent_alive() {
        duel.out.log(format!("{} is defeated!", duel.opponent.name));
        return;
    }
    if let Some(status) = status {
        if duel.rolls.chance(status_chance) {
            duel.inflict(status, None);
        }
    }
}

/// `floor(base × (1 + skill_amp))` when the affix is equipped.
pub(crate) fn skill_amplified(duel: &Duel<'_>, base: u32) -> u32 {
    let amp = duel.loadout().stacked(PassiveEffect::SkillAmp);
    if amp.is_active() {
        floor_u32(f64::from(base) * (1.0 + amp.value))
    } else {
        base
    }
}
